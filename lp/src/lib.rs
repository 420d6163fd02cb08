//! zerosum LP - Linear programming engine
//!
//! This crate solves standard-form maximization problems
//! (maximize c·x subject to A·x ≤ b, x ≥ 0) and exposes optimal primal
//! and dual vectors. It is the solving collaborator behind the game
//! core; the core consumes it only through `primal()` / `dual()`.
//!
//! The engine has no knowledge of games or payoff matrices.

pub mod simplex;

pub use simplex::{LpError, SimplexSolver};

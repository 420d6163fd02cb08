//! zerosum Engine - Two-person zero-sum game solver
//!
//! This crate computes the value and optimal mixed strategies of a finite
//! two-person zero-sum game from its payoff matrix, via the standard
//! reduction to linear programming:
//!
//! 1. [`transform`] shifts the payoff matrix strictly positive and builds
//!    the standard-form LP.
//! 2. The LP engine (the `zerosum-lp` crate) solves it.
//! 3. [`strategy`] normalizes the primal/dual vectors into probability
//!    distributions and recovers the game value.
//! 4. [`certify`] independently verifies the result is a Nash equilibrium.
//!
//! [`game::ZeroSumGame`] orchestrates the pipeline and is the public
//! entry point.

pub mod certify;
pub mod error;
pub mod game;
pub mod matrix;
pub mod plot;
pub mod strategy;
pub mod transform;

pub use certify::{Certificate, Check, CheckFailure};
pub use error::GameError;
pub use game::{SolveOptions, ZeroSumGame};
pub use matrix::PayoffMatrix;
pub use plot::{LineSegment, StrategyRenderer};
pub use strategy::MixedSolution;

/// Numerical tolerance for probability-distribution and equilibrium checks.
pub const EPSILON: f64 = 1e-8;

//! Error types for the game solving pipeline

use thiserror::Error;
use zerosum_lp::LpError;

/// Failure modes of game construction.
///
/// `Infeasible` / `Unbounded` from the LP engine are propagated unchanged:
/// the game transformation always produces a feasible, bounded LP, so
/// seeing one of those indicates a defect upstream, not a property of the
/// input game.
#[derive(Debug, Error)]
pub enum GameError {
    /// The payoff matrix is empty or non-rectangular.
    #[error("malformed payoff matrix: {0}")]
    MalformedMatrix(String),
    /// The primal solution's component sum cannot be used as a
    /// normalization scale (zero or non-finite).
    #[error("degenerate LP solution: primal scale {scale} cannot be normalized")]
    DegenerateSolution { scale: f64 },
    /// Propagated LP engine failure.
    #[error(transparent)]
    Lp(#[from] LpError),
}

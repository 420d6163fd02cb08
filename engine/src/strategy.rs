//! Raw LP solution → mixed strategies and game value
//!
//! The LP engine returns unnormalized primal/dual vectors. Dividing both
//! by the primal component sum yields probability distributions, and the
//! reciprocal of that sum (minus the transformation shift) is the value
//! of the original game.

use crate::error::GameError;

/// Normalized solution of a zero-sum game.
///
/// `row` has one component per column of the payoff matrix (the primal
/// side of the LP), `column` one per row (the dual side). Both are
/// probability distributions; computed once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct MixedSolution {
    /// Row strategy x̂, length n.
    pub row: Vec<f64>,
    /// Column strategy ŷ, length m.
    pub column: Vec<f64>,
    /// Game value under optimal play.
    pub value: f64,
}

/// Normalize the LP engine's primal/dual vectors into mixed strategies
/// and recover the game value.
///
/// Fails with [`GameError::DegenerateSolution`] if the primal component
/// sum is zero or non-finite. For a well-formed game LP this cannot
/// happen; the guard catches engine or transformation defects.
pub fn extract(primal: &[f64], dual: &[f64], shift: f64) -> Result<MixedSolution, GameError> {
    let scale: f64 = primal.iter().sum();
    if !scale.is_finite() || scale == 0.0 {
        return Err(GameError::DegenerateSolution { scale });
    }

    let row = primal.iter().map(|&xj| xj / scale).collect();
    let column = dual.iter().map(|&yi| yi / scale).collect();
    let value = 1.0 / scale - shift;

    Ok(MixedSolution { row, column, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    #[test]
    fn test_normalization() {
        let solution = extract(&[0.25, 0.25], &[0.1, 0.4], 2.0).unwrap();
        assert!((solution.row[0] - 0.5).abs() < EPSILON);
        assert!((solution.row[1] - 0.5).abs() < EPSILON);
        assert!((solution.column[0] - 0.2).abs() < EPSILON);
        assert!((solution.column[1] - 0.8).abs() < EPSILON);
    }

    #[test]
    fn test_value_inverts_scale_and_shift() {
        // scale = 0.5 → 1/scale = 2.0; shift 2.0 → value 0.0
        let solution = extract(&[0.25, 0.25], &[0.25, 0.25], 2.0).unwrap();
        assert!(solution.value.abs() < EPSILON);
    }

    #[test]
    fn test_strategies_sum_to_one() {
        let solution = extract(&[0.3, 0.1, 0.2], &[0.25, 0.35], 1.0).unwrap();
        let row_sum: f64 = solution.row.iter().sum();
        let column_sum: f64 = solution.column.iter().sum();
        assert!((row_sum - 1.0).abs() < EPSILON);
        assert!((column_sum - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_zero_scale_is_degenerate() {
        let result = extract(&[0.0, 0.0], &[0.5], 1.0);
        assert!(matches!(result, Err(GameError::DegenerateSolution { .. })));
    }

    #[test]
    fn test_non_finite_scale_is_degenerate() {
        let result = extract(&[f64::INFINITY, 1.0], &[0.5], 1.0);
        assert!(matches!(result, Err(GameError::DegenerateSolution { .. })));
    }
}

//! Payoff matrix → standard-form LP transformation
//!
//! The LP-to-game reduction requires a strictly positive coefficient
//! matrix so that the optimal objective is invertible to a probability
//! scale. A single scan finds the minimum entry; the shift constant is 0
//! when the matrix is already strictly positive and `1 − min` otherwise.
//!
//! The resulting program is `maximize 1·x subject to A·x ≤ 1, x ≥ 0`,
//! which is feasible (x = 0) and bounded (A strictly positive) by
//! construction.

use crate::matrix::PayoffMatrix;

/// Standard-form LP derived from a payoff matrix, plus the shift that
/// produced it. Exists only to be handed to the LP engine.
#[derive(Debug, Clone)]
pub struct StandardFormLp {
    /// m×n coefficient matrix, `a[i][j] = payoff(i, j) + shift`.
    pub a: Vec<Vec<f64>>,
    /// Right-hand side, all ones, length m.
    pub b: Vec<f64>,
    /// Objective, all ones, length n.
    pub c: Vec<f64>,
    /// Constant added to every payoff entry.
    pub shift: f64,
}

/// Constant that makes every entry of `payoff` strictly positive when
/// added: 0 if the minimum entry is already positive, else `1 − min`.
pub fn shift_constant(payoff: &PayoffMatrix) -> f64 {
    let min = payoff.min_entry();
    if min > 0.0 {
        0.0
    } else {
        1.0 - min
    }
}

/// Build the standard-form LP for `payoff`. Pure function of the input.
pub fn to_standard_form(payoff: &PayoffMatrix) -> StandardFormLp {
    let m = payoff.rows();
    let n = payoff.cols();
    let shift = shift_constant(payoff);

    let a = (0..m)
        .map(|i| payoff.row(i).iter().map(|&entry| entry + shift).collect())
        .collect();

    StandardFormLp {
        a,
        b: vec![1.0; m],
        c: vec![1.0; n],
        shift,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strictly_positive_matrix_not_shifted() {
        let payoff = PayoffMatrix::from_rows(vec![vec![0.5, 2.0], vec![3.0, 1.0]]).unwrap();
        assert_eq!(shift_constant(&payoff), 0.0);
    }

    #[test]
    fn test_zero_entry_forces_shift() {
        let payoff = PayoffMatrix::from_rows(vec![vec![2.0, 2.0], vec![0.0, 1.0]]).unwrap();
        assert_eq!(shift_constant(&payoff), 1.0);
    }

    #[test]
    fn test_negative_minimum_shift() {
        let payoff = PayoffMatrix::from_rows(vec![vec![1.0, -1.0], vec![-1.0, 1.0]]).unwrap();
        assert_eq!(shift_constant(&payoff), 2.0);
    }

    #[test]
    fn test_standard_form_shape() {
        let payoff = PayoffMatrix::from_rows(vec![
            vec![-1.0, 1.0, 3.0, -3.0],
            vec![1.0, -1.0, -2.0, 2.0],
        ])
        .unwrap();
        let lp = to_standard_form(&payoff);

        assert_eq!(lp.b, vec![1.0, 1.0]);
        assert_eq!(lp.c, vec![1.0; 4]);
        assert_eq!(lp.shift, 4.0);
        for (i, row) in lp.a.iter().enumerate() {
            for (j, &entry) in row.iter().enumerate() {
                assert!(entry > 0.0, "a[{}][{}] = {} not strictly positive", i, j, entry);
                assert_eq!(entry, payoff.get(i, j) + lp.shift);
            }
        }
    }
}

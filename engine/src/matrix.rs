//! Payoff matrix for a two-person zero-sum game
//!
//! Entry (i, j) is the amount the column player pays the row player when
//! row plays pure strategy i and column plays pure strategy j. The matrix
//! is validated at construction and immutable afterwards; every derived
//! quantity in the pipeline is computed from this one value.

use crate::error::GameError;

/// Immutable m×n payoff matrix, m ≥ 1 rows and n ≥ 1 columns.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffMatrix {
    entries: Vec<Vec<f64>>,
    rows: usize,
    cols: usize,
}

impl PayoffMatrix {
    /// Build a matrix from its rows.
    ///
    /// Fails with [`GameError::MalformedMatrix`] if there are no rows, the
    /// first row is empty, or any row's length differs from the first's.
    pub fn from_rows(entries: Vec<Vec<f64>>) -> Result<Self, GameError> {
        let rows = entries.len();
        if rows == 0 {
            return Err(GameError::MalformedMatrix("matrix has no rows".to_string()));
        }
        let cols = entries[0].len();
        if cols == 0 {
            return Err(GameError::MalformedMatrix("matrix has no columns".to_string()));
        }
        for (i, row) in entries.iter().enumerate() {
            if row.len() != cols {
                return Err(GameError::MalformedMatrix(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
        }
        Ok(PayoffMatrix { entries, rows, cols })
    }

    /// Number of row-player pure strategies.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of column-player pure strategies.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Payoff entry (i, j).
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.entries[i][j]
    }

    /// Row i as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.entries[i]
    }

    /// Smallest entry in the matrix.
    pub fn min_entry(&self) -> f64 {
        self.entries
            .iter()
            .flatten()
            .copied()
            .fold(f64::INFINITY, f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_accessors() {
        let payoff = PayoffMatrix::from_rows(vec![
            vec![1.0, -1.0, 3.0],
            vec![-2.0, 0.0, 4.0],
        ])
        .unwrap();
        assert_eq!(payoff.rows(), 2);
        assert_eq!(payoff.cols(), 3);
        assert_eq!(payoff.get(1, 2), 4.0);
        assert_eq!(payoff.row(0), &[1.0, -1.0, 3.0]);
    }

    #[test]
    fn test_min_entry() {
        let payoff = PayoffMatrix::from_rows(vec![
            vec![1.0, -1.0, 3.0],
            vec![-2.0, 0.0, 4.0],
        ])
        .unwrap();
        assert_eq!(payoff.min_entry(), -2.0);
    }

    #[test]
    fn test_empty_matrix_rejected() {
        let result = PayoffMatrix::from_rows(vec![]);
        assert!(matches!(result, Err(GameError::MalformedMatrix(_))));
    }

    #[test]
    fn test_empty_row_rejected() {
        let result = PayoffMatrix::from_rows(vec![vec![]]);
        assert!(matches!(result, Err(GameError::MalformedMatrix(_))));
    }

    #[test]
    fn test_ragged_matrix_rejected() {
        let result = PayoffMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(result, Err(GameError::MalformedMatrix(_))));
    }
}

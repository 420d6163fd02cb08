//! Dense tableau simplex with Bland's rule
//!
//! Solves `maximize c·x subject to A·x ≤ b, x ≥ 0` for `b ≥ 0`, so the
//! all-slack basis is an initial feasible point and no phase-1 search is
//! needed. Bland's smallest-index pivot rule guarantees termination even
//! on degenerate programs.
//!
//! Tableau layout, (m+1)×(n+m+1):
//!   rows 0..m   : [ A | I | b ]   (slack identity, right-hand side last)
//!   row  m      : [ c | 0 | 0 ]   (objective; becomes -value at optimum)
//!
//! The dual optimum is read off the negated slack columns of the
//! objective row once the tableau is optimal.

use thiserror::Error;

/// Pivot tolerance: entries at or below this are treated as zero.
const EPSILON: f64 = 1e-10;

/// Tolerance for the post-solve feasibility/duality self-check, looser
/// than the pivot tolerance to absorb accumulated roundoff.
const CHECK_EPSILON: f64 = 1e-7;

/// Failure modes of the solver.
#[derive(Debug, Error)]
pub enum LpError {
    /// The slack basis is not a feasible starting point (some `b[i] < 0`).
    /// This solver does not run a phase-1 search for a feasible point.
    #[error("infeasible linear program: b[{index}] = {value} is negative")]
    Infeasible { index: usize, value: f64 },
    /// The ratio test found no limiting row for the entering column, so
    /// the objective increases without bound along it.
    #[error("unbounded linear program: no ratio limit for entering column {column}")]
    Unbounded { column: usize },
}

/// Simplex solver over a dense tableau.
///
/// Construction runs the solve to completion; afterwards the solver is a
/// read-only view over the optimal tableau.
pub struct SimplexSolver {
    /// (m+1)×(n+m+1) tableau, see module docs for layout.
    tableau: Vec<Vec<f64>>,
    /// Number of constraints (rows of A).
    m: usize,
    /// Number of original variables (columns of A).
    n: usize,
    /// basis[i] = column index of the basic variable in row i.
    basis: Vec<usize>,
}

impl SimplexSolver {
    /// Solve `maximize c·x subject to A·x ≤ b, x ≥ 0`.
    ///
    /// `a` is m×n, `b` has length m (all entries ≥ 0), `c` has length n.
    pub fn new(a: &[Vec<f64>], b: &[f64], c: &[f64]) -> Result<Self, LpError> {
        let m = b.len();
        let n = c.len();

        for (index, &value) in b.iter().enumerate() {
            if value < 0.0 {
                return Err(LpError::Infeasible { index, value });
            }
        }

        let mut tableau = vec![vec![0.0_f64; n + m + 1]; m + 1];
        for i in 0..m {
            tableau[i][..n].copy_from_slice(&a[i]);
            tableau[i][n + i] = 1.0;
            tableau[i][n + m] = b[i];
        }
        tableau[m][..n].copy_from_slice(c);

        let basis = (0..m).map(|i| n + i).collect();
        let mut solver = SimplexSolver { tableau, m, n, basis };
        solver.solve()?;

        debug_assert!(solver.check(a, b, c));
        Ok(solver)
    }

    /// Pivot until no column can improve the objective.
    fn solve(&mut self) -> Result<(), LpError> {
        while let Some(q) = self.entering_column() {
            let p = self
                .min_ratio_row(q)
                .ok_or(LpError::Unbounded { column: q })?;
            self.pivot(p, q);
            self.basis[p] = q;
        }
        Ok(())
    }

    /// Bland's rule: lowest-index column with a positive objective
    /// coefficient, `None` when the tableau is optimal.
    fn entering_column(&self) -> Option<usize> {
        (0..self.m + self.n).find(|&j| self.tableau[self.m][j] > EPSILON)
    }

    /// Minimum-ratio test over rows with a positive entry in column `q`.
    /// `None` means the column is unbounded.
    fn min_ratio_row(&self, q: usize) -> Option<usize> {
        let rhs = self.n + self.m;
        let mut p: Option<usize> = None;
        for i in 0..self.m {
            if self.tableau[i][q] <= EPSILON {
                continue;
            }
            let ratio = self.tableau[i][rhs] / self.tableau[i][q];
            match p {
                None => p = Some(i),
                Some(r) if ratio < self.tableau[r][rhs] / self.tableau[r][q] => p = Some(i),
                _ => {}
            }
        }
        p
    }

    /// Gaussian pivot on entry (p, q): eliminate column q from every other
    /// row, then scale row p so the pivot entry becomes exactly 1.
    fn pivot(&mut self, p: usize, q: usize) {
        let pivot_row = self.tableau[p].clone();
        let pivot_value = pivot_row[q];

        for (i, row) in self.tableau.iter_mut().enumerate() {
            if i == p {
                continue;
            }
            let factor = row[q] / pivot_value;
            if factor == 0.0 {
                continue;
            }
            for (entry, &pivot_entry) in row.iter_mut().zip(pivot_row.iter()) {
                *entry -= factor * pivot_entry;
            }
            row[q] = 0.0;
        }

        let row = &mut self.tableau[p];
        for entry in row.iter_mut() {
            *entry /= pivot_value;
        }
        row[q] = 1.0;
    }

    /// Optimal objective value c·x*.
    pub fn value(&self) -> f64 {
        -self.tableau[self.m][self.n + self.m]
    }

    /// Optimal primal vector x* (length n), read from the basis.
    pub fn primal(&self) -> Vec<f64> {
        let rhs = self.n + self.m;
        let mut x = vec![0.0_f64; self.n];
        for (i, &var) in self.basis.iter().enumerate() {
            if var < self.n {
                x[var] = self.tableau[i][rhs];
            }
        }
        x
    }

    /// Optimal dual vector y* (length m), read off the negated slack
    /// columns of the objective row.
    pub fn dual(&self) -> Vec<f64> {
        (0..self.m)
            .map(|i| {
                let y = -self.tableau[self.m][self.n + i];
                // canonicalize -0.0
                if y == 0.0 {
                    0.0
                } else {
                    y
                }
            })
            .collect()
    }

    /// Strong-duality self-check: x* primal feasible, y* dual feasible,
    /// and c·x* = b·y* = value().
    fn check(&self, a: &[Vec<f64>], b: &[f64], c: &[f64]) -> bool {
        self.is_primal_feasible(a, b) && self.is_dual_feasible(a, c) && self.is_optimal(b, c)
    }

    fn is_primal_feasible(&self, a: &[Vec<f64>], b: &[f64]) -> bool {
        let x = self.primal();
        for (j, &xj) in x.iter().enumerate() {
            if xj < -CHECK_EPSILON {
                log::warn!("primal infeasible: x[{}] = {}", j, xj);
                return false;
            }
        }
        for i in 0..self.m {
            let lhs: f64 = a[i].iter().zip(x.iter()).map(|(&aij, &xj)| aij * xj).sum();
            if lhs > b[i] + CHECK_EPSILON {
                log::warn!("primal infeasible: row {} has A·x = {} > b = {}", i, lhs, b[i]);
                return false;
            }
        }
        true
    }

    fn is_dual_feasible(&self, a: &[Vec<f64>], c: &[f64]) -> bool {
        let y = self.dual();
        for (i, &yi) in y.iter().enumerate() {
            if yi < -CHECK_EPSILON {
                log::warn!("dual infeasible: y[{}] = {}", i, yi);
                return false;
            }
        }
        for j in 0..self.n {
            let lhs: f64 = y.iter().enumerate().map(|(i, &yi)| yi * a[i][j]).sum();
            if lhs < c[j] - CHECK_EPSILON {
                log::warn!("dual infeasible: column {} has y·A = {} < c = {}", j, lhs, c[j]);
                return false;
            }
        }
        true
    }

    fn is_optimal(&self, b: &[f64], c: &[f64]) -> bool {
        let primal_objective: f64 = c
            .iter()
            .zip(self.primal().iter())
            .map(|(&cj, &xj)| cj * xj)
            .sum();
        let dual_objective: f64 = b
            .iter()
            .zip(self.dual().iter())
            .map(|(&bi, &yi)| bi * yi)
            .sum();
        let value = self.value();
        if (value - primal_objective).abs() > CHECK_EPSILON {
            log::warn!("value = {} but c·x = {}", value, primal_objective);
            return false;
        }
        if (value - dual_objective).abs() > CHECK_EPSILON {
            log::warn!("value = {} but b·y = {}", value, dual_objective);
            return false;
        }
        true
    }
}

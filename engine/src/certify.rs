//! Independent equilibrium certification
//!
//! Verifies an extracted solution against the original payoff matrix:
//! both strategies must be probability distributions, and neither player
//! may have a pure-strategy response that beats the claimed value. The
//! checks use only the payoff matrix and the solution, never the LP
//! tableau, so they catch defects anywhere upstream.
//!
//! Every finite zero-sum game has an equilibrium (minimax theorem), so a
//! failed certificate always signals a bug in the transformer, extractor,
//! or LP engine, never a property of the input game. Failures are
//! reported as structured diagnostics and logged at error level; they are
//! not control flow.

use std::fmt;

use crate::matrix::PayoffMatrix;
use crate::strategy::MixedSolution;
use crate::EPSILON;

/// The four equilibrium conditions, each independently testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Row strategy is a probability distribution.
    PrimalFeasibility,
    /// Column strategy is a probability distribution.
    DualFeasibility,
    /// No row-player pure response beats the value against the row strategy.
    RowOptimality,
    /// No column-player pure response beats the value against the column strategy.
    ColumnOptimality,
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Check::PrimalFeasibility => "primal feasibility",
            Check::DualFeasibility => "dual feasibility",
            Check::RowOptimality => "row-player optimality",
            Check::ColumnOptimality => "column-player optimality",
        };
        f.write_str(name)
    }
}

/// One failed equilibrium condition, with the expected and observed
/// quantities that disagreed.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckFailure {
    pub check: Check,
    pub expected: f64,
    pub observed: f64,
    pub detail: String,
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} failed: {} (expected {}, observed {})",
            self.check, self.detail, self.expected, self.observed
        )
    }
}

/// Outcome of certification: valid when no check failed.
#[derive(Debug, Clone, Default)]
pub struct Certificate {
    pub failures: Vec<CheckFailure>,
}

impl Certificate {
    /// True when all four equilibrium conditions held.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Best pure-strategy response value against the row strategy:
/// `max over rows i of Σ_j payoff(i, j) · row[j]`.
pub fn best_response_to_row(payoff: &PayoffMatrix, row: &[f64]) -> f64 {
    (0..payoff.rows())
        .map(|i| {
            payoff
                .row(i)
                .iter()
                .zip(row.iter())
                .map(|(&pij, &xj)| pij * xj)
                .sum()
        })
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Best pure-strategy response value against the column strategy:
/// `min over columns j of Σ_i payoff(i, j) · column[i]`.
pub fn best_response_to_column(payoff: &PayoffMatrix, column: &[f64]) -> f64 {
    (0..payoff.cols())
        .map(|j| {
            (0..payoff.rows())
                .map(|i| payoff.get(i, j) * column[i])
                .sum()
        })
        .fold(f64::INFINITY, f64::min)
}

/// Certify that `solution` is a Nash equilibrium of `payoff`.
///
/// Runs all four checks unconditionally and collects every failure, so a
/// single certificate reports the full diagnosis.
pub fn certify(payoff: &PayoffMatrix, solution: &MixedSolution) -> Certificate {
    let mut failures = Vec::new();

    check_distribution(Check::PrimalFeasibility, &solution.row, &mut failures);
    check_distribution(Check::DualFeasibility, &solution.column, &mut failures);

    let row_response = best_response_to_row(payoff, &solution.row);
    if (row_response - solution.value).abs() > EPSILON {
        failures.push(CheckFailure {
            check: Check::RowOptimality,
            expected: solution.value,
            observed: row_response,
            detail: "best pure response against row strategy deviates from value".to_string(),
        });
    }

    let column_response = best_response_to_column(payoff, &solution.column);
    if (column_response - solution.value).abs() > EPSILON {
        failures.push(CheckFailure {
            check: Check::ColumnOptimality,
            expected: solution.value,
            observed: column_response,
            detail: "best pure response against column strategy deviates from value".to_string(),
        });
    }

    for failure in &failures {
        log::error!("equilibrium certification: {}", failure);
    }
    Certificate { failures }
}

/// Distribution check: every component ≥ 0 and the components sum to 1.
fn check_distribution(check: Check, strategy: &[f64], failures: &mut Vec<CheckFailure>) {
    for (k, &p) in strategy.iter().enumerate() {
        if p < 0.0 {
            failures.push(CheckFailure {
                check,
                expected: 0.0,
                observed: p,
                detail: format!("component {} is negative", k),
            });
            return;
        }
    }
    let sum: f64 = strategy.iter().sum();
    if (sum - 1.0).abs() > EPSILON {
        failures.push(CheckFailure {
            check,
            expected: 1.0,
            observed: sum,
            detail: "components do not sum to 1".to_string(),
        });
    }
}

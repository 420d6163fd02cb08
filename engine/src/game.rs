//! Game orchestrator
//!
//! Runs the full pipeline at construction (transform → LP solve →
//! extract → optional certification) and is a read-only view over the
//! precomputed solution afterwards. Certification is an explicit,
//! always-compiled function: it runs during construction unless opted
//! out, and [`ZeroSumGame::certify`] can re-run it on demand at any time.

use zerosum_lp::SimplexSolver;

use crate::certify::{self, Certificate};
use crate::error::GameError;
use crate::matrix::PayoffMatrix;
use crate::plot::{self, StrategyRenderer};
use crate::strategy::{self, MixedSolution};
use crate::transform;

/// Construction options.
#[derive(Debug, Clone, Copy)]
pub struct SolveOptions {
    /// Run equilibrium certification as part of construction. On by
    /// default; opt out only in performance-sensitive paths where the
    /// caller certifies separately.
    pub certify: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        SolveOptions { certify: true }
    }
}

impl SolveOptions {
    /// Skip certification during construction.
    pub fn unchecked() -> Self {
        SolveOptions { certify: false }
    }
}

/// A solved two-person zero-sum game.
pub struct ZeroSumGame {
    payoff: PayoffMatrix,
    solution: MixedSolution,
}

impl ZeroSumGame {
    /// Solve `payoff` with default options (certification on).
    pub fn new(payoff: PayoffMatrix) -> Result<Self, GameError> {
        Self::with_options(payoff, SolveOptions::default())
    }

    /// Solve `payoff` with explicit options.
    pub fn with_options(payoff: PayoffMatrix, options: SolveOptions) -> Result<Self, GameError> {
        let lp = transform::to_standard_form(&payoff);
        let solver = SimplexSolver::new(&lp.a, &lp.b, &lp.c)?;
        let solution = strategy::extract(&solver.primal(), &solver.dual(), lp.shift)?;

        log::debug!(
            "solved {}x{} game: value = {}, shift = {}",
            payoff.rows(),
            payoff.cols(),
            solution.value,
            lp.shift
        );

        let game = ZeroSumGame { payoff, solution };
        if options.certify {
            let certificate = game.certify();
            debug_assert!(
                certificate.is_valid(),
                "equilibrium certification failed: {:?}",
                certificate.failures
            );
        }
        Ok(game)
    }

    /// Value of the game under optimal play.
    pub fn value(&self) -> f64 {
        self.solution.value
    }

    /// Optimal row strategy x̂ (length = number of payoff columns).
    pub fn row(&self) -> &[f64] {
        &self.solution.row
    }

    /// Optimal column strategy ŷ (length = number of payoff rows).
    pub fn column(&self) -> &[f64] {
        &self.solution.column
    }

    /// The payoff matrix this game was solved from.
    pub fn payoff(&self) -> &PayoffMatrix {
        &self.payoff
    }

    /// Re-run equilibrium certification against the original payoff
    /// matrix. Deterministic; failures are logged and returned, never
    /// thrown.
    pub fn certify(&self) -> Certificate {
        certify::certify(&self.payoff, &self.solution)
    }

    /// Hand the payoff line segments to `renderer` when the game is
    /// 2- or 3-row; does nothing otherwise. Fire-and-forget.
    pub fn render_to(&self, renderer: &mut dyn StrategyRenderer) {
        if let Some(segments) = plot::strategy_segments(&self.payoff) {
            renderer.render(&segments);
        }
    }
}

//! Strategy visualization hand-off
//!
//! For 2- and 3-row games each column pure strategy traces a payoff line
//! segment (one axis per row-player pure strategy). The core computes the
//! segment endpoints and hands them to an external [`StrategyRenderer`];
//! no rendering happens here, so the solver stays usable headlessly.

use crate::matrix::PayoffMatrix;

/// A named line segment in 2 or 3 dimensions, one per column pure
/// strategy. `start` and `end` hold one coordinate per payoff row.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    pub name: String,
    pub start: Vec<f64>,
    pub end: Vec<f64>,
}

/// One-way rendering collaborator. The core never consumes a return
/// value from it.
pub trait StrategyRenderer {
    fn render(&mut self, segments: &[LineSegment]);
}

/// Segment endpoints for each column pure strategy, or `None` when the
/// game has other than 2 or 3 rows. The first axis starts at 0 and the
/// rest at 1; every axis ends at that row's payoff entry for the column.
pub fn strategy_segments(payoff: &PayoffMatrix) -> Option<Vec<LineSegment>> {
    let m = payoff.rows();
    if m != 2 && m != 3 {
        return None;
    }

    let segments = (0..payoff.cols())
        .map(|j| {
            let start = (0..m).map(|i| if i == 0 { 0.0 } else { 1.0 }).collect();
            let end = (0..m).map(|i| payoff.get(i, j)).collect();
            LineSegment {
                name: format!("Strategy {}", j),
                start,
                end,
            }
        })
        .collect();
    Some(segments)
}

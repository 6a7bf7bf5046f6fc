use crate::search::{Position, Problem};
use std::fmt::Debug;

/// Heuristic values are step counts; unit edge costs keep everything in
/// integers.
pub type HeuristicValue = u64;

pub trait Heuristic: Debug {
    /// Estimate the number of moves remaining from `position` to the goal of
    /// the given problem. Must never overestimate for A* to stay optimal.
    fn evaluate(&self, position: Position, problem: &Problem) -> HeuristicValue;
}

use crate::search::{Heuristic, HeuristicValue, Position, Problem};

/// Remaining absolute distance to the goal. With unit steps this is exact,
/// hence both admissible and consistent: a single step changes it by at most
/// one step's worth.
#[derive(Clone, Debug, Default)]
pub struct LineDistance {}

impl LineDistance {
    pub fn new() -> Self {
        LineDistance {}
    }
}

impl Heuristic for LineDistance {
    fn evaluate(&self, position: Position, problem: &Problem) -> HeuristicValue {
        position.distance_to(problem.goal())
    }
}

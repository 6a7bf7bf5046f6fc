use crate::search::{Heuristic, HeuristicValue, Position, Problem};

/// The uninformed estimate. Breadth first search carries this so that every
/// node reports h = 0.
#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl Heuristic for ZeroHeuristic {
    fn evaluate(&self, _position: Position, _problem: &Problem) -> HeuristicValue {
        0
    }
}

use crate::search::{Position, Problem};
use smallvec::SmallVec;

/// Generates the candidate successors of a position: one step up, then one
/// step down, discarding anything beyond the safety bound. Pure function of
/// its inputs; the caller owns duplicate and closed-state policy.
#[derive(Debug, Clone, Copy)]
pub struct StepGenerator {
    delta: i64,
    max_abs: u64,
}

impl StepGenerator {
    pub fn new(problem: &Problem) -> Self {
        Self {
            delta: problem.delta(),
            max_abs: problem.max_abs(),
        }
    }

    /// Candidate successors of `position`, in `+delta` then `-delta` order.
    /// The order is part of the contract: both engines expand the upward
    /// neighbour first.
    pub fn successors(&self, position: Position) -> SmallVec<[Position; 2]> {
        let mut candidates = SmallVec::new();
        for direction in [1, -1] {
            let Some(candidate) = position.checked_offset(direction * self.delta) else {
                continue;
            };
            if candidate.magnitude() > self.max_abs {
                continue;
            }
            candidates.push(candidate);
        }
        candidates
    }
}

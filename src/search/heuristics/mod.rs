mod heuristic;
mod line_distance;
mod zero_heuristic;

pub use heuristic::{Heuristic, HeuristicValue};
pub use line_distance::LineDistance;
pub use zero_heuristic::ZeroHeuristic;

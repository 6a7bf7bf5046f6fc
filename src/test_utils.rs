use crate::search::{
    heuristics::{LineDistance, ZeroHeuristic},
    Path, Problem,
};

pub fn problem(start: i64, goal: i64, delta: i64, max_abs: i64) -> Problem {
    Problem::new(start, goal, delta, max_abs).expect("test instance must be well formed")
}

pub fn zero_heuristic() -> ZeroHeuristic {
    ZeroHeuristic::new()
}

pub fn line_distance() -> LineDistance {
    LineDistance::new()
}

/// A returned path must start at the start, end at the goal, and move by
/// exactly one step size at a time.
pub fn assert_valid_path(problem: &Problem, path: &Path) {
    assert!(!path.is_empty(), "successful searches return positions");
    assert_eq!(path.first(), Some(&problem.start()), "path starts at start");
    assert_eq!(path.last(), Some(&problem.goal()), "path ends at goal");
    for pair in path.windows(2) {
        assert_eq!(
            pair[0].distance_to(pair[1]),
            problem.delta().unsigned_abs(),
            "consecutive positions must differ by exactly one step"
        );
    }
}

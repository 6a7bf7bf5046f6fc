//! Breadth first search

use crate::search::{
    search_engines::{
        FifoFrontier, SearchEngine, SearchNode, SearchResult, SearchSpace, SearchStatistics,
        VisitedRegistry,
    },
    FrontierEntry, Heuristic, Problem, StepGenerator, TraceSink, TraceSnapshot,
};

#[derive(Debug)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

fn snapshot(step: usize, frontier: &FifoFrontier, visited: &VisitedRegistry) -> TraceSnapshot {
    let entries = frontier
        .positions()
        .map(|position| FrontierEntry::Plain { position })
        .collect();
    TraceSnapshot::new(step, entries, visited.closed())
}

impl SearchEngine for BFS {
    fn search(
        &mut self,
        problem: &Problem,
        _heuristic: &dyn Heuristic,
        sink: &mut dyn TraceSink,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let generator = StepGenerator::new(problem);
        let mut space = SearchSpace::new();
        let mut visited = VisitedRegistry::new();
        let mut frontier = FifoFrontier::new();
        let mut step = 0;

        let root = space.insert(SearchNode::new(problem.start(), None, 0, 0));
        statistics.increment_generated_nodes();

        if problem.start() == problem.goal() {
            return (SearchResult::Success(space.extract_path(root)), statistics);
        }

        frontier.insert(root, problem.start());
        step += 1;
        sink.record(snapshot(step, &frontier, &visited));

        while let Some((id, position)) = frontier.remove_next() {
            visited.mark_closed(position);
            statistics.increment_expanded_nodes();
            let cost_so_far = space.get(id).cost_so_far();

            for successor in generator.successors(position) {
                if visited.is_closed(successor) {
                    statistics.increment_suppressed_nodes();
                    continue;
                }

                // Cut at generation time: the goal node never joins the
                // frontier. Its snapshot is the singleton goal entry.
                if successor == problem.goal() {
                    let goal_id =
                        space.insert(SearchNode::new(successor, Some(id), cost_so_far + 1, 0));
                    statistics.increment_generated_nodes();
                    step += 1;
                    sink.record(TraceSnapshot::new(
                        step,
                        vec![FrontierEntry::Plain {
                            position: successor,
                        }],
                        visited.closed(),
                    ));
                    return (
                        SearchResult::Success(space.extract_path(goal_id)),
                        statistics,
                    );
                }

                if frontier.contains(successor) {
                    statistics.increment_suppressed_nodes();
                    continue;
                }

                let child = space.insert(SearchNode::new(successor, Some(id), cost_so_far + 1, 0));
                statistics.increment_generated_nodes();
                frontier.insert(child, successor);
            }

            step += 1;
            sink.record(snapshot(step, &frontier, &visited));
        }

        (SearchResult::Exhausted, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{NullTrace, Position, RecordingTrace};
    use crate::test_utils::*;

    fn search(problem: &Problem) -> (SearchResult, SearchStatistics) {
        BFS::new().search(problem, &zero_heuristic(), &mut NullTrace)
    }

    fn search_traced(problem: &Problem) -> (SearchResult, Vec<TraceSnapshot>) {
        let mut sink = RecordingTrace::new();
        let (result, _) = BFS::new().search(problem, &zero_heuristic(), &mut sink);
        (result, sink.into_snapshots())
    }

    #[test]
    fn finds_shortest_path_to_positive_goal() {
        let problem = problem(0, 3, 1, 20);
        let (result, _) = search(&problem);
        let path = result.path().expect("goal is reachable");
        assert_valid_path(&problem, path);
        assert_eq!(path.moves(), 3);
        assert_eq!(
            path.positions(),
            &[
                Position::new(0),
                Position::new(1),
                Position::new(2),
                Position::new(3)
            ]
        );
    }

    #[test]
    fn finds_path_to_negative_goal() {
        let problem = problem(0, -2, 1, 20);
        let (result, _) = search(&problem);
        let path = result.path().expect("goal is reachable");
        assert_valid_path(&problem, path);
        assert_eq!(path.moves(), 2);
    }

    #[test]
    fn walks_in_larger_steps() {
        let problem = problem(-2, 6, 2, 20);
        let (result, _) = search(&problem);
        let path = result.path().expect("goal is reachable");
        assert_valid_path(&problem, path);
        assert_eq!(path.moves(), 4);
    }

    #[test]
    fn start_equals_goal_needs_no_moves() {
        let problem = problem(5, 5, 1, 20);
        let (result, _) = search(&problem);
        let path = result.path().expect("already at the goal");
        assert_eq!(path.positions(), &[Position::new(5)]);
        assert_eq!(path.moves(), 0);
    }

    #[test]
    fn unreachable_step_lattice_exhausts() {
        // 4 is not a multiple of 3, so no sequence of +-3 steps reaches it.
        let (result, _) = search(&problem(0, 4, 3, 20));
        assert!(result.is_exhausted());
    }

    #[test]
    fn goal_beyond_bound_exhausts() {
        let (result, _) = search(&problem(0, 25, 1, 20));
        assert!(result.is_exhausted());
    }

    #[test]
    fn expansion_count_stays_within_state_space() {
        // Exhaustion visits each in-bound lattice position at most once.
        let (result, statistics) = search(&problem(0, 4, 3, 20));
        assert!(result.is_exhausted());
        assert!(statistics.expanded_nodes() <= 2 * 20 / 3 + 1);
    }

    #[test]
    fn goal_is_cut_at_generation_time() {
        let goal = Position::new(1);
        let (result, snapshots) = search_traced(&problem(0, 1, 1, 20));
        assert!(result.is_success());

        // The goal appears exactly once: as the singleton frontier of the
        // final snapshot, never expanded and never closed.
        let last = snapshots.last().expect("at least one snapshot");
        assert_eq!(last.frontier, vec![FrontierEntry::Plain { position: goal }]);
        assert!(!last.closed.contains(&goal));
        for snapshot in &snapshots[..snapshots.len() - 1] {
            assert!(snapshot.frontier.iter().all(|entry| entry.position() != goal));
        }
    }

    #[test]
    fn first_snapshot_holds_the_root_alone() {
        let (_, snapshots) = search_traced(&problem(0, 3, 1, 20));
        assert_eq!(snapshots[0].step, 1);
        assert_eq!(
            snapshots[0].frontier,
            vec![FrontierEntry::Plain {
                position: Position::new(0)
            }]
        );
        assert!(snapshots[0].closed.is_empty());
    }

    #[test]
    fn repeated_runs_are_identical() {
        let problem = problem(0, 3, 1, 20);
        let (first_result, first_snapshots) = search_traced(&problem);
        let (second_result, second_snapshots) = search_traced(&problem);
        assert_eq!(first_result, second_result);
        assert_eq!(first_snapshots, second_snapshots);
    }
}

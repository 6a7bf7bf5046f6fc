//! This module implements the A* search algorithm.

use crate::search::{
    search_engines::{
        PriorityFrontier, SearchEngine, SearchNode, SearchResult, SearchSpace, SearchStatistics,
        VisitedRegistry,
    },
    FrontierEntry, Heuristic, Problem, StepGenerator, TraceSink, TraceSnapshot,
};

/// A* with goal testing at extraction time. The frontier orders nodes by
/// cost plus estimate, so the first goal node extracted carries the cheapest
/// route to it.
#[derive(Debug)]
pub struct AStar {}

impl AStar {
    pub fn new() -> Self {
        Self {}
    }
}

fn scored(node: &SearchNode) -> FrontierEntry {
    FrontierEntry::Scored {
        position: node.position(),
        cost_so_far: node.cost_so_far(),
        heuristic: node.heuristic(),
    }
}

fn snapshot(
    step: usize,
    frontier: &PriorityFrontier,
    space: &SearchSpace,
    visited: &VisitedRegistry,
) -> TraceSnapshot {
    let entries = frontier
        .ordered_ids()
        .into_iter()
        .map(|id| scored(space.get(id)))
        .collect();
    TraceSnapshot::new(step, entries, visited.closed())
}

impl SearchEngine for AStar {
    fn search(
        &mut self,
        problem: &Problem,
        heuristic: &dyn Heuristic,
        sink: &mut dyn TraceSink,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let generator = StepGenerator::new(problem);
        let mut space = SearchSpace::new();
        let mut visited = VisitedRegistry::new();
        let mut frontier = PriorityFrontier::new();
        let mut step = 0;

        let root_estimate = heuristic.evaluate(problem.start(), problem);
        let root_node = SearchNode::new(problem.start(), None, 0, root_estimate);
        let root = space.insert(root_node);
        statistics.increment_generated_nodes();
        visited.record_best(problem.start(), 0);
        frontier.insert(root, root_node.priority(), root_node.heuristic());

        step += 1;
        sink.record(snapshot(step, &frontier, &space, &visited));

        while let Some(id) = frontier.remove_next() {
            let node = *space.get(id);

            // Stale entry left behind by a later, cheaper route.
            if visited.is_closed(node.position()) {
                statistics.increment_suppressed_nodes();
                continue;
            }

            // Goal test at extraction time, when no cheaper route can remain
            // queued.
            if node.position() == problem.goal() {
                step += 1;
                sink.record(TraceSnapshot::new(
                    step,
                    vec![scored(&node)],
                    visited.closed(),
                ));
                return (SearchResult::Success(space.extract_path(id)), statistics);
            }

            visited.mark_closed(node.position());
            statistics.increment_expanded_nodes();

            for successor in generator.successors(node.position()) {
                if visited.is_closed(successor) {
                    statistics.increment_suppressed_nodes();
                    continue;
                }

                let cost = node.cost_so_far() + 1;
                let estimate = heuristic.evaluate(successor, problem);
                match visited.best_known(successor) {
                    Some(best) if cost >= best => {
                        statistics.increment_suppressed_nodes();
                        continue;
                    }
                    Some(_) => statistics.increment_relaxed_nodes(),
                    None => {}
                }

                visited.record_best(successor, cost);
                let child_node = SearchNode::new(successor, Some(id), cost, estimate);
                let child = space.insert(child_node);
                statistics.increment_generated_nodes();
                frontier.insert(child, child_node.priority(), child_node.heuristic());
            }

            step += 1;
            sink.record(snapshot(step, &frontier, &space, &visited));
        }

        (SearchResult::Exhausted, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{
        search_engines::BFS, NullTrace, Position, RecordingTrace,
    };
    use crate::test_utils::*;

    fn search(problem: &Problem) -> (SearchResult, SearchStatistics) {
        AStar::new().search(problem, &line_distance(), &mut NullTrace)
    }

    fn search_traced(problem: &Problem) -> (SearchResult, Vec<TraceSnapshot>) {
        let mut sink = RecordingTrace::new();
        let (result, _) = AStar::new().search(problem, &line_distance(), &mut sink);
        (result, sink.into_snapshots())
    }

    #[test]
    fn finds_shortest_path_to_positive_goal() {
        let problem = problem(0, 3, 1, 20);
        let (result, _) = search(&problem);
        let path = result.path().expect("goal is reachable");
        assert_valid_path(&problem, path);
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
    fn start_equals_goal_needs_no_moves() {
        let problem = problem(5, 5, 1, 20);
        let (result, _) = search(&problem);
        let path = result.path().expect("already at the goal");
        assert_eq!(path.positions(), &[Position::new(5)]);
        assert_eq!(path.moves(), 0);
    }

    #[test]
    fn unreachable_step_lattice_exhausts() {
        let (result, _) = search(&problem(0, 4, 3, 20));
        assert!(result.is_exhausted());
    }

    #[test]
    fn goal_beyond_bound_exhausts() {
        let (result, _) = search(&problem(0, 25, 1, 20));
        assert!(result.is_exhausted());
    }

    #[test]
    fn matches_bfs_path_length_when_both_succeed() {
        for (start, goal, delta) in [(0, 3, 1), (-2, 6, 2), (5, -7, 3), (0, 0, 1), (-20, 20, 5)] {
            let problem = problem(start, goal, delta, 20);
            let (bfs_result, _) = BFS::new().search(&problem, &zero_heuristic(), &mut NullTrace);
            let (astar_result, _) = search(&problem);
            let bfs_path = bfs_result.path().expect("reachable by construction");
            let astar_path = astar_result.path().expect("reachable by construction");
            assert_valid_path(&problem, astar_path);
            assert_eq!(bfs_path.moves(), astar_path.moves());
        }
    }

    #[test]
    fn goal_is_tested_at_extraction_time() {
        let goal = Position::new(1);
        let (result, snapshots) = search_traced(&problem(0, 1, 1, 20));
        assert!(result.is_success());

        // The goal is queued like any other node first, then extracted.
        let queued = &snapshots[..snapshots.len() - 1];
        assert!(queued
            .iter()
            .any(|snapshot| snapshot.frontier.iter().any(|e| e.position() == goal)));

        let last = snapshots.last().expect("at least one snapshot");
        assert_eq!(
            last.frontier,
            vec![FrontierEntry::Scored {
                position: goal,
                cost_so_far: 1,
                heuristic: 0
            }]
        );
        assert!(!last.closed.contains(&goal));
    }

    #[test]
    fn terminates_one_logical_step_after_bfs() {
        // Same instance: breadth first search cuts when the goal is
        // generated, A* only when it is extracted.
        let problem = problem(0, 1, 1, 20);
        let mut bfs_sink = RecordingTrace::new();
        BFS::new().search(&problem, &zero_heuristic(), &mut bfs_sink);
        let (_, astar_snapshots) = search_traced(&problem);
        assert_eq!(bfs_sink.snapshots().len() + 1, astar_snapshots.len());
    }

    #[test]
    fn frontier_snapshots_are_ordered_by_estimate() {
        let (_, snapshots) = search_traced(&problem(0, 3, 1, 20));
        for snapshot in &snapshots {
            let estimates: Vec<u64> = snapshot
                .frontier
                .iter()
                .map(|entry| entry.total_estimate().expect("scored entries"))
                .collect();
            assert!(estimates.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let problem = problem(-4, 8, 2, 20);
        let (first_result, first_snapshots) = search_traced(&problem);
        let (second_result, second_snapshots) = search_traced(&problem);
        assert_eq!(first_result, second_result);
        assert_eq!(first_snapshots, second_snapshots);
    }
}

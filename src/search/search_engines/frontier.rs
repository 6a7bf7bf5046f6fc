//! The two open-list disciplines. Breadth first search expands in arrival
//! order; informed search expands by ascending cost estimate. Both hold
//! [`NodeId`]s, leaving node ownership with the search space.

use crate::search::{search_engines::NodeId, Position};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::{HashSet, VecDeque};

/// First-in-first-out open list. Holds at most one entry per position: the
/// position index makes the insertion-time duplicate check exact without
/// scanning the queue.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<(NodeId, Position)>,
    open_positions: HashSet<Position>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            open_positions: HashSet::new(),
        }
    }

    pub fn insert(&mut self, id: NodeId, position: Position) {
        debug_assert!(
            !self.open_positions.contains(&position),
            "caller must suppress duplicate positions before inserting"
        );
        self.open_positions.insert(position);
        self.queue.push_back((id, position));
    }

    pub fn remove_next(&mut self) -> Option<(NodeId, Position)> {
        let entry = self.queue.pop_front()?;
        self.open_positions.remove(&entry.1);
        Some(entry)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.open_positions.contains(&position)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Queued positions in expansion order, for snapshots.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.queue.iter().map(|(_, position)| *position)
    }
}

/// Priority key: total estimate first, heuristic as the tie break, then
/// arrival order so extraction is total and runs are repeatable.
type PriorityKey = Reverse<(u64, u64, u64)>;

/// Minimum-first open list for informed search. May transiently hold several
/// entries for one position; stale ones are discarded at extraction by the
/// caller's closed check.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    queue: PriorityQueue<NodeId, PriorityKey>,
    arrivals: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            arrivals: 0,
        }
    }

    pub fn insert(&mut self, id: NodeId, priority: u64, heuristic: u64) {
        let arrival = self.arrivals;
        self.arrivals += 1;
        self.queue.push(id, Reverse((priority, heuristic, arrival)));
    }

    pub fn remove_next(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|(id, _)| id)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Current entries in extraction order, for snapshots.
    pub fn ordered_ids(&self) -> Vec<NodeId> {
        let mut entries: Vec<(NodeId, PriorityKey)> = self
            .queue
            .iter()
            .map(|(id, key)| (*id, *key))
            .collect();
        entries.sort_by_key(|(_, Reverse(key))| *key);
        entries.into_iter().map(|(id, _)| id).collect()
    }
}

use crate::search::{search_engines::SearchNode, Path};
use segvec::{Linear, SegVec};

/// Index of a node within one [`SearchSpace`]. Ids are only meaningful for
/// the space that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Arena owning every node one search creates. Parent links are [`NodeId`]s
/// into this arena, so path reconstruction follows indices instead of
/// references and dropping the space reclaims the whole tree at once.
#[derive(Debug)]
pub struct SearchSpace {
    nodes: SegVec<SearchNode, Linear>,
}

impl SearchSpace {
    pub fn new() -> Self {
        Self {
            nodes: SegVec::new(),
        }
    }

    pub fn insert(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> &SearchNode {
        self.nodes.get(id.0).expect("invalid node id")
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk parent links from `terminal` back to the root and return the
    /// positions in start-to-goal order.
    pub fn extract_path(&self, terminal: NodeId) -> Path {
        let mut positions = vec![];
        let mut current = Some(terminal);
        while let Some(id) = current {
            let node = self.get(id);
            positions.push(node.position());
            current = node.parent();
        }
        positions.reverse();
        Path::new(positions)
    }
}

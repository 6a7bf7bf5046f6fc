mod astar;
mod bfs;
mod frontier;
mod search_engine;
mod search_node;
mod search_space;
mod search_statistics;
mod visited;

pub use astar::AStar;
pub use bfs::BFS;
pub use frontier::{FifoFrontier, PriorityFrontier};
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
pub use search_node::SearchNode;
pub use search_space::{NodeId, SearchSpace};
pub use search_statistics::SearchStatistics;
pub use visited::VisitedRegistry;

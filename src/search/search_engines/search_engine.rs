use crate::search::{
    heuristics::{Heuristic, LineDistance, ZeroHeuristic},
    search_engines::{AStar, SearchStatistics, BFS},
    Path, Problem, TraceSink,
};
use clap;
use std::fmt;
use strum_macros::{EnumIs, EnumIter};

#[derive(Debug, Clone, PartialEq, Eq, EnumIs)]
pub enum SearchResult {
    /// The search reached the goal; the path runs from start to goal inclusive.
    Success(Path),
    /// The frontier ran dry without reaching the goal. A normal outcome, not
    /// an error: the goal is unreachable under the step size and safety bound.
    Exhausted,
}

impl SearchResult {
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchResult::Success(path) => Some(path),
            SearchResult::Exhausted => None,
        }
    }
}

pub trait SearchEngine {
    fn search(
        &mut self,
        problem: &Problem,
        heuristic: &dyn Heuristic,
        sink: &mut dyn TraceSink,
    ) -> (SearchResult, SearchStatistics);
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Uninformed breadth first search, cuts as soon as the goal is generated.")]
    BFS,
    #[clap(
        name = "a-star",
        help = "A* ordered by cost plus line distance, tests the goal at extraction."
    )]
    AStar,
}

impl SearchEngineName {
    pub fn create(&self) -> Box<dyn SearchEngine> {
        match self {
            SearchEngineName::BFS => Box::new(BFS::new()),
            SearchEngineName::AStar => Box::new(AStar::new()),
        }
    }

    /// The heuristic each engine is paired with: breadth first search is
    /// uninformed, A* uses the line distance.
    pub fn heuristic(&self) -> Box<dyn Heuristic> {
        match self {
            SearchEngineName::BFS => Box::new(ZeroHeuristic::new()),
            SearchEngineName::AStar => Box::new(LineDistance::new()),
        }
    }
}

impl fmt::Display for SearchEngineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchEngineName::BFS => write!(f, "bfs"),
            SearchEngineName::AStar => write!(f, "a*"),
        }
    }
}

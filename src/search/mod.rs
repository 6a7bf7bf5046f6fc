pub mod heuristics;
mod path;
mod position;
mod problem;
pub mod search_engines;
mod successor_generator;
mod trace;
mod verbosity;

pub use heuristics::{Heuristic, HeuristicValue};
pub use path::Path;
pub use position::Position;
pub use problem::{Problem, ProblemError};
pub use successor_generator::StepGenerator;
pub use trace::{FrontierEntry, NullTrace, RecordingTrace, TextTrace, TraceSink, TraceSnapshot};
pub use verbosity::Verbosity;

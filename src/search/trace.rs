//! Per-step reporting. The engines know nothing about presentation; they
//! hand each step's open and closed contents to an injected [`TraceSink`]
//! and move on. Capturing sinks make the step-by-step behaviour testable
//! without parsing text.

use crate::search::Position;
use itertools::Itertools;
use std::fmt;
use std::io::{self, Write};

/// One frontier entry as shown to the sink. Uninformed engines expose the
/// position alone; informed engines also expose the cost accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierEntry {
    Plain {
        position: Position,
    },
    Scored {
        position: Position,
        cost_so_far: u64,
        heuristic: u64,
    },
}

impl FrontierEntry {
    pub fn position(&self) -> Position {
        match self {
            FrontierEntry::Plain { position } => *position,
            FrontierEntry::Scored { position, .. } => *position,
        }
    }

    /// g + h for scored entries, nothing for plain ones.
    pub fn total_estimate(&self) -> Option<u64> {
        match self {
            FrontierEntry::Plain { .. } => None,
            FrontierEntry::Scored {
                cost_so_far,
                heuristic,
                ..
            } => Some(cost_so_far + heuristic),
        }
    }
}

impl fmt::Display for FrontierEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontierEntry::Plain { position } => write!(f, "{position}"),
            FrontierEntry::Scored {
                position,
                cost_so_far,
                heuristic,
            } => write!(
                f,
                "{position}[g={cost_so_far},h={heuristic},f={}]",
                cost_so_far + heuristic
            ),
        }
    }
}

/// The authoritative content of one search step: which states are open, in
/// extraction order, and which are closed, sorted for stable display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceSnapshot {
    pub step: usize,
    pub frontier: Vec<FrontierEntry>,
    pub closed: Vec<Position>,
}

impl TraceSnapshot {
    pub fn new(
        step: usize,
        frontier: Vec<FrontierEntry>,
        closed: impl IntoIterator<Item = Position>,
    ) -> Self {
        Self {
            step,
            frontier,
            closed: closed.into_iter().sorted().collect(),
        }
    }
}

pub trait TraceSink {
    fn record(&mut self, snapshot: TraceSnapshot);
}

/// Renders snapshots as indented text, one block per step.
#[derive(Debug)]
pub struct TextTrace<W> {
    writer: W,
}

impl TextTrace<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextTrace<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for TextTrace<W> {
    fn record(&mut self, snapshot: TraceSnapshot) {
        let open = snapshot
            .frontier
            .iter()
            .map(FrontierEntry::to_string)
            .join(", ");
        let closed = snapshot
            .closed
            .iter()
            .map(Position::to_string)
            .join(", ");
        let _ = writeln!(self.writer, "step {}", snapshot.step);
        let _ = writeln!(self.writer, "  open:   [{open}]");
        let _ = writeln!(self.writer, "  closed: [{closed}]");
        let _ = writeln!(self.writer);
    }
}

/// Keeps every snapshot for inspection after the search returns.
#[derive(Debug, Default)]
pub struct RecordingTrace {
    snapshots: Vec<TraceSnapshot>,
}

impl RecordingTrace {
    pub fn new() -> Self {
        Self { snapshots: vec![] }
    }

    pub fn snapshots(&self) -> &[TraceSnapshot] {
        &self.snapshots
    }

    pub fn into_snapshots(self) -> Vec<TraceSnapshot> {
        self.snapshots
    }
}

impl TraceSink for RecordingTrace {
    fn record(&mut self, snapshot: TraceSnapshot) {
        self.snapshots.push(snapshot);
    }
}

/// Swallows snapshots, for callers that only want the result.
#[derive(Debug, Default)]
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn record(&mut self, _snapshot: TraceSnapshot) {}
}

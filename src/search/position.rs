use std::fmt;

/// A coordinate on the integer line. Positions are plain values; all search
/// metadata lives on the nodes that reference them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(i64);

impl Position {
    pub fn new(coordinate: i64) -> Self {
        Self(coordinate)
    }

    pub fn value(self) -> i64 {
        self.0
    }

    /// Shift the position by `delta`. Returns `None` when the result does not
    /// fit in an `i64`; callers treat that the same as leaving the safety
    /// bound.
    pub fn checked_offset(self, delta: i64) -> Option<Self> {
        self.0.checked_add(delta).map(Self)
    }

    /// Absolute distance to `other`, the metric the line distance heuristic
    /// is built on.
    pub fn distance_to(self, other: Position) -> u64 {
        self.0.abs_diff(other.0)
    }

    /// Absolute value, compared against the safety bound.
    pub fn magnitude(self) -> u64 {
        self.0.unsigned_abs()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

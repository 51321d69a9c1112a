//! Heuristic pattern detectors.
//!
//! Each detector is a pure function of the candidate string, independent of
//! the others; the composer owns the ordering of their output. Safe for
//! concurrent invocation: no shared mutable state anywhere in this module.

mod length;
mod pattern;
mod sequence;
mod variety;

pub use length::short_length;
pub use pattern::{common_pattern, repeated_run};
pub use sequence::{keyboard_pattern, sequential_pattern};
pub use variety::missing_character_classes;

/// Machine-readable tag for a detector hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingKind {
    ShortLength,
    MissingLowercase,
    MissingUppercase,
    MissingDigit,
    MissingSymbol,
    CommonSubstring,
    RepeatedRun,
    SequentialPattern,
    KeyboardPattern,
}

/// A single detector hit: a tag plus the fixed user-facing message.
///
/// Produced fresh per evaluation, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternFinding {
    pub kind: FindingKind,
    pub message: &'static str,
}

impl PatternFinding {
    pub(crate) const fn new(kind: FindingKind, message: &'static str) -> Self {
        Self { kind, message }
    }
}

//! Length detector.

use super::{FindingKind, PatternFinding};

const MIN_LENGTH: usize = 12;

/// Flags passwords shorter than twelve characters.
pub fn short_length(password: &str) -> Option<PatternFinding> {
    if password.chars().count() < MIN_LENGTH {
        return Some(PatternFinding::new(
            FindingKind::ShortLength,
            "Use at least 12 characters.",
        ));
    }
    None
}

//! Sequential-alphabet and keyboard-walk detectors.
//!
//! Both slide windows of every length from [`MIN_RUN`] up to the reference
//! string's full length over the reference, matching each chunk and its
//! reversal case-insensitively against the password. The minimum chunk
//! length of 4 avoids false positives on short incidental substrings
//! ("cat" inside "scatter") while still catching "abcd", "1234", "qwer".

use super::{FindingKind, PatternFinding};

const SEQUENCES: [&str; 2] = ["abcdefghijklmnopqrstuvwxyz", "0123456789"];
const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

const MIN_RUN: usize = 4;

/// True if any chunk of `reference` of length >= [`MIN_RUN`], forward or
/// reversed, appears in `lowered`. First hit stops the scan.
fn contains_reference_run(lowered: &str, reference: &str) -> bool {
    let len = reference.len();
    if len < MIN_RUN {
        return false;
    }
    // Reference strings are ASCII, so byte slicing is safe.
    for start in 0..=(len - MIN_RUN) {
        for end in (start + MIN_RUN)..=len {
            let chunk = &reference[start..end];
            if lowered.contains(chunk) {
                return true;
            }
            let reversed: String = chunk.chars().rev().collect();
            if lowered.contains(&reversed) {
                return true;
            }
        }
    }
    false
}

/// Flags runs of four or more consecutive characters from a reference
/// alphabet (a-z or 0-9), typed forward or backward.
pub fn sequential_pattern(password: &str) -> Option<PatternFinding> {
    let lowered = password.to_lowercase();
    if SEQUENCES.iter().any(|seq| contains_reference_run(&lowered, seq)) {
        return Some(PatternFinding::new(
            FindingKind::SequentialPattern,
            "Avoid sequential patterns like 'abcd' or '6543'.",
        ));
    }
    None
}

/// Flags walks of four or more adjacent keys along a physical keyboard row,
/// typed forward or backward.
pub fn keyboard_pattern(password: &str) -> Option<PatternFinding> {
    let lowered = password.to_lowercase();
    if KEYBOARD_ROWS.iter().any(|row| contains_reference_run(&lowered, row)) {
        return Some(PatternFinding::new(
            FindingKind::KeyboardPattern,
            "Avoid keyboard patterns like 'qwerty' or 'asdf'.",
        ));
    }
    None
}

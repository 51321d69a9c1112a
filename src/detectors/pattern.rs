//! Common-substring and repeated-run detectors.

use std::sync::LazyLock;

use regex::RegexSet;

use super::{FindingKind, PatternFinding};

// Compiled once for the process lifetime; matched against the lower-cased
// password, so the literals stay lowercase.
static COMMON_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new(["^12345", "password", "qwerty", "admin", "letmein"])
        .expect("common-pattern literals are valid regexes")
});

/// Flags passwords matching any of the known-bad literals.
///
/// Emits one combined finding no matter how many literals match.
pub fn common_pattern(password: &str) -> Option<PatternFinding> {
    if COMMON_PATTERNS.is_match(&password.to_lowercase()) {
        return Some(PatternFinding::new(
            FindingKind::CommonSubstring,
            "Avoid common patterns like 'password', 'qwerty', or '12345'.",
        ));
    }
    None
}

/// Flags any character repeated three or more times consecutively.
pub fn repeated_run(password: &str) -> Option<PatternFinding> {
    let mut run = 1;
    let mut prev: Option<char> = None;
    for c in password.chars() {
        if prev == Some(c) {
            run += 1;
            if run >= 3 {
                return Some(PatternFinding::new(
                    FindingKind::RepeatedRun,
                    "Avoid repeated characters like 'aaa' or '111'.",
                ));
            }
        } else {
            run = 1;
            prev = Some(c);
        }
    }
    None
}

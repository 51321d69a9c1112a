//! Character-class detectors: lowercase, uppercase, digits, symbols.

use super::{FindingKind, PatternFinding};

/// Returns one finding per missing character class, in the fixed order
/// lowercase, uppercase, digit, symbol.
///
/// A symbol is any character outside `[A-Za-z0-9]`.
pub fn missing_character_classes(password: &str) -> Vec<PatternFinding> {
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());

    let mut findings = Vec::new();
    if !has_lower {
        findings.push(PatternFinding::new(
            FindingKind::MissingLowercase,
            "Add lowercase letters.",
        ));
    }
    if !has_upper {
        findings.push(PatternFinding::new(
            FindingKind::MissingUppercase,
            "Add uppercase letters.",
        ));
    }
    if !has_digit {
        findings.push(PatternFinding::new(FindingKind::MissingDigit, "Add numbers."));
    }
    if !has_symbol {
        findings.push(PatternFinding::new(
            FindingKind::MissingSymbol,
            "Add symbols (like !@#).",
        ));
    }
    findings
}

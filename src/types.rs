//! Core result types: the strength estimate consumed by the composer and
//! the verdict returned to callers.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Qualitative strength label, derived deterministically from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    Weak,
    Okay,
    Strong,
}

impl Label {
    /// Maps a 0-4 strength score onto a label.
    ///
    /// Score <= 1 is `Weak`, 2-3 is `Okay`, 4 is `Strong`. The mapping is
    /// fixed and not configurable.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => Label::Weak,
            2 | 3 => Label::Okay,
            _ => Label::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Weak => "WEAK",
            Label::Okay => "OKAY",
            Label::Strong => "STRONG",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the external strength-estimation oracle, reduced to the shape
/// the composer consumes. Opaque input data: the composer never inspects
/// individual suggestions, it only carries them through in order.
#[derive(Debug, Clone, Default)]
pub struct StrengthEstimate {
    /// Strength score in `[0, 4]`.
    pub score: u8,
    /// Remediation suggestions, order preserved from the oracle.
    pub suggestions: Vec<String>,
    /// At most one oracle warning.
    pub warning: Option<String>,
    /// Crack-scenario name -> human-readable time estimate.
    pub crack_times: BTreeMap<String, String>,
}

/// Outcome of a breach lookup.
///
/// Computed per call, never cached: a transport failure is an expected
/// condition and surfaces as `Unknown`, never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachStatus {
    /// The password's digest suffix was found in the range response.
    Breached,
    /// The lookup succeeded and the suffix was absent.
    Clean,
    /// The lookup could not be completed.
    Unknown,
}

/// The final evaluation record returned to callers.
///
/// Created fresh per evaluation; serializes with the field names the
/// request/response boundary exposes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Strength score in `[0, 4]`, straight from the oracle.
    pub score: u8,
    /// Derived from `score`, never independent state.
    pub label: Label,
    /// Ordered remediation tips: oracle suggestions first, then rule tips.
    pub feedback: Vec<String>,
    /// Ordered warnings: oracle warning first, then rule warnings.
    pub warnings: Vec<String>,
    /// Whether the password appears verbatim (case-insensitive) in the
    /// loaded common-password corpus.
    pub common_password: bool,
    /// Provenance tag for the corpus hit, `"rockyou"` when flagged.
    pub common_password_source: Option<&'static str>,
    /// Tri-state breach flag: `Some(true)` confirmed breached, `Some(false)`
    /// confirmed clean, `None` unknown or not checked.
    pub breached: Option<bool>,
    /// Crack-scenario name -> human-readable time estimate.
    pub crack_time_estimates: BTreeMap<String, String>,
}

impl Verdict {
    /// Merges a breach-lookup outcome into the record. `Unknown` leaves the
    /// field absent, indistinguishable from "not checked".
    pub fn apply_breach(&mut self, status: BreachStatus) {
        self.breached = match status {
            BreachStatus::Breached => Some(true),
            BreachStatus::Clean => Some(false),
            BreachStatus::Unknown => None,
        };
    }
}

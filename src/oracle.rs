//! Strength-estimation oracle.
//!
//! The entropy model itself is an external capability (the `zxcvbn` crate);
//! this module only translates its native result shape into
//! [`StrengthEstimate`]. Behind a trait so the composer can be exercised
//! with a deterministic stub.

use std::collections::BTreeMap;

use zxcvbn::{Score, zxcvbn};

use crate::types::StrengthEstimate;

/// An external password-strength estimator.
pub trait StrengthOracle {
    /// Scores `password` and reports suggestions, an optional warning, and
    /// crack-time estimates. No retries, no fallback.
    fn estimate(&self, password: &str) -> StrengthEstimate;
}

/// Production oracle backed by the zxcvbn entropy model.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZxcvbnOracle;

impl StrengthOracle for ZxcvbnOracle {
    fn estimate(&self, password: &str) -> StrengthEstimate {
        let analysis = zxcvbn(password, &[]);

        let score = match analysis.score() {
            Score::Zero => 0,
            Score::One => 1,
            Score::Two => 2,
            Score::Three => 3,
            _ => 4,
        };

        let mut suggestions = Vec::new();
        let mut warning = None;
        if let Some(feedback) = analysis.feedback() {
            warning = feedback.warning().map(|w| w.to_string());
            for suggestion in feedback.suggestions() {
                suggestions.push(suggestion.to_string());
            }
        }

        let crack = analysis.crack_times();
        let mut crack_times = BTreeMap::new();
        crack_times.insert(
            "online_throttling_100_per_hour".to_string(),
            crack.online_throttling_100_per_hour().to_string(),
        );
        crack_times.insert(
            "online_no_throttling_10_per_second".to_string(),
            crack.online_no_throttling_10_per_second().to_string(),
        );
        crack_times.insert(
            "offline_slow_hashing_1e4_per_second".to_string(),
            crack.offline_slow_hashing_1e4_per_second().to_string(),
        );
        crack_times.insert(
            "offline_fast_hashing_1e10_per_second".to_string(),
            crack.offline_fast_hashing_1e10_per_second().to_string(),
        );

        StrengthEstimate {
            score,
            suggestions,
            warning,
            crack_times,
        }
    }
}

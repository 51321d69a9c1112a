//! Verdict composition - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::detectors::{
    common_pattern, keyboard_pattern, missing_character_classes, repeated_run, sequential_pattern,
    short_length,
};
use crate::oracle::{StrengthOracle, ZxcvbnOracle};
use crate::types::{Label, Verdict};
use crate::wordlist::CommonPasswordSet;

/// Maximum accepted password length in characters. Longer input is rejected
/// by contract precondition; the boundary layer enforces the same limit.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Provenance tag attached to common-password hits.
const COMMON_PASSWORD_SOURCE: &str = "rockyou";

const COMMON_PASSWORD_WARNING: &str =
    "This password appears in real-world breach lists (RockYou).";

/// Precondition violations. Weak or common passwords are data in the
/// [`Verdict`], never errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluateError {
    #[error("Password is required.")]
    Empty,
    #[error("Password is too long (max {MAX_PASSWORD_LENGTH} characters).")]
    TooLong,
}

/// Evaluates a password against the production strength oracle.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `common` - The common-password corpus, shared read-only
///
/// # Returns
/// A [`Verdict`] with score, label, ordered feedback and warnings,
/// common-password membership, and crack-time estimates. The `breached`
/// field starts unknown; callers that opt in to breach checking merge the
/// lookup result via [`Verdict::apply_breach`].
pub fn evaluate_password(
    password: &SecretString,
    common: &CommonPasswordSet,
) -> Result<Verdict, EvaluateError> {
    evaluate_with_oracle(password, common, &ZxcvbnOracle)
}

/// Evaluates a password against an injected strength oracle.
///
/// The compose order is fixed: oracle suggestions and warning first, then
/// the length tip, the four character-class tips, then the common-pattern,
/// repeated-run, sequential and keyboard warnings, then the corpus check.
pub fn evaluate_with_oracle(
    password: &SecretString,
    common: &CommonPasswordSet,
    oracle: &dyn StrengthOracle,
) -> Result<Verdict, EvaluateError> {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return Err(EvaluateError::Empty);
    }
    if pwd.chars().count() > MAX_PASSWORD_LENGTH {
        return Err(EvaluateError::TooLong);
    }

    let estimate = oracle.estimate(pwd);

    let mut feedback = estimate.suggestions;
    let mut warnings: Vec<String> = estimate.warning.into_iter().collect();

    if let Some(finding) = short_length(pwd) {
        feedback.push(finding.message.to_string());
    }
    for finding in missing_character_classes(pwd) {
        feedback.push(finding.message.to_string());
    }

    let rule_warnings = [
        common_pattern(pwd),
        repeated_run(pwd),
        sequential_pattern(pwd),
        keyboard_pattern(pwd),
    ];
    for finding in rule_warnings.into_iter().flatten() {
        warnings.push(finding.message.to_string());
    }

    let common_password = common.contains(pwd);
    if common_password {
        warnings.push(COMMON_PASSWORD_WARNING.to_string());
    }

    let label = Label::from_score(estimate.score);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = estimate.score,
        label = %label,
        common_password,
        "password evaluated"
    );

    Ok(Verdict {
        score: estimate.score,
        label,
        feedback,
        warnings,
        common_password,
        common_password_source: common_password.then_some(COMMON_PASSWORD_SOURCE),
        breached: None,
        crack_time_estimates: estimate.crack_times,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BreachStatus, StrengthEstimate};
    use std::collections::BTreeMap;

    /// Deterministic oracle returning a fixed estimate regardless of input.
    struct StubOracle(StrengthEstimate);

    impl StubOracle {
        fn with_score(score: u8) -> Self {
            Self(StrengthEstimate {
                score,
                ..Default::default()
            })
        }
    }

    impl StrengthOracle for StubOracle {
        fn estimate(&self, _password: &str) -> StrengthEstimate {
            self.0.clone()
        }
    }

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_empty_password_rejected() {
        let result = evaluate_password(&secret(""), &CommonPasswordSet::empty());
        assert_eq!(result.unwrap_err(), EvaluateError::Empty);
    }

    #[test]
    fn test_overlong_password_rejected() {
        let long = "a".repeat(129);
        let result = evaluate_password(&secret(&long), &CommonPasswordSet::empty());
        assert_eq!(result.unwrap_err(), EvaluateError::TooLong);
    }

    #[test]
    fn test_128_chars_still_accepted() {
        let edge = "a".repeat(128);
        assert!(evaluate_password(&secret(&edge), &CommonPasswordSet::empty()).is_ok());
    }

    #[test]
    fn test_label_mapping_exhaustive_over_scores() {
        let common = CommonPasswordSet::empty();
        let expected = [Label::Weak, Label::Weak, Label::Okay, Label::Okay, Label::Strong];
        for (score, want) in expected.into_iter().enumerate() {
            let oracle = StubOracle::with_score(score as u8);
            let verdict = evaluate_with_oracle(&secret("whatever"), &common, &oracle).unwrap();
            assert_eq!(verdict.score, score as u8);
            assert_eq!(verdict.label, want);
        }
    }

    #[test]
    fn test_compose_order_is_fixed() {
        let oracle = StubOracle(StrengthEstimate {
            score: 1,
            suggestions: vec!["first suggestion".to_string(), "second suggestion".to_string()],
            warning: Some("oracle warning".to_string()),
            crack_times: BTreeMap::new(),
        });

        // Short, lowercase-only, with a repeated run; no other rule hits.
        let verdict =
            evaluate_with_oracle(&secret("mmmop"), &CommonPasswordSet::empty(), &oracle).unwrap();

        assert_eq!(
            verdict.feedback,
            vec![
                "first suggestion",
                "second suggestion",
                "Use at least 12 characters.",
                "Add uppercase letters.",
                "Add numbers.",
                "Add symbols (like !@#).",
            ]
        );
        assert_eq!(
            verdict.warnings,
            vec![
                "oracle warning",
                "Avoid repeated characters like 'aaa' or '111'.",
            ]
        );
    }

    #[test]
    fn test_clean_password_gets_no_rule_output() {
        let oracle = StubOracle::with_score(4);
        let verdict =
            evaluate_with_oracle(&secret("Zq8#mVt2&wXp"), &CommonPasswordSet::empty(), &oracle)
                .unwrap();

        assert!(verdict.feedback.is_empty());
        assert!(verdict.warnings.is_empty());
        assert!(!verdict.common_password);
        assert_eq!(verdict.common_password_source, None);
        assert_eq!(verdict.breached, None);
    }

    #[test]
    fn test_common_membership_is_case_insensitive() {
        let common: CommonPasswordSet = ["password123"].into_iter().collect();
        let oracle = StubOracle::with_score(0);

        for candidate in ["password123", "PASSWORD123", "PassWord123"] {
            let verdict = evaluate_with_oracle(&secret(candidate), &common, &oracle).unwrap();
            assert!(verdict.common_password, "{candidate} should be flagged");
            assert_eq!(verdict.common_password_source, Some("rockyou"));
            assert_eq!(
                verdict.warnings.last().map(String::as_str),
                Some("This password appears in real-world breach lists (RockYou).")
            );
        }
    }

    #[test]
    fn test_reversed_chunk_triggers_same_warnings() {
        let oracle = StubOracle::with_score(2);
        let common = CommonPasswordSet::empty();

        let forward = evaluate_with_oracle(&secret("code1234"), &common, &oracle).unwrap();
        let backward = evaluate_with_oracle(&secret("code4321"), &common, &oracle).unwrap();
        assert_eq!(forward.warnings, backward.warnings);
        assert!(
            forward
                .warnings
                .contains(&"Avoid sequential patterns like 'abcd' or '6543'.".to_string())
        );
    }

    #[test]
    fn test_apply_breach_tristate() {
        let oracle = StubOracle::with_score(3);
        let mut verdict =
            evaluate_with_oracle(&secret("whatever"), &CommonPasswordSet::empty(), &oracle)
                .unwrap();
        assert_eq!(verdict.breached, None);

        verdict.apply_breach(BreachStatus::Breached);
        assert_eq!(verdict.breached, Some(true));
        verdict.apply_breach(BreachStatus::Clean);
        assert_eq!(verdict.breached, Some(false));
        verdict.apply_breach(BreachStatus::Unknown);
        assert_eq!(verdict.breached, None);
    }

    mod end_to_end {
        use super::*;

        #[test]
        fn test_trivial_numeric_password_is_weak() {
            let verdict = evaluate_password(&secret("12345"), &CommonPasswordSet::empty()).unwrap();
            assert_eq!(verdict.label, Label::Weak);
            assert!(verdict.score <= 1);
            assert!(verdict.warnings.contains(
                &"Avoid common patterns like 'password', 'qwerty', or '12345'.".to_string()
            ));
        }

        #[test]
        fn test_corpus_hit_sets_source() {
            let common: CommonPasswordSet = ["password", "password123"].into_iter().collect();
            let verdict = evaluate_password(&secret("password"), &common).unwrap();
            assert!(verdict.common_password);
            assert_eq!(verdict.common_password_source, Some("rockyou"));

            let verdict = evaluate_password(&secret("password123"), &common).unwrap();
            assert!(verdict.common_password);
            assert_eq!(verdict.common_password_source, Some("rockyou"));
        }

        #[test]
        fn test_robust_password_gets_no_length_or_class_tips() {
            let verdict =
                evaluate_password(&secret("Tr0ub4dor&3xyzAB"), &CommonPasswordSet::empty())
                    .unwrap();

            let rule_tips = [
                "Use at least 12 characters.",
                "Add lowercase letters.",
                "Add uppercase letters.",
                "Add numbers.",
                "Add symbols (like !@#).",
            ];
            for tip in rule_tips {
                assert!(
                    !verdict.feedback.iter().any(|f| f.as_str() == tip),
                    "unexpected tip {tip}"
                );
            }
        }

        #[test]
        fn test_crack_time_estimates_populated() {
            let verdict =
                evaluate_password(&secret("whatever"), &CommonPasswordSet::empty()).unwrap();
            assert_eq!(verdict.crack_time_estimates.len(), 4);
        }
    }
}

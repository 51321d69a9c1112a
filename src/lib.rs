//! Password verdict library
//!
//! Evaluates a user-supplied password into a structured verdict: a 0-4
//! score, a WEAK/OKAY/STRONG label, remediation feedback, warnings about
//! risky patterns, common-password membership against a RockYou-style
//! corpus, and an optional breach flag from a k-anonymity range lookup.
//!
//! No password, hash, or digest is ever written to storage or logs, and
//! all evaluation is pure: the corpus is built once and shared read-only,
//! so concurrent evaluations need no coordination.
//!
//! # Features
//!
//! - `breach` (default): Enables the HIBP range-lookup client
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `ROCKYOU_PATH`: Custom path to the common-password corpus
//!   (default: `./data/rockyou.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_verdict::{CommonPasswordSet, evaluate_password};
//! use secrecy::SecretString;
//!
//! // Load the corpus (once at startup)
//! let common = CommonPasswordSet::load(None);
//!
//! // Evaluate a password
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let verdict = evaluate_password(&password, &common).expect("non-empty password");
//!
//! println!("Score: {}", verdict.score);
//! println!("Label: {}", verdict.label);
//! ```

// Internal modules
mod breach;
mod detectors;
mod evaluator;
mod oracle;
mod types;
mod wordlist;

// Public API
pub use breach::BreachOracle;
pub use detectors::{FindingKind, PatternFinding};
pub use evaluator::{EvaluateError, MAX_PASSWORD_LENGTH, evaluate_password, evaluate_with_oracle};
pub use oracle::{StrengthOracle, ZxcvbnOracle};
pub use types::{BreachStatus, Label, StrengthEstimate, Verdict};
pub use wordlist::{CommonPasswordSet, default_wordlist_path};

#[cfg(feature = "breach")]
pub use breach::{DEFAULT_RANGE_URL, HibpClient};

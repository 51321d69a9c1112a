//! Common-password corpus loading.
//!
//! The corpus is loaded once at process start into an immutable membership
//! set and passed by reference into every evaluation. Loading never fails:
//! a missing file degrades to an empty set and malformed bytes are decoded
//! lossily rather than aborting.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Returns the corpus file path.
///
/// Priority:
/// 1. Environment variable `ROCKYOU_PATH`
/// 2. Default path `./data/rockyou.txt`
pub fn default_wordlist_path() -> PathBuf {
    std::env::var("ROCKYOU_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./data/rockyou.txt"))
}

/// An immutable set of known-common passwords, lower-cased.
///
/// Built once at startup; membership is the only operation, so concurrent
/// evaluations can share it by reference with no synchronization.
#[derive(Debug, Clone, Default)]
pub struct CommonPasswordSet {
    entries: HashSet<String>,
}

impl CommonPasswordSet {
    /// An empty set; every membership test is negative.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the corpus from `path`, or from [`default_wordlist_path`] when
    /// `path` is `None`.
    ///
    /// Never fails: a missing file yields an empty set, and undecodable
    /// byte sequences are substituted rather than aborting the load.
    pub fn load(path: Option<&Path>) -> Self {
        let resolved = path
            .map(Path::to_path_buf)
            .unwrap_or_else(default_wordlist_path);
        Self::from_file(&resolved)
    }

    /// Loads the corpus from a specific file path, tolerating absence.
    pub fn from_file(path: &Path) -> Self {
        let Ok(bytes) = std::fs::read(path) else {
            #[cfg(feature = "tracing")]
            tracing::debug!("common-password corpus not found at {:?}, using empty set", path);
            return Self::empty();
        };

        // The corpus may contain non-UTF8 lines; losing those is acceptable,
        // failing the whole load is not.
        let content = String::from_utf8_lossy(&bytes);
        let entries: HashSet<String> = content
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();

        #[cfg(feature = "tracing")]
        tracing::info!("loaded {} common passwords from {:?}", entries.len(), path);

        Self { entries }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CommonPasswordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|s| s.into().trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}

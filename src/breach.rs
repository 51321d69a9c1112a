//! Breach lookup via a k-anonymity range service.
//!
//! Only a 5-character prefix of the password's SHA-1 digest ever leaves the
//! process; the server returns every known suffix sharing that prefix and
//! the match is decided locally. Transport failures are an expected
//! condition and surface as [`BreachStatus::Unknown`], never as an error
//! and never with a retry.

use std::future::Future;

use secrecy::SecretString;

use crate::types::BreachStatus;

/// An external breach-lookup capability.
///
/// Behind a trait so callers can be tested without network access.
pub trait BreachOracle {
    /// Reports whether `password` is known to have appeared in a breach.
    fn check_breach(&self, password: &SecretString) -> impl Future<Output = BreachStatus> + Send;
}

#[cfg(feature = "breach")]
pub use hibp::{DEFAULT_RANGE_URL, HibpClient};

#[cfg(feature = "breach")]
mod hibp {
    use std::time::Duration;

    use secrecy::ExposeSecret;
    use sha1::{Digest, Sha1};

    use super::*;

    /// Production range-query endpoint.
    pub const DEFAULT_RANGE_URL: &str = "https://api.pwnedpasswords.com/range";

    const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

    /// Client for the Have I Been Pwned range-lookup protocol.
    #[derive(Debug, Clone)]
    pub struct HibpClient {
        client: reqwest::Client,
        base_url: String,
    }

    impl HibpClient {
        pub fn new() -> Self {
            Self::with_base_url(DEFAULT_RANGE_URL)
        }

        /// Points the client at a different range endpoint. Used by tests
        /// against a loopback listener.
        pub fn with_base_url(base_url: impl Into<String>) -> Self {
            Self {
                client: reqwest::Client::new(),
                base_url: base_url.into().trim_end_matches('/').to_string(),
            }
        }
    }

    impl Default for HibpClient {
        fn default() -> Self {
            Self::new()
        }
    }

    /// Splits the uppercase hex SHA-1 of `password` into the 5-character
    /// range prefix and the 35-character suffix compared locally.
    fn digest_parts(password: &str) -> (String, String) {
        let mut hex = hex::encode_upper(Sha1::digest(password.as_bytes()));
        let suffix = hex.split_off(5);
        (hex, suffix)
    }

    impl BreachOracle for HibpClient {
        async fn check_breach(&self, password: &SecretString) -> BreachStatus {
            let (prefix, suffix) = digest_parts(password.expose_secret());
            let url = format!("{}/{}", self.base_url, prefix);

            let response = match self.client.get(&url).timeout(LOOKUP_TIMEOUT).send().await {
                Ok(response) => response,
                Err(_) => {
                    // The error display can echo the request URL, so it is
                    // not logged.
                    #[cfg(feature = "tracing")]
                    tracing::warn!("breach lookup transport failure, returning unknown");
                    return BreachStatus::Unknown;
                }
            };

            if !response.status().is_success() {
                #[cfg(feature = "tracing")]
                tracing::warn!(status = %response.status(), "breach lookup non-success, returning unknown");
                return BreachStatus::Unknown;
            }

            let body = match response.text().await {
                Ok(body) => body,
                Err(_) => return BreachStatus::Unknown,
            };

            for line in body.lines() {
                let Some((found_suffix, _count)) = line.split_once(':') else {
                    continue;
                };
                if found_suffix == suffix {
                    return BreachStatus::Breached;
                }
            }
            BreachStatus::Clean
        }
    }

}

//! Breach lookup client for the pwnedpasswords k-anonymity range API.
//!
//! Only the first 5 hex characters of the password's SHA-1 digest are ever
//! sent; the server answers with every known suffix sharing that prefix, so
//! neither the full hash nor the password leaves the process.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use thiserror::Error;

use crate::types::BreachStatus;

/// Passwords shorter than this are never sent to the range API.
pub const MIN_CHECK_LENGTH: usize = 4;

const DEFAULT_BASE_URL: &str = "https://api.pwnedpasswords.com/range";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure modes of a range lookup. All of them collapse to
/// [`BreachStatus::Error`] at the [`BreachClient::check`] boundary; none
/// escapes to the caller.
#[derive(Error, Debug)]
pub enum BreachError {
    #[error("range API request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("range API returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed range API response: {0}")]
    Parse(String),
}

/// Returns the range-API base URL.
///
/// Priority:
/// 1. Environment variable `PWD_BREACH_API_URL`
/// 2. Default `https://api.pwnedpasswords.com/range`
pub fn breach_api_url() -> String {
    std::env::var("PWD_BREACH_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

/// Client for the breach range API. Cheap to clone; the underlying
/// connection pool is shared.
#[derive(Debug, Clone)]
pub struct BreachClient {
    http: reqwest::Client,
    base_url: String,
}

impl BreachClient {
    /// Builds a client against the configured endpoint (see
    /// [`breach_api_url`]) with a 10 second request timeout.
    pub fn new() -> Self {
        Self::with_base_url(breach_api_url())
    }

    /// Builds a client against a specific endpoint.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        BreachClient {
            http,
            base_url: base_url.into(),
        }
    }

    /// Looks the password up in the breach corpus. Never fails: transport,
    /// status and parse problems all resolve to [`BreachStatus::Error`],
    /// which consumers must render as "unable to check", never as clean.
    pub async fn check(&self, password: &SecretString) -> BreachStatus {
        if password.expose_secret().chars().count() < MIN_CHECK_LENGTH {
            return BreachStatus::TooShortToCheck;
        }

        match self.lookup(password).await {
            Ok(status) => status,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("breach lookup failed: {}", _err);
                BreachStatus::Error
            }
        }
    }

    /// Performs the range query and scans the response for our suffix.
    async fn lookup(&self, password: &SecretString) -> Result<BreachStatus, BreachError> {
        let (prefix, suffix) = hash_prefix_suffix(password);

        #[cfg(feature = "tracing")]
        tracing::debug!("querying breach range for prefix {}", prefix);

        let response = self
            .http
            .get(format!("{}/{}", self.base_url, prefix))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BreachError::Status(status));
        }

        let body = response.text().await?;
        match_suffix(&body, &suffix)
    }
}

impl Default for BreachClient {
    fn default() -> Self {
        Self::new()
    }
}

/// SHA-1 of the exact password bytes as uppercase hex, split into the
/// 5-character prefix sent to the API and the 35-character suffix matched
/// locally.
pub fn hash_prefix_suffix(password: &SecretString) -> (String, String) {
    let digest = Sha1::digest(password.expose_secret().as_bytes());
    let hex = hex::encode_upper(digest);
    let (prefix, suffix) = hex.split_at(5);
    (prefix.to_string(), suffix.to_string())
}

/// Scans a `SUFFIX:COUNT` response body for an exact (case-sensitive) match.
/// Lines for other suffixes are skipped without validation; a matching line
/// with an unparseable count is a parse error.
fn match_suffix(body: &str, suffix: &str) -> Result<BreachStatus, BreachError> {
    for line in body.lines() {
        let Some((candidate, count)) = line.split_once(':') else {
            continue;
        };
        if candidate.trim() == suffix {
            let count: u64 = count
                .trim()
                .parse()
                .map_err(|_| BreachError::Parse(format!("bad count in line {line:?}")))?;
            return Ok(BreachStatus::Found(count));
        }
    }
    Ok(BreachStatus::Clean)
}

//! Client configuration parsed from environment variables.
//!
//! Natively the values come from the process environment. Browser builds have
//! no process environment, so [`ClientConfig::from_build_env`] bakes the same
//! variables in at compile time.

use std::time::Duration;

pub const BASE_URL_VAR: &str = "EMOJI_API_BASE_URL";
pub const TIMEOUT_VAR: &str = "EMOJI_API_TIMEOUT_SECS";

/// Empty base means same-origin relative paths (`/api/...`).
pub const DEFAULT_BASE_URL: &str = "";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientConfig {
    /// Prefix for every request path, without a trailing slash.
    pub base_url: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub request_timeout_secs: Option<u64>,
}

impl ClientConfig {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: normalize_base_url(base_url), request_timeout_secs: None }
    }

    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `EMOJI_API_BASE_URL`: default empty (same origin)
    /// - `EMOJI_API_TIMEOUT_SECS`: positive integer, unset means no timeout
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_VAR).ok();
        let timeout = std::env::var(TIMEOUT_VAR).ok();
        Self::from_values(base_url.as_deref(), timeout.as_deref())
    }

    /// Build config from the variables present when the crate was compiled.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("EMOJI_API_BASE_URL"), option_env!("EMOJI_API_TIMEOUT_SECS"))
    }

    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    fn from_values(base_url: Option<&str>, timeout: Option<&str>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.unwrap_or(DEFAULT_BASE_URL)),
            request_timeout_secs: parse_timeout(timeout),
        }
    }
}

pub(crate) fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn parse_timeout(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse::<u64>().ok().filter(|secs| *secs > 0)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

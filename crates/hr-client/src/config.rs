//! # Client Configuration
//!
//! Environment-based configuration for the HR dashboard client.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Dashboard client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the users API
    pub api_base_url: String,

    /// Number of users requested for the employee list
    pub page_limit: u32,

    /// Per-request timeout
    pub request_timeout: Duration,

    /// Directory holding persisted client state (bookmarks)
    pub data_dir: PathBuf,

    /// Seed for reproducible enrichment; random when unset
    pub enrich_seed: Option<u64>,

    /// Logging level
    pub log_level: String,

    /// Emit logs as JSON lines (`LOG_FORMAT=json`)
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            api_base_url: lookup("HR_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),

            page_limit: parse_or(&lookup, "HR_PAGE_LIMIT", defaults.page_limit),

            request_timeout: Duration::from_secs(parse_or(
                &lookup,
                "HR_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout.as_secs(),
            )),

            data_dir: lookup("HR_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),

            enrich_seed: lookup("HR_ENRICH_SEED").and_then(|raw| match raw.parse() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    tracing::warn!(value = %raw, "Ignoring invalid HR_ENRICH_SEED");
                    None
                }
            }),

            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),

            log_json: lookup("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json")),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://dummyjson.com".to_string(),
            page_limit: 20,
            request_timeout: Duration::from_secs(10),
            data_dir: PathBuf::from(".hr-dashboard"),
            enrich_seed: None,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

fn parse_or<T: FromStr + Copy>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Invalid value, using default");
            default
        }),
        None => default,
    }
}

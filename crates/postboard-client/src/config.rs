use std::time::Duration;

/// Default remote data source (the JSONPlaceholder demo API).
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";

/// Environment variable consulted when no explicit URL is given.
pub const API_URL_ENV: &str = "POSTBOARD_API_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: resolve_api_url(None),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new(explicit_url: Option<&str>, timeout_secs: Option<u64>) -> Self {
        Self {
            base_url: resolve_api_url(explicit_url),
            timeout: Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

/// Resolve the API base URL based on priority:
/// 1. Explicit URL (CLI flag)
/// 2. POSTBOARD_API_URL environment variable
/// 3. Built-in default
pub fn resolve_api_url(explicit_url: Option<&str>) -> String {
    if let Some(url) = explicit_url {
        return normalize_base_url(url);
    }

    if let Ok(env_url) = std::env::var(API_URL_ENV)
        && !env_url.is_empty()
    {
        return normalize_base_url(&env_url);
    }

    DEFAULT_API_URL.to_string()
}

/// Strip a trailing slash so endpoint paths can be appended uniformly
fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

//! API client configuration.

use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://doctor.chakravue.co.in";
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the backend.
///
/// The base URL defaults to the production host and can be overridden via
/// the `CHAKRAVUE_API_URL` environment variable or the builder.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: env::var("CHAKRAVUE_API_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ApiConfig {
    /// Sets the backend base URL. A trailing slash is stripped so paths
    /// can always be joined with a leading one.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ApiConfig::default().with_base_url("https://example.test/");
        assert_eq!(config.base_url, "https://example.test");
    }
}

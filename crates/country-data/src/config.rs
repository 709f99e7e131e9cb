//! Configuration for the World Bank client.

use std::time::Duration;

/// Default World Bank API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.worldbank.org/v2";

/// Connection settings for [`crate::WorldBankClient`].
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// API base URL without trailing slash (e.g., "https://api.worldbank.org/v2").
    pub base_url: String,
    /// Page size for the list endpoint. Large enough to fit every economy in one page.
    pub per_page: u32,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl SourceConfig {
    /// Create a configuration with the given base URL and default limits.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Set the list page size.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// URL of the list-all endpoint.
    pub fn list_url(&self) -> String {
        format!(
            "{}/country?format=json&per_page={}",
            self.base_url, self.per_page
        )
    }

    /// URL of the get-by-code endpoint. The code is percent-encoded.
    pub fn country_url(&self, code: &str) -> String {
        format!(
            "{}/country/{}?format=json",
            self.base_url,
            urlencoding::encode(code)
        )
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            per_page: 300,
            timeout: Duration::from_secs(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = SourceConfig::default();
        assert_eq!(
            config.list_url(),
            "https://api.worldbank.org/v2/country?format=json&per_page=300"
        );
        assert_eq!(
            config.country_url("ARG"),
            "https://api.worldbank.org/v2/country/ARG?format=json"
        );
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = SourceConfig::new("http://localhost:9000/");
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.per_page, 300);
    }

    #[test]
    fn test_country_url_encodes_code() {
        let config = SourceConfig::new("http://localhost:9000");
        assert_eq!(
            config.country_url("a/b c"),
            "http://localhost:9000/country/a%2Fb%20c?format=json"
        );
    }

    #[test]
    fn test_builders() {
        let config = SourceConfig::new("http://x")
            .with_per_page(50)
            .with_timeout(Duration::from_secs(2));
        assert_eq!(config.list_url(), "http://x/country?format=json&per_page=50");
        assert_eq!(config.timeout, Duration::from_secs(2));
    }
}

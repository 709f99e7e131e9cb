//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use country_data::SourceConfig;

/// Site server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Public URL prefix used for canonical and OpenGraph URLs.
    pub base_url: String,
    /// World Bank API base URL.
    pub world_bank_url: String,
    /// Page size for the country list request.
    pub per_page: u32,
    /// Timeout for World Bank requests.
    pub timeout: Duration,
    /// Optional JSON file replacing the built-in fallback table.
    pub fallback_path: Option<PathBuf>,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `SITE_ADDR` | Server bind address | `127.0.0.1:8790` |
    /// | `SITE_BASE_URL` | Canonical URL prefix | `https://country-profiles.com` |
    /// | `WORLD_BANK_URL` | World Bank API base URL | `https://api.worldbank.org/v2` |
    /// | `WORLD_BANK_PER_PAGE` | Country list page size | `300` |
    /// | `WORLD_BANK_TIMEOUT_SECS` | Request timeout in seconds | `10` |
    /// | `FALLBACK_PATH` | JSON file of fallback records | (built-in table) |
    /// | `STATIC_DIR` | Stylesheet directory | `static` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("SITE_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8790".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let base_url = env::var("SITE_BASE_URL")
            .unwrap_or_else(|_| "https://country-profiles.com".to_string())
            .trim_end_matches('/')
            .to_string();

        let world_bank_url = env::var("WORLD_BANK_URL")
            .unwrap_or_else(|_| country_data::config::DEFAULT_BASE_URL.to_string());

        let per_page = parse_number("WORLD_BANK_PER_PAGE", 300)?;
        let timeout = Duration::from_secs(u64::from(parse_number("WORLD_BANK_TIMEOUT_SECS", 10)?));

        let fallback_path = env::var("FALLBACK_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        Ok(Self {
            addr,
            base_url,
            world_bank_url,
            per_page,
            timeout,
            fallback_path,
            static_dir,
        })
    }

    /// Client settings for the World Bank API.
    pub fn source_config(&self) -> SourceConfig {
        SourceConfig::new(&self.world_bank_url)
            .with_per_page(self.per_page)
            .with_timeout(self.timeout)
    }
}

fn parse_number(name: &'static str, default: u32) -> Result<u32, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or(ConfigError::InvalidNumber(name)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid SITE_ADDR format")]
    InvalidAddr,

    #[error("{0} must be a positive integer")]
    InvalidNumber(&'static str),
}

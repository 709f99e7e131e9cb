//! World Bank Open Data HTTP client.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::SourceConfig;
use crate::error::SourceError;
use crate::model::UpstreamCountry;

/// A remote source of upstream country records.
///
/// Implementations report failures as errors; the fallback policy lives in
/// [`crate::CountryDirectory`].
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Fetch the full country list, aggregates included.
    async fn list_countries(&self) -> Result<Vec<UpstreamCountry>, SourceError>;

    /// Fetch a single country by code. `Ok(None)` means the API had no record.
    async fn get_country(&self, code: &str) -> Result<Option<UpstreamCountry>, SourceError>;

    /// Name used in logs.
    fn name(&self) -> &str;
}

/// Client for the World Bank `country` endpoints.
#[derive(Clone)]
pub struct WorldBankClient {
    http: Client,
    config: SourceConfig,
}

impl WorldBankClient {
    /// Create a client with the configured timeout.
    pub fn new(config: SourceConfig) -> Result<Self, SourceError> {
        let http = Client::builder()
            .user_agent(concat!("country-data/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, config })
    }

    /// The client configuration.
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// GET a URL and decode the `[metadata, records]` envelope.
    async fn fetch_records(&self, url: &str) -> Result<Vec<UpstreamCountry>, SourceError> {
        debug!("Fetching countries from: {}", url);

        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }

        let payload: Value = response.json().await?;
        Ok(parse_payload(payload))
    }
}

#[async_trait]
impl CountrySource for WorldBankClient {
    async fn list_countries(&self) -> Result<Vec<UpstreamCountry>, SourceError> {
        self.fetch_records(&self.config.list_url()).await
    }

    async fn get_country(&self, code: &str) -> Result<Option<UpstreamCountry>, SourceError> {
        let records = self.fetch_records(&self.config.country_url(code)).await?;
        Ok(records.into_iter().next())
    }

    fn name(&self) -> &str {
        "world-bank"
    }
}

/// Extract records from a World Bank response body.
///
/// The API answers `[metadata, records]`. Anything else (an error envelope
/// with a single element, a `null` second element, a bare object) is treated
/// as no data. Records that fail to decode are skipped.
pub fn parse_payload(payload: Value) -> Vec<UpstreamCountry> {
    let items = match payload {
        Value::Array(mut parts) if parts.len() >= 2 => match parts.swap_remove(1) {
            Value::Array(items) => items,
            other => {
                debug!(kind = %json_kind(&other), "World Bank response has no record array");
                return Vec::new();
            }
        },
        other => {
            debug!(kind = %json_kind(&other), "Unexpected World Bank response shape");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<UpstreamCountry>(item) {
            Ok(country) => Some(country),
            Err(err) => {
                warn!(error = %err, "Skipping undecodable country record");
                None
            }
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_payload_records() {
        let payload = json!([
            {"page": 1, "pages": 1, "per_page": "300", "total": 2},
            [
                {"id": "ARG", "name": "Argentina", "region": {"value": "Latin America & Caribbean "}},
                {"id": "JPN", "name": "Japan", "region": {"value": "East Asia & Pacific"}}
            ]
        ]);

        let records = parse_payload(payload);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "ARG");
        assert_eq!(records[1].id, "JPN");
    }

    #[test]
    fn test_parse_payload_error_envelope() {
        let payload = json!([{
            "message": [{"id": "120", "key": "Invalid value", "value": "The provided parameter value is not valid"}]
        }]);
        assert!(parse_payload(payload).is_empty());
    }

    #[test]
    fn test_parse_payload_null_records() {
        let payload = json!([{"page": 0, "pages": 0, "total": 0}, null]);
        assert!(parse_payload(payload).is_empty());
    }

    #[test]
    fn test_parse_payload_not_array() {
        assert!(parse_payload(json!({"error": "nope"})).is_empty());
        assert!(parse_payload(json!("text")).is_empty());
    }

    #[test]
    fn test_parse_payload_skips_bad_records() {
        let payload = json!([
            {},
            [
                {"name": "Missing id"},
                {"id": "DEU", "name": "Germany"}
            ]
        ]);
        let records = parse_payload(payload);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "DEU");
    }

    #[tokio::test]
    #[ignore] // Requires network
    async fn test_live_get_country() {
        let client = WorldBankClient::new(SourceConfig::default()).unwrap();
        let country = client.get_country("ARG").await.unwrap().unwrap();
        assert_eq!(country.name, "Argentina");
    }
}

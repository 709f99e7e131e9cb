//! Country record types.

use serde::{Deserialize, Serialize};

/// Placeholder for a missing capital, income level, or region.
pub const NOT_AVAILABLE: &str = "N/A";

/// Flat country record handed to page templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    /// ISO 3166-1 alpha-3 code (e.g., "ARG").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Canonical region label.
    pub region: String,
    /// Capital city, or [`NOT_AVAILABLE`].
    pub capital: String,
    /// Income classification label, or [`NOT_AVAILABLE`].
    pub income_level: String,
}

impl CountryRecord {
    /// Create a record from its display fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        region: impl Into<String>,
        capital: impl Into<String>,
        income_level: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            region: region.into(),
            capital: capital.into(),
            income_level: income_level.into(),
        }
    }
}

/// A `{ "id": ..., "value": ... }` reference object in World Bank payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub value: String,
}

impl UpstreamRef {
    /// Reference carrying only a label.
    pub fn labelled(value: impl Into<String>) -> Self {
        Self {
            id: None,
            value: value.into(),
        }
    }
}

/// Raw country record as returned by the World Bank API.
///
/// Only the fields the site uses are decoded; the rest
/// (`iso2Code`, `lendingType`, coordinates) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamCountry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub region: Option<UpstreamRef>,
    #[serde(default)]
    pub income_level: Option<UpstreamRef>,
    #[serde(default)]
    pub capital_city: Option<String>,
}

impl UpstreamCountry {
    /// Whether this entry is a regional or income aggregate rather than a country.
    ///
    /// The World Bank tags aggregates with region id `NA` and label `Aggregates`.
    pub fn is_aggregate(&self) -> bool {
        match &self.region {
            Some(region) => {
                region.id.as_deref() == Some("NA")
                    || region.value.trim().eq_ignore_ascii_case("aggregates")
            }
            None => false,
        }
    }
}

impl From<&CountryRecord> for UpstreamCountry {
    fn from(record: &CountryRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            region: Some(UpstreamRef::labelled(&record.region)),
            income_level: Some(UpstreamRef::labelled(&record.income_level)),
            capital_city: Some(record.capital.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_world_bank_record() {
        let json = r#"{
            "id": "ARG",
            "iso2Code": "AR",
            "name": "Argentina",
            "region": {"id": "LCN", "iso2code": "ZJ", "value": "Latin America & Caribbean "},
            "adminregion": {"id": "LAC", "iso2code": "XJ", "value": "Latin America & Caribbean (excluding high income)"},
            "incomeLevel": {"id": "UMC", "iso2code": "XT", "value": "Upper middle income"},
            "lendingType": {"id": "IBD", "iso2code": "XF", "value": "IBRD"},
            "capitalCity": "Buenos Aires",
            "longitude": "-58.4173",
            "latitude": "-34.6118"
        }"#;

        let country: UpstreamCountry = serde_json::from_str(json).unwrap();
        assert_eq!(country.id, "ARG");
        assert_eq!(country.capital_city.as_deref(), Some("Buenos Aires"));
        assert_eq!(
            country.region.as_ref().map(|r| r.value.as_str()),
            Some("Latin America & Caribbean ")
        );
        assert!(!country.is_aggregate());
    }

    #[test]
    fn test_deserialize_missing_optional_fields() {
        let country: UpstreamCountry =
            serde_json::from_str(r#"{"id": "XKX", "name": "Kosovo"}"#).unwrap();
        assert!(country.region.is_none());
        assert!(country.income_level.is_none());
        assert!(country.capital_city.is_none());
    }

    #[test]
    fn test_is_aggregate() {
        let json = r#"{
            "id": "AFE",
            "name": "Africa Eastern and Southern",
            "region": {"id": "NA", "iso2code": "NA", "value": "Aggregates"},
            "incomeLevel": {"id": "NA", "iso2code": "NA", "value": "Aggregates"},
            "capitalCity": ""
        }"#;
        let country: UpstreamCountry = serde_json::from_str(json).unwrap();
        assert!(country.is_aggregate());

        let labelled_only = UpstreamCountry {
            id: "WLD".to_string(),
            name: "World".to_string(),
            region: Some(UpstreamRef::labelled("Aggregates")),
            income_level: None,
            capital_city: None,
        };
        assert!(labelled_only.is_aggregate());
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = CountryRecord::new("JPN", "Japan", "East Asia & Pacific", "Tokyo", "High income");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["incomeLevel"], "High income");
        assert!(value.get("income_level").is_none());
    }
}

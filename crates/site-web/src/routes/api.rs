//! JSON API over the country directory.

use axum::extract::{Path, Query, State};
use axum::Json;
use country_data::{CountryRecord, FallbackReason};
use serde::Serialize;

use super::directory::{apply_filters, DirectoryQuery};
use crate::error::{Result, SiteError};
use crate::state::AppState;

/// Country list response.
#[derive(Serialize)]
pub struct CountryListResponse {
    /// "remote" or "fallback".
    pub source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<FallbackReason>,
    pub count: usize,
    pub countries: Vec<CountryRecord>,
}

/// Single country response.
#[derive(Serialize)]
pub struct CountryResponse {
    pub source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<FallbackReason>,
    pub country: CountryRecord,
}

/// List countries, optionally filtered by `q` and `region`.
pub async fn countries_api(
    State(state): State<AppState>,
    Query(query): Query<DirectoryQuery>,
) -> Json<CountryListResponse> {
    let outcome = state.directory.fetch_all().await;
    let source = outcome.origin();
    let reason = outcome.reason().cloned();
    let countries = apply_filters(outcome.value(), &query);

    Json(CountryListResponse {
        source,
        reason,
        count: countries.len(),
        countries,
    })
}

/// Look up one country by code.
pub async fn country_api(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<CountryResponse>> {
    let outcome = state.directory.fetch_one(&code).await;
    let source = outcome.origin();
    let reason = outcome.reason().cloned();

    let country = outcome
        .into_value()
        .ok_or_else(|| SiteError::NotFound(code.trim().to_uppercase()))?;

    Ok(Json(CountryResponse {
        source,
        reason,
        country,
    }))
}

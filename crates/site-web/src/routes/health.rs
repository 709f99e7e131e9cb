//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Liveness status. The World Bank API is not probed; pages degrade to the
/// fallback table when it is down.
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub fallback_countries: usize,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        fallback_countries: state.directory.fallback().len(),
    })
}

//! Route handlers for the country profiles site.

pub mod api;
pub mod country;
pub mod directory;
pub mod health;
pub mod overview;

use askama::Template;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use country_data::FallbackReason;

use crate::seo::PageMeta;
use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // HTML pages
        .route("/", get(directory::index_page))
        .route("/country/:code", get(country::country_page))
        .route("/seo/:slug", get(overview::overview_page))
        // Health check
        .route("/health", get(health::health))
        // API endpoints
        .route("/api/countries", get(api::countries_api))
        .route("/api/countries/:code", get(api::country_api))
        .fallback(unknown_route)
}

/// 404 page template.
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub meta: PageMeta,
    pub message: String,
}

/// Render the 404 page. Not-found pages are excluded from indexing.
pub(crate) fn not_found_page(state: &AppState, path: &str, message: String) -> Response {
    let meta = PageMeta::new("Page Not Found", message.clone(), state.page_url(path)).no_index();
    (StatusCode::NOT_FOUND, NotFoundTemplate { meta, message }).into_response()
}

async fn unknown_route(State(state): State<AppState>, uri: Uri) -> Response {
    not_found_page(
        &state,
        uri.path(),
        "The page you were looking for does not exist.".to_string(),
    )
}

/// Banner text shown when a page is built from fallback data.
pub(crate) fn fallback_notice(reason: Option<&FallbackReason>) -> Option<String> {
    match reason? {
        FallbackReason::Unavailable(_) | FallbackReason::NoData => Some(
            "Live World Bank data is unavailable right now. Showing locally stored figures."
                .to_string(),
        ),
        FallbackReason::NotFound => {
            Some("This profile is served from locally stored figures.".to_string())
        }
    }
}

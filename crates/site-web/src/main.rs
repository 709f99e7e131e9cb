//! Country economic profiles website.
//!
//! Serves server-rendered country pages with SEO metadata, backed by the
//! World Bank Open Data API and a local fallback table.

mod config;
mod error;
mod routes;
mod seo;
mod state;

use country_data::{CountryDirectory, FallbackTable, WorldBankClient};
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting country profiles site");

    let fallback = match &config.fallback_path {
        Some(path) => FallbackTable::from_json_file(path)?,
        None => FallbackTable::builtin(),
    };
    info!(countries = fallback.len(), "Fallback table ready");

    let source_config = config.source_config();
    info!(url = %source_config.base_url, "Using World Bank API");
    let client = WorldBankClient::new(source_config)?;

    // Build application state
    let state = AppState::new(CountryDirectory::new(client, fallback), &config.base_url);

    // Build router
    let app = routes::router()
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(state);

    // Start server
    info!(addr = %config.addr, "Country profiles site listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

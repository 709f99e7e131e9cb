//! Country directory backed by the World Bank Open Data API.
//!
//! This crate fetches country metadata (name, region, capital, income level)
//! and flattens it into [`CountryRecord`]s. It provides:
//!
//! - [`WorldBankClient`] - HTTP client for the two World Bank country endpoints
//! - [`normalize`] - Maps an [`UpstreamCountry`] into a [`CountryRecord`]
//! - [`canonical_region`] - Ordered keyword rules that collapse region labels
//! - [`FallbackTable`] - Read-only local records used when the API is unavailable
//! - [`CountryDirectory`] - Adapter that never fails: it returns a [`FetchOutcome`]
//!   saying whether the data came from the API or the fallback table
//!
//! # Example
//!
//! ```no_run
//! use country_data::{CountryDirectory, FallbackTable, SourceConfig, WorldBankClient};
//!
//! # async fn example() -> Result<(), country_data::SourceError> {
//! let client = WorldBankClient::new(SourceConfig::default())?;
//! let directory = CountryDirectory::new(client, FallbackTable::builtin());
//!
//! let outcome = directory.fetch_all().await;
//! if outcome.is_fallback() {
//!     println!("World Bank API unavailable, showing local data");
//! }
//! for country in outcome.value() {
//!     println!("{} ({})", country.name, country.region);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod directory;
pub mod error;
pub mod fallback;
pub mod filter;
pub mod model;
pub mod normalize;
pub mod region;

pub use client::{CountrySource, WorldBankClient};
pub use config::SourceConfig;
pub use directory::{CountryDirectory, FallbackReason, FetchOutcome};
pub use error::{DataError, SourceError};
pub use fallback::FallbackTable;
pub use filter::{in_region, regions, search};
pub use model::{CountryRecord, UpstreamCountry, UpstreamRef, NOT_AVAILABLE};
pub use normalize::normalize;
pub use region::{canonical_region, RegionRule, REGION_RULES};

// Re-export async_trait for implementors of CountrySource
pub use async_trait::async_trait;

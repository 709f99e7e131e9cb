//! Application state shared across handlers.

use country_data::CountryDirectory;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Country data with fallback.
    pub directory: CountryDirectory,
    /// Public URL prefix without trailing slash.
    pub base_url: String,
}

impl AppState {
    /// Create new application state.
    pub fn new(directory: CountryDirectory, base_url: impl Into<String>) -> Self {
        Self {
            directory,
            base_url: base_url.into(),
        }
    }

    /// Absolute URL for a site path such as `/country/ARG`.
    pub fn page_url(&self, path: &str) -> String {
        if path == "/" {
            self.base_url.clone()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }
}

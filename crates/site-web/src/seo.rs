//! Page metadata: title, description, OpenGraph, Twitter card, and JSON-LD.

use country_data::CountryRecord;
use serde_json::{json, Value};

/// Site name appended to every page title.
pub const SITE_NAME: &str = "Global Economic Insights";

const DEFAULT_KEYWORDS: &str = "countries, economy, economic profiles, statistics";
const DEFAULT_IMAGE: &str = "/og-image.jpg";

/// Metadata rendered into the `<head>` of each page.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// Canonical URL, also used for `og:url`.
    pub url: String,
    /// OpenGraph object type ("website" or "article").
    pub og_type: &'static str,
    pub image: String,
    pub keywords: String,
    pub no_index: bool,
    /// JSON-LD structured data.
    pub schema: Option<Value>,
}

impl PageMeta {
    /// Indexable "website" page with default image and keywords.
    pub fn new(title: impl Into<String>, description: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
            og_type: "website",
            image: DEFAULT_IMAGE.to_string(),
            keywords: DEFAULT_KEYWORDS.to_string(),
            no_index: false,
            schema: None,
        }
    }

    pub fn with_type(mut self, og_type: &'static str) -> Self {
        self.og_type = og_type;
        self
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = keywords.into();
        self
    }

    pub fn with_schema(mut self, schema: Value) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Ask crawlers not to index or follow this page.
    pub fn no_index(mut self) -> Self {
        self.no_index = true;
        self
    }

    /// Title with the site name suffix.
    pub fn full_title(&self) -> String {
        format!("{} | {}", self.title, SITE_NAME)
    }

    pub fn robots(&self) -> &'static str {
        if self.no_index {
            "noindex, nofollow"
        } else {
            "index, follow"
        }
    }

    /// Serialized JSON-LD, safe to embed in a `<script>` element.
    pub fn schema_json(&self) -> Option<String> {
        self.schema
            .as_ref()
            .map(|schema| schema.to_string().replace("</", "<\\/"))
    }
}

/// `Country` structured data for a detail page.
pub fn country_schema(country: &CountryRecord, description: &str, url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Country",
        "name": country.name,
        "alternateName": country.id,
        "identifier": country.id,
        "containedInPlace": {
            "@type": "Place",
            "name": country.region
        },
        "description": description,
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": url
        }
    })
}

/// `WebSite` structured data with a search action for the directory page.
pub fn website_schema(base_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": SITE_NAME,
        "url": base_url,
        "potentialAction": {
            "@type": "SearchAction",
            "target": format!("{}/?q={{search_term_string}}", base_url),
            "query-input": "required name=search_term_string"
        }
    })
}

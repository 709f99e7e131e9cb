//! Region label canonicalization.
//!
//! World Bank region labels drift over time ("South Asia", "Middle East,
//! North Africa, Afghanistan & Pakistan", "Europe & Central Asia (excluding
//! high income)"). The site groups them into a small fixed set using an
//! ordered list of keyword rules where the first match wins.

use crate::model::NOT_AVAILABLE;

/// A keyword rule mapping free-text region labels to a canonical label.
#[derive(Debug, Clone, Copy)]
pub struct RegionRule {
    /// Lower-case substrings; any one of them triggers the rule.
    pub keywords: &'static [&'static str],
    /// Label assigned on match.
    pub label: &'static str,
}

impl RegionRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Region rules in priority order.
///
/// The South Asia rule comes before the Middle East rule so that the
/// combined label it produces maps back onto itself.
pub const REGION_RULES: &[RegionRule] = &[
    RegionRule {
        keywords: &["south asia", "pakistan", "afghanistan"],
        label: "Middle East & South Asia",
    },
    RegionRule {
        keywords: &["latin america", "caribbean"],
        label: "Latin America & Caribbean",
    },
    RegionRule {
        keywords: &["middle east", "north africa"],
        label: "Middle East & North Africa",
    },
    RegionRule {
        keywords: &["sub-saharan"],
        label: "Sub-Saharan Africa",
    },
    RegionRule {
        keywords: &["east asia", "pacific"],
        label: "East Asia & Pacific",
    },
    RegionRule {
        keywords: &["europe", "central asia"],
        label: "Europe & Central Asia",
    },
];

/// Drop a trailing qualifier such as " (excluding high income)".
fn strip_qualifier(label: &str) -> &str {
    match label.find(" (") {
        Some(index) => &label[..index],
        None => label,
    }
}

/// Map a raw region label onto its canonical form.
///
/// Unmatched labels are returned trimmed with any qualifier removed.
/// A blank label becomes [`NOT_AVAILABLE`].
pub fn canonical_region(raw: &str) -> String {
    let stripped = strip_qualifier(raw).trim();
    if stripped.is_empty() {
        return NOT_AVAILABLE.to_string();
    }

    let lowered = stripped.to_lowercase();
    REGION_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.label.to_string())
        .unwrap_or_else(|| stripped.to_string())
}

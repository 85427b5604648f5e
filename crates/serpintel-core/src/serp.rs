//! Canonical, provider-agnostic SERP snapshot.
//!
//! Every provider adapter produces a [`NormalizedSerpResult`]; downstream
//! consumers (keyword research, SERP history persistence, intent scoring)
//! read only this shape.

use serde::{Deserialize, Serialize};

/// Device class a SERP was captured for.
///
/// Serialized as the lower-case canonical token regardless of how the
/// provider spelled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    #[default]
    Desktop,
    Mobile,
    Tablet,
}

impl Device {
    /// Maps a provider device string to a canonical device.
    ///
    /// The lookup is case-insensitive (`"MOBILE"`, `"mobile"`, `"Mobile"` are
    /// equivalent). Unrecognized values fall back to [`Device::Desktop`].
    #[must_use]
    pub fn from_provider(raw: &str) -> Self {
        match raw.to_uppercase().as_str() {
            "MOBILE" => Device::Mobile,
            "TABLET" => Device::Tablet,
            _ => Device::Desktop,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Device::Desktop => "desktop",
            Device::Mobile => "mobile",
            Device::Tablet => "tablet",
        }
    }
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic targeting of a SERP query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    /// ISO 3166-1 alpha-2 by convention (e.g. `"US"`). Not validated; empty
    /// when the provider did not report a country.
    pub country: String,
    /// State / province code, e.g. `"CA"`.
    pub region: Option<String>,
    /// City name, e.g. `"San Jose"`.
    pub city: Option<String>,
}

impl Location {
    #[must_use]
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            region: None,
            city: None,
        }
    }
}

/// A single organic listing inside a SERP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerpResultItem {
    /// Provider-reported position, or 1-based insertion order when absent.
    pub rank: u32,
    pub title: String,
    pub url: String,
    /// Host without a leading `www.`; empty when it could not be determined.
    pub domain: String,
    pub snippet: String,
}

/// Provenance of a SERP: which provider (and tool) produced the raw data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerpSource {
    /// Provider identifier, e.g. `"apify"`.
    pub provider: String,
    /// Provider-side tool, e.g. `"apify/google-search-scraper"`.
    pub actor: Option<String>,
    /// Provider-specific run / job identifier.
    pub run_id: Option<String>,
}

impl SerpSource {
    #[must_use]
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            actor: None,
            run_id: None,
        }
    }
}

/// Canonical representation of one SERP response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSerpResult {
    pub query: String,
    pub location: Location,
    pub device: Device,
    /// Lower-case engine token, e.g. `"google"`.
    pub engine: String,
    /// Unix timestamp (seconds) of when the SERP was fetched.
    pub ts: i64,
    /// Organic results in provider rank order. May be empty.
    #[serde(default)]
    pub results: Vec<SerpResultItem>,
    #[serde(default)]
    pub source: Option<SerpSource>,
}

impl NormalizedSerpResult {
    /// Returns the domains of the first `n` results, in rank order.
    ///
    /// Results with an empty domain are skipped and do not count toward `n`.
    #[must_use]
    pub fn top_domains(&self, n: usize) -> Vec<String> {
        self.results
            .iter()
            .filter(|item| !item.domain.is_empty())
            .take(n)
            .map(|item| item.domain.clone())
            .collect()
    }

    /// Returns the number of organic results in this SERP.
    #[must_use]
    pub fn result_count(&self) -> usize {
        self.results.len()
    }
}

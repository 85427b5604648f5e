//! Adapter for the Apify *Google Search Scraper* actor.
//!
//! Actor page: <https://apify.com/apify/google-search-scraper>
//!
//! One raw record is one item of the actor's dataset, i.e. one search query
//! / SERP page. Observed shape (abbreviated):
//!
//! ```json
//! {
//!   "searchQuery": { "term": "plumber san jose", "countryCode": "US", "languageCode": "en" },
//!   "device": "MOBILE",
//!   "crawledAt": "2025-04-24T09:00:00.000Z",
//!   "#runId": "abc123",
//!   "organicResults": [
//!     { "position": 1, "title": "Best Plumbers in San Jose",
//!       "url": "https://example.com/plumber-san-jose", "domain": "example.com",
//!       "description": "Top-rated local plumbers" }
//!   ]
//! }
//! ```
//!
//! ### Field fallbacks
//! - query: `searchQuery.term`, then top-level `query`
//! - country: `searchQuery.countryCode`, then top-level `country`
//! - city: `searchQuery.city`, then top-level `city`; region: top-level `region`
//! - timestamp: `crawledAt`, then `scrapedAt`, then the adapter's clock
//! - run id: `#runId`, then `runId`
//! - snippet: `description`, then `snippet`
//!
//! Older actor versions emit `scrapedAt` and `runId`; current ones emit
//! `crawledAt` and `#runId`.

use serde_json::{Map, Value};
use serpintel_core::{Device, Location, NormalizedSerpResult, SerpResultItem, SerpSource};

use crate::adapter::SerpAdapter;
use crate::clock::{Clock, SystemClock};
use crate::error::AdapterError;
use crate::parse_helpers::{
    extract_domain, identifier, json_kind, non_empty_str, parse_timestamp, positive_rank,
};

/// Provider identifier recorded in [`SerpSource::provider`].
pub const PROVIDER: &str = "apify";

/// Actor identifier recorded in [`SerpSource::actor`].
pub const ACTOR: &str = "apify/google-search-scraper";

const ENGINE: &str = "google";

/// Normalizes Apify Google Search Scraper dataset items.
#[derive(Debug, Clone, Default)]
pub struct ApifyGoogleSearchAdapter<C = SystemClock> {
    clock: C,
}

impl ApifyGoogleSearchAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> ApifyGoogleSearchAdapter<C> {
    /// Builds an adapter that reads fallback timestamps from `clock`.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    fn timestamp(&self, raw: &Map<String, Value>) -> i64 {
        let candidate = non_empty_str(raw, "crawledAt").or_else(|| non_empty_str(raw, "scrapedAt"));
        if let Some(ts) = candidate.and_then(parse_timestamp) {
            return ts;
        }
        let now = self.clock.now_unix();
        tracing::debug!(
            crawled_at = candidate,
            fallback_ts = now,
            "no parseable crawl timestamp; using current time"
        );
        now
    }
}

impl<C: Clock> SerpAdapter for ApifyGoogleSearchAdapter<C> {
    fn normalize(&self, raw: &Value) -> Result<NormalizedSerpResult, AdapterError> {
        let Value::Object(raw) = raw else {
            return Err(AdapterError::InvalidInput {
                expected: "object",
                found: json_kind(raw),
            });
        };

        let empty = Map::new();
        let search_query = raw
            .get("searchQuery")
            .and_then(Value::as_object)
            .unwrap_or(&empty);

        let query = non_empty_str(search_query, "term")
            .or_else(|| non_empty_str(raw, "query"))
            .unwrap_or_default()
            .to_owned();

        let location = Location {
            country: non_empty_str(search_query, "countryCode")
                .or_else(|| non_empty_str(raw, "country"))
                .unwrap_or_default()
                .to_owned(),
            region: non_empty_str(raw, "region").map(str::to_owned),
            city: non_empty_str(search_query, "city")
                .or_else(|| non_empty_str(raw, "city"))
                .map(str::to_owned),
        };

        let device = Device::from_provider(non_empty_str(raw, "device").unwrap_or("DESKTOP"));

        let ts = self.timestamp(raw);
        let results = normalize_organic_results(raw.get("organicResults"));

        let source = SerpSource {
            provider: PROVIDER.to_owned(),
            actor: Some(ACTOR.to_owned()),
            run_id: identifier(raw, "#runId").or_else(|| identifier(raw, "runId")),
        };

        Ok(NormalizedSerpResult {
            query,
            location,
            device,
            engine: ENGINE.to_owned(),
            ts,
            results,
            source: Some(source),
        })
    }
}

/// Normalizes the `organicResults` array, preserving provider order.
///
/// A missing or non-array value yields no results. Entries that are not JSON
/// objects are skipped and do not advance the fallback rank.
fn normalize_organic_results(organic: Option<&Value>) -> Vec<SerpResultItem> {
    let Some(entries) = organic.and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut results: Vec<SerpResultItem> = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(item) = entry.as_object() else {
            tracing::debug!(kind = json_kind(entry), "skipping non-object organic result");
            continue;
        };
        let fallback_rank = u32::try_from(results.len() + 1).unwrap_or(u32::MAX);
        results.push(normalize_organic_item(item, fallback_rank));
    }
    results
}

fn normalize_organic_item(item: &Map<String, Value>, fallback_rank: u32) -> SerpResultItem {
    let url = non_empty_str(item, "url").unwrap_or_default().to_owned();
    let domain = match non_empty_str(item, "domain") {
        Some(domain) => domain.to_owned(),
        None => extract_domain(&url),
    };

    SerpResultItem {
        rank: positive_rank(item, "position").unwrap_or(fallback_rank),
        title: non_empty_str(item, "title").unwrap_or_default().to_owned(),
        url,
        domain,
        snippet: non_empty_str(item, "description")
            .or_else(|| non_empty_str(item, "snippet"))
            .unwrap_or_default()
            .to_owned(),
    }
}

#[cfg(test)]
#[path = "apify_test.rs"]
mod tests;

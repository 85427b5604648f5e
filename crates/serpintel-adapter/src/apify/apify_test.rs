use serde_json::json;

use super::*;
use crate::clock::FixedClock;

#[test]
fn organic_results_missing_is_empty() {
    assert!(normalize_organic_results(None).is_empty());
}

#[test]
fn organic_results_non_array_is_empty() {
    let value = json!({"position": 1, "url": "https://a.com"});
    assert!(normalize_organic_results(Some(&value)).is_empty());
}

#[test]
fn organic_results_skip_non_objects_without_advancing_rank() {
    let value = json!([
        "garbage",
        {"title": "A", "url": "https://a.com/"},
        null,
        {"title": "B", "url": "https://b.com/"},
    ]);
    let results = normalize_organic_results(Some(&value));
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].rank, 1);
    assert_eq!(results[1].rank, 2);
}

#[test]
fn organic_item_fallback_rank_counts_emitted_items() {
    let value = json!([
        {"position": 5, "url": "https://a.com/"},
        {"url": "https://b.com/"},
    ]);
    let results = normalize_organic_results(Some(&value));
    assert_eq!(results[0].rank, 5);
    assert_eq!(results[1].rank, 2);
}

#[test]
fn organic_item_zero_position_falls_back() {
    let item = json!({"position": 0, "url": "https://a.com/"});
    let normalized = normalize_organic_item(item.as_object().unwrap(), 7);
    assert_eq!(normalized.rank, 7);
}

#[test]
fn organic_item_snippet_falls_back_to_snippet_key() {
    let item = json!({"snippet": "short", "url": "https://a.com/"});
    let normalized = normalize_organic_item(item.as_object().unwrap(), 1);
    assert_eq!(normalized.snippet, "short");
}

#[test]
fn organic_item_empty_description_falls_back_to_snippet() {
    let item = json!({"description": "", "snippet": "fallback"});
    let normalized = normalize_organic_item(item.as_object().unwrap(), 1);
    assert_eq!(normalized.snippet, "fallback");
}

#[test]
fn organic_item_all_fields_missing_are_empty_strings() {
    let item = json!({});
    let normalized = normalize_organic_item(item.as_object().unwrap(), 1);
    assert_eq!(normalized.title, "");
    assert_eq!(normalized.url, "");
    assert_eq!(normalized.domain, "");
    assert_eq!(normalized.snippet, "");
}

#[test]
fn organic_item_unparseable_url_gives_empty_domain() {
    let item = json!({"url": "not a url"});
    let normalized = normalize_organic_item(item.as_object().unwrap(), 1);
    assert_eq!(normalized.domain, "");
}

#[test]
fn timestamp_prefers_crawled_at_over_scraped_at() {
    let adapter = ApifyGoogleSearchAdapter::with_clock(FixedClock(1));
    let raw = json!({
        "crawledAt": "2025-04-24T09:00:00Z",
        "scrapedAt": "2020-01-01T00:00:00Z",
    });
    assert_eq!(adapter.timestamp(raw.as_object().unwrap()), 1_745_485_200);
}

#[test]
fn timestamp_uses_scraped_at_when_crawled_at_missing() {
    let adapter = ApifyGoogleSearchAdapter::with_clock(FixedClock(1));
    let raw = json!({"scrapedAt": "2025-04-24T09:00:00Z"});
    assert_eq!(adapter.timestamp(raw.as_object().unwrap()), 1_745_485_200);
}

#[test]
fn timestamp_unparseable_falls_back_to_clock() {
    let adapter = ApifyGoogleSearchAdapter::with_clock(FixedClock(1_000_000));
    let raw = json!({"crawledAt": "last tuesday"});
    assert_eq!(adapter.timestamp(raw.as_object().unwrap()), 1_000_000);
}

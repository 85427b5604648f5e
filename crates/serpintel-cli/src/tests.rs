use clap::Parser;
use serde_json::json;

use crate::classify::classify_report;
use crate::normalize::normalize_payload;
use crate::{Cli, Commands};
use serpintel_adapter::{ApifyGoogleSearchAdapter, FixedClock};

#[test]
fn intent_rejects_blank_keyword() {
    let result = Cli::try_parse_from(["serpintel", "intent", "--kw", "   "]);
    assert!(result.is_err());
}

#[test]
fn intent_parses_repeated_domains_and_brands() {
    let cli = Cli::try_parse_from([
        "serpintel",
        "intent",
        "--kw",
        "acme plumbing",
        "--cpc",
        "4.0",
        "--domain",
        "acmeplumbing.com",
        "--domain",
        "yelp.com",
        "--brand",
        "acme",
    ])
    .unwrap();
    let Commands::Intent(args) = cli.command else {
        panic!("expected intent command");
    };
    assert_eq!(args.kw, "acme plumbing");
    assert_eq!(args.cpc, Some(4.0));
    assert_eq!(args.domains, vec!["acmeplumbing.com", "yelp.com"]);
    assert_eq!(args.brands, vec!["acme"]);
}

#[test]
fn intent_domain_conflicts_with_serp() {
    let result = Cli::try_parse_from([
        "serpintel",
        "intent",
        "--kw",
        "plumber",
        "--domain",
        "yelp.com",
        "--serp",
        "dataset.json",
    ]);
    assert!(result.is_err());
}

#[test]
fn classify_requires_a_domain() {
    assert!(Cli::try_parse_from(["serpintel", "classify"]).is_err());
}

#[test]
fn classify_report_lists_archetypes_and_counts() {
    let report = classify_report(&["www.yelp.com".to_owned(), "blog.acme.co.uk".to_owned()]);
    assert_eq!(report["domains"][0]["archetype"], "directory");
    assert_eq!(report["domains"][1]["archetype"], "publisher");
    assert_eq!(report["domains"][1]["root_domain"], "acme.co.uk");
    assert_eq!(report["counts"]["directory"], 1);
    assert_eq!(report["counts"]["ecommerce"], 0);
}

#[test]
fn normalize_payload_skips_rejected_records() {
    let adapter = ApifyGoogleSearchAdapter::with_clock(FixedClock(0));
    let payload = json!([{"query": "a"}, 7, {"query": "b"}]);
    let serps = normalize_payload(&adapter, &payload).unwrap();
    let queries: Vec<&str> = serps.iter().map(|s| s.query.as_str()).collect();
    assert_eq!(queries, vec!["a", "b"]);
}

#[test]
fn normalize_payload_fails_when_nothing_normalizes() {
    let adapter = ApifyGoogleSearchAdapter::with_clock(FixedClock(0));
    assert!(normalize_payload(&adapter, &json!(["x", 1])).is_err());
}

#[test]
fn normalize_payload_empty_dataset_is_ok() {
    let adapter = ApifyGoogleSearchAdapter::with_clock(FixedClock(0));
    assert!(normalize_payload(&adapter, &json!([])).unwrap().is_empty());
}

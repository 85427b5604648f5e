use super::*;

const EPS: f64 = 1e-9;

fn row(kw: &str, cpc: Option<f64>, domains: &[&str]) -> KeywordUniverseRow {
    KeywordUniverseRow {
        kw: kw.to_owned(),
        geo_bucket: "US-CA-San Jose".to_owned(),
        cpc,
        serp_top_domains: domains.iter().map(|d| (*d).to_owned()).collect(),
    }
}

// -----------------------------------------------------------------------
// normalize_cpc
// -----------------------------------------------------------------------

#[test]
fn normalize_cpc_absent_or_non_positive_is_zero() {
    assert!(normalize_cpc(None).abs() < EPS);
    assert!(normalize_cpc(Some(0.0)).abs() < EPS);
    assert!(normalize_cpc(Some(-3.0)).abs() < EPS);
    assert!(normalize_cpc(Some(f64::NAN)).abs() < EPS);
}

#[test]
fn normalize_cpc_is_linear_and_capped() {
    assert!((normalize_cpc(Some(25.0)) - 0.5).abs() < EPS);
    assert!((normalize_cpc(Some(50.0)) - 1.0).abs() < EPS);
    assert!((normalize_cpc(Some(500.0)) - 1.0).abs() < EPS);
}

// -----------------------------------------------------------------------
// Modifiers
// -----------------------------------------------------------------------

#[test]
fn modifiers_are_case_insensitive() {
    let m = Modifiers::detect("Emergency Plumber NEAR ME", &[]);
    assert!(m.hire);
    assert!(m.local);
    assert!(!m.diy);
    assert!(!m.comparison);
    assert!(!m.brand);
}

#[test]
fn brand_terms_are_lowercased_and_blank_terms_ignored() {
    assert!(Modifiers::detect("acme plumbing", &["ACME"]).brand);
    assert!(!Modifiers::detect("acme plumbing", &["", "  "]).brand);
}

// -----------------------------------------------------------------------
// Scenarios
// -----------------------------------------------------------------------

#[test]
fn hire_intent_from_modifier_and_high_cpc() {
    let result = infer_intent(&row(
        "licensed plumber near me",
        Some(30.0),
        &["yelp.com", "localplumber.com"],
    ));
    assert!(matches!(
        result.intent_bucket,
        IntentBucket::CommercialHire | IntentBucket::LocalImmediate
    ));
    assert!(result.scores[IntentBucket::CommercialHire] >= result.scores[IntentBucket::DiyResearch]);
}

#[test]
fn hire_scenario_exact_scores() {
    let result = infer_intent(&row(
        "licensed plumber near me",
        Some(30.0),
        &["yelp.com", "localplumber.com"],
    ));
    // cpc_norm 0.6, hire + local modifiers, directory 0.5, local_service 0.5
    assert!((result.scores[IntentBucket::CommercialHire] - 0.695).abs() < EPS);
    assert!((result.scores[IntentBucket::DiyResearch] - 0.18).abs() < EPS);
    assert!((result.scores[IntentBucket::LocalImmediate] - 0.775).abs() < EPS);
    assert!((result.scores[IntentBucket::Comparison] - 0.175).abs() < EPS);
    assert!((result.scores[IntentBucket::BrandNavigational] - 0.1).abs() < EPS);
    assert_eq!(result.intent_bucket, IntentBucket::LocalImmediate);
    assert!((result.confidence - 0.58).abs() < EPS);
}

#[test]
fn diy_intent_from_modifier_and_low_cpc() {
    let result = infer_intent(&row(
        "how to fix clogged drain diy",
        Some(0.5),
        &["reddit.com", "wikihow.com"],
    ));
    assert_eq!(result.intent_bucket, IntentBucket::DiyResearch);
    assert!(result.scores[IntentBucket::DiyResearch] > result.scores[IntentBucket::CommercialHire]);
}

#[test]
fn brand_navigational_detected() {
    let result = infer_intent_with(
        &row("acme plumbing san jose", Some(4.0), &["acmeplumbing.com"]),
        None,
        &["acme"],
    );
    assert_eq!(result.intent_bucket, IntentBucket::BrandNavigational);
}

#[test]
fn comparison_intent_from_modifier() {
    let result = infer_intent(&row(
        "best water heater brands vs tankless",
        Some(2.0),
        &["reddit.com", "yelp.com"],
    ));
    assert_eq!(result.intent_bucket, IntentBucket::Comparison);
}

// -----------------------------------------------------------------------
// Archetype counts
// -----------------------------------------------------------------------

#[test]
fn supplied_counts_override_domains() {
    let mut counts = ArchetypeCounts::default();
    counts.increment(Archetype::Publisher);
    let result = infer_intent_with(&row("drain", None, &["yelp.com"]), Some(&counts), &[]);
    // Only the supplied publisher count feeds the ratios.
    assert!((result.scores[IntentBucket::BrandNavigational]).abs() < EPS);
    assert!((result.scores[IntentBucket::DiyResearch] - 0.65).abs() < EPS);
}

#[test]
fn no_domains_and_no_cpc_degrade_to_zeroed_contributions() {
    let result = infer_intent(&row("plumbing", None, &[]));
    assert!((result.scores[IntentBucket::DiyResearch] - 0.45).abs() < EPS);
    assert!(result.scores[IntentBucket::CommercialHire].abs() < EPS);
    assert!(result.scores[IntentBucket::LocalImmediate].abs() < EPS);
    assert!(result.scores[IntentBucket::Comparison].abs() < EPS);
    assert!(result.scores[IntentBucket::BrandNavigational].abs() < EPS);
    assert_eq!(result.intent_bucket, IntentBucket::DiyResearch);
    assert!((result.confidence - 0.95).abs() < EPS);
}

// -----------------------------------------------------------------------
// Tie-break and confidence
// -----------------------------------------------------------------------

#[test]
fn ties_resolve_to_first_declared_bucket() {
    // cpc 25 -> cpc_norm 0.5: commercial_hire = 0.225 = DIY_research.
    // Pick a keyword and SERP that zero out every other contribution.
    let result = infer_intent_with(
        &row("plumbing", Some(25.0), &[]),
        Some(&ArchetypeCounts::default()),
        &[],
    );
    assert!(
        (result.scores[IntentBucket::CommercialHire] - result.scores[IntentBucket::DiyResearch])
            .abs()
            < EPS
    );
    assert_eq!(result.intent_bucket, IntentBucket::CommercialHire);
    assert!((result.confidence - 0.5).abs() < EPS);
}

#[test]
fn intent_bucket_is_always_the_arg_max() {
    let cases = [
        row("licensed plumber near me", Some(30.0), &["yelp.com"]),
        row("how to fix a leak", None, &["reddit.com"]),
        row("top 10 plumbers reviews", Some(80.0), &["angi.com", "amazon.com"]),
        row("", Some(-5.0), &[]),
    ];
    for case in &cases {
        let result = infer_intent(case);
        let max = result
            .scores
            .iter()
            .map(|(_, s)| s)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!((result.scores[result.intent_bucket] - max).abs() < EPS);
        assert!((0.0..=1.0).contains(&result.confidence));
    }
}

#[test]
fn scores_always_carry_every_bucket() {
    let result = infer_intent(&row("plumber", Some(10.0), &["yelp.com"]));
    let json = serde_json::to_value(&result).unwrap();
    let scores = json["scores"].as_object().unwrap();
    for bucket in IntentBucket::ALL {
        assert!(scores.contains_key(bucket.as_str()), "missing {bucket}");
    }
    assert_eq!(scores.len(), 5);
}

// -----------------------------------------------------------------------
// Explanation
// -----------------------------------------------------------------------

#[test]
fn explanation_captures_inputs_and_winner() {
    let result = infer_intent_with(
        &row("acme plumbing san jose", Some(4.0), &["acmeplumbing.com"]),
        None,
        &["acme"],
    );
    assert!(result.explanation.contains("cpc=4"));
    assert!(result.explanation.contains("brand:true"));
    assert!(result.explanation.contains("hire:false"));
    assert!(result.explanation.contains("local_service: 1"));
    assert!(result.explanation.ends_with("top=brand_navigational"));
}

#[test]
fn explanation_reports_absent_cpc_as_zero() {
    let result = infer_intent(&row("plumbing", None, &[]));
    assert!(result.explanation.starts_with("cpc=0,"));
}

//! `intent` command.

use std::path::PathBuf;

use clap::Args;
use serpintel_adapter::ApifyGoogleSearchAdapter;
use serpintel_core::{load_brand_terms, normalize_terms, AppConfig, KeywordUniverseRow};
use serpintel_intent::infer_intent_with;

use crate::input::{print_json, read_json};
use crate::normalize::normalize_payload;

#[derive(Debug, Args)]
pub(crate) struct IntentArgs {
    /// Keyword to classify
    #[arg(long, value_parser = parse_keyword)]
    pub kw: String,

    /// Geo bucket label, e.g. "US-CA-San Jose"
    #[arg(long, default_value = "")]
    pub geo: String,

    /// Cost-per-click in dollars
    #[arg(long, allow_negative_numbers = true)]
    pub cpc: Option<f64>,

    /// Top SERP domain, in rank order (repeatable)
    #[arg(long = "domain", conflicts_with = "serp")]
    pub domains: Vec<String>,

    /// Apify dataset whose first SERP supplies the top domains
    #[arg(long)]
    pub serp: Option<PathBuf>,

    /// Brand term (repeatable); merged with configured brand terms
    #[arg(long = "brand")]
    pub brands: Vec<String>,
}

fn parse_keyword(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("keyword must not be empty".to_string());
    }
    Ok(trimmed.to_string())
}

pub(crate) fn run(args: &IntentArgs, config: &AppConfig) -> anyhow::Result<()> {
    let row = build_row(args, config.top_domains)?;
    let brand_terms = collect_brand_terms(args, config)?;
    let terms: Vec<&str> = brand_terms.iter().map(String::as_str).collect();

    let intent = infer_intent_with(&row, None, &terms);
    tracing::info!(
        kw = %row.kw,
        intent = %intent.intent_bucket,
        confidence = intent.confidence,
        "intent inferred"
    );
    print_json(&intent)
}

fn build_row(args: &IntentArgs, top_domains: usize) -> anyhow::Result<KeywordUniverseRow> {
    let Some(path) = args.serp.as_deref() else {
        return Ok(KeywordUniverseRow {
            kw: args.kw.clone(),
            geo_bucket: args.geo.clone(),
            cpc: args.cpc,
            serp_top_domains: args.domains.clone(),
        });
    };

    let payload = read_json(Some(path))?;
    let serps = normalize_payload(&ApifyGoogleSearchAdapter::new(), &payload)?;
    let Some(serp) = serps.first() else {
        anyhow::bail!("{} contains no SERP records", path.display());
    };
    Ok(KeywordUniverseRow::from_serp(
        args.kw.clone(),
        args.geo.clone(),
        args.cpc,
        serp,
        top_domains,
    ))
}

fn collect_brand_terms(args: &IntentArgs, config: &AppConfig) -> anyhow::Result<Vec<String>> {
    let mut terms = config.brand_terms.clone();
    if let Some(path) = config.brands_path.as_deref() {
        terms.extend(load_brand_terms(path)?);
    }
    terms.extend(args.brands.iter().cloned());
    Ok(normalize_terms(terms))
}

//! `classify` command.

use clap::Args;
use serde_json::json;
use serpintel_core::root_domain;
use serpintel_intent::{classify_domain, count_serp_archetypes};

use crate::input::print_json;

#[derive(Debug, Args)]
pub(crate) struct ClassifyArgs {
    /// Domains to classify, in SERP order
    #[arg(required = true)]
    pub domains: Vec<String>,
}

pub(crate) fn run(args: &ClassifyArgs) -> anyhow::Result<()> {
    print_json(&classify_report(&args.domains))
}

pub(crate) fn classify_report(domains: &[String]) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = domains
        .iter()
        .map(|domain| {
            json!({
                "domain": domain,
                "root_domain": root_domain(domain),
                "archetype": classify_domain(domain),
            })
        })
        .collect();

    json!({
        "domains": entries,
        "counts": count_serp_archetypes(domains),
    })
}

//! `normalize` command.

use std::path::PathBuf;

use clap::Args;
use serde_json::Value;
use serpintel_adapter::{ApifyGoogleSearchAdapter, SerpAdapter};
use serpintel_core::NormalizedSerpResult;

use crate::input::{print_json, read_json};

#[derive(Debug, Args)]
pub(crate) struct NormalizeArgs {
    /// Dataset JSON file (array of items or a single item); stdin when omitted
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}

pub(crate) fn run(args: &NormalizeArgs) -> anyhow::Result<()> {
    let payload = read_json(args.input.as_deref())?;
    let results = normalize_payload(&ApifyGoogleSearchAdapter::new(), &payload)?;
    print_json(&results)
}

/// Normalizes every record of `payload`, skipping records the adapter rejects.
///
/// Fails only when the payload had records and none of them normalized.
pub(crate) fn normalize_payload(
    adapter: &dyn SerpAdapter,
    payload: &Value,
) -> anyhow::Result<Vec<NormalizedSerpResult>> {
    let mut normalized = Vec::new();
    let mut rejected = 0usize;

    for (index, result) in adapter.normalize_dataset(payload).into_iter().enumerate() {
        match result {
            Ok(serp) => normalized.push(serp),
            Err(e) => {
                rejected += 1;
                tracing::warn!(index, error = %e, "skipping record");
            }
        }
    }

    if normalized.is_empty() && rejected > 0 {
        anyhow::bail!("none of the {rejected} input record(s) could be normalized");
    }

    tracing::info!(
        normalized = normalized.len(),
        rejected,
        "dataset normalized"
    );
    Ok(normalized)
}

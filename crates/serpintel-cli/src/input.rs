//! Reading JSON payloads from a file or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Reads and parses a JSON document from `path`, or from stdin when `path`
/// is `None` or `-`.
pub(crate) fn read_json(path: Option<&Path>) -> anyhow::Result<serde_json::Value> {
    let raw = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    parse_json(&raw)
}

pub(crate) fn parse_json(raw: &str) -> anyhow::Result<serde_json::Value> {
    serde_json::from_str(raw).context("input is not valid JSON")
}

/// Prints `value` as pretty JSON on stdout.
pub(crate) fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{rendered}");
    Ok(())
}

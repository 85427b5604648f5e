mod classify;
mod input;
mod intent;
mod normalize;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "serpintel")]
#[command(about = "Normalize SERP scrapes and infer keyword intent")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize an Apify Google Search Scraper dataset into canonical SERPs
    Normalize(normalize::NormalizeArgs),
    /// Classify domains into SERP archetypes
    Classify(classify::ClassifyArgs),
    /// Infer the intent bucket of a keyword
    Intent(intent::IntentArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = serpintel_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, top_domains = config.top_domains, "config loaded");

    match cli.command {
        Commands::Normalize(args) => normalize::run(&args),
        Commands::Classify(args) => classify::run(&args),
        Commands::Intent(args) => intent::run(&args, &config),
    }
}

#[cfg(test)]
mod tests;

//! Canonical model and configuration shared by the serpintel crates.
//!
//! Provider adapters produce [`NormalizedSerpResult`]s; intent inference
//! consumes [`KeywordUniverseRow`]s and produces [`KeywordIntent`]s. All of
//! these are plain immutable values.

pub mod app_config;
pub mod brands;
pub mod config;
pub mod domain;
pub mod error;
pub mod keyword;
pub mod serp;

pub use app_config::{AppConfig, Environment};
pub use brands::{load_brand_terms, normalize_terms, BrandConfig, BrandsFile};
pub use config::{load_app_config, load_app_config_from_env};
pub use domain::{normalize_host, root_domain};
pub use error::ConfigError;
pub use keyword::{
    Archetype, ArchetypeCounts, IntentBucket, IntentScores, KeywordIntent, KeywordUniverseRow,
};
pub use serp::{Device, Location, NormalizedSerpResult, SerpResultItem, SerpSource};

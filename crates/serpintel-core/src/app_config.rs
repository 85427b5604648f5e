use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// How many leading SERP domains feed a keyword row.
    pub top_domains: usize,
    /// Brand terms from `SERPINTEL_BRAND_TERMS`, lower-cased and de-duplicated.
    pub brand_terms: Vec<String>,
    pub brands_path: Option<PathBuf>,
}

//! Brand-term configuration for navigational intent detection.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandConfig {
    pub name: String,
    /// Extra spellings or abbreviations that should also count as the brand.
    #[serde(default)]
    pub terms: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandsFile {
    #[serde(default)]
    pub brands: Vec<BrandConfig>,
}

impl BrandsFile {
    /// Flattens every brand name and alias into a normalized term list.
    #[must_use]
    pub fn terms(&self) -> Vec<String> {
        normalize_terms(
            self.brands
                .iter()
                .flat_map(|b| std::iter::once(&b.name).chain(b.terms.iter())),
        )
    }
}

/// Lower-cases and trims terms, drops empties, and removes duplicates while
/// keeping first-seen order.
#[must_use]
pub fn normalize_terms<I, S>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for term in terms {
        let cleaned = term.as_ref().trim().to_lowercase();
        if cleaned.is_empty() || out.contains(&cleaned) {
            continue;
        }
        out.push(cleaned);
    }
    out
}

/// Load brand terms from a YAML brands file.
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file cannot be read, or
/// [`ConfigError::ParseFile`] if it is not valid YAML of the expected shape.
pub fn load_brand_terms(path: &Path) -> Result<Vec<String>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let file = parse_brands_file(&raw).map_err(|source| ConfigError::ParseFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(file.terms())
}

fn parse_brands_file(raw: &str) -> Result<BrandsFile, serde_yaml::Error> {
    serde_yaml::from_str(raw)
}

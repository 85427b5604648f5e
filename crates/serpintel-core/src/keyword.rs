//! Keyword-level value types: SERP archetypes, intent buckets, and the
//! input/output rows of intent inference.

use std::collections::HashMap;
use std::ops::Index;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::serp::NormalizedSerpResult;

/// Coarse business type of a SERP result domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Directory,
    LocalService,
    Publisher,
    Ecommerce,
}

impl Archetype {
    /// All archetypes in canonical tally order.
    pub const ALL: [Archetype; 4] = [
        Archetype::Directory,
        Archetype::LocalService,
        Archetype::Publisher,
        Archetype::Ecommerce,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Archetype::Directory => "directory",
            Archetype::LocalService => "local_service",
            Archetype::Publisher => "publisher",
            Archetype::Ecommerce => "ecommerce",
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-archetype tally of SERP domains. Every archetype is always present;
/// absent archetypes count as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchetypeCounts {
    pub directory: u32,
    pub local_service: u32,
    pub publisher: u32,
    pub ecommerce: u32,
}

impl ArchetypeCounts {
    #[must_use]
    pub fn get(&self, archetype: Archetype) -> u32 {
        match archetype {
            Archetype::Directory => self.directory,
            Archetype::LocalService => self.local_service,
            Archetype::Publisher => self.publisher,
            Archetype::Ecommerce => self.ecommerce,
        }
    }

    pub fn increment(&mut self, archetype: Archetype) {
        let slot = match archetype {
            Archetype::Directory => &mut self.directory,
            Archetype::LocalService => &mut self.local_service,
            Archetype::Publisher => &mut self.publisher,
            Archetype::Ecommerce => &mut self.ecommerce,
        };
        *slot = slot.saturating_add(1);
    }

    /// Sum of all four counters.
    #[must_use]
    pub fn total(&self) -> u64 {
        Archetype::ALL
            .iter()
            .map(|&a| u64::from(self.get(a)))
            .sum()
    }

    /// Share of `archetype` in the total tally, or `0.0` when the tally is empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self, archetype: Archetype) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.get(archetype)) / total as f64
    }
}

impl std::fmt::Display for ArchetypeCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (idx, archetype) in Archetype::ALL.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", archetype.as_str(), self.get(*archetype))?;
        }
        f.write_str("}")
    }
}

/// Inferred purchasing / research intent behind a keyword.
///
/// Declaration order is the tie-break order used by intent inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentBucket {
    #[serde(rename = "commercial_hire")]
    CommercialHire,
    #[serde(rename = "DIY_research")]
    DiyResearch,
    #[serde(rename = "local_immediate")]
    LocalImmediate,
    #[serde(rename = "comparison")]
    Comparison,
    #[serde(rename = "brand_navigational")]
    BrandNavigational,
}

impl IntentBucket {
    /// All buckets in declaration (tie-break) order.
    pub const ALL: [IntentBucket; 5] = [
        IntentBucket::CommercialHire,
        IntentBucket::DiyResearch,
        IntentBucket::LocalImmediate,
        IntentBucket::Comparison,
        IntentBucket::BrandNavigational,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            IntentBucket::CommercialHire => "commercial_hire",
            IntentBucket::DiyResearch => "DIY_research",
            IntentBucket::LocalImmediate => "local_immediate",
            IntentBucket::Comparison => "comparison",
            IntentBucket::BrandNavigational => "brand_navigational",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for IntentBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IntentBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntentBucket::ALL
            .into_iter()
            .find(|bucket| bucket.as_str() == s)
            .ok_or_else(|| format!("unknown intent bucket: {s}"))
    }
}

/// One score per [`IntentBucket`], held in declaration order.
///
/// Serializes as a `label -> score` mapping that always carries all five
/// labels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(try_from = "HashMap<String, f64>")]
pub struct IntentScores([f64; 5]);

impl IntentScores {
    #[must_use]
    pub fn get(&self, bucket: IntentBucket) -> f64 {
        self.0[bucket.index()]
    }

    pub fn set(&mut self, bucket: IntentBucket, score: f64) {
        self.0[bucket.index()] = score;
    }

    /// Iterates `(bucket, score)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (IntentBucket, f64)> + '_ {
        IntentBucket::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl Index<IntentBucket> for IntentScores {
    type Output = f64;

    fn index(&self, bucket: IntentBucket) -> &f64 {
        &self.0[bucket.index()]
    }
}

impl Serialize for IntentScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (bucket, score) in self.iter() {
            map.serialize_entry(bucket.as_str(), &score)?;
        }
        map.end()
    }
}

impl TryFrom<HashMap<String, f64>> for IntentScores {
    type Error = String;

    fn try_from(map: HashMap<String, f64>) -> Result<Self, Self::Error> {
        let mut scores = IntentScores::default();
        for (label, score) in map {
            let bucket: IntentBucket = label.parse()?;
            scores.set(bucket, score);
        }
        Ok(scores)
    }
}

/// A keyword plus the context intent inference scores it against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordUniverseRow {
    /// Keyword text. Expected to be non-empty.
    pub kw: String,
    /// Geo bucket label, e.g. `"US-CA-San Jose"`.
    pub geo_bucket: String,
    /// Cost-per-click. Absent or non-positive means "unknown".
    pub cpc: Option<f64>,
    /// Top SERP domains in rank order.
    #[serde(default)]
    pub serp_top_domains: Vec<String>,
}

impl KeywordUniverseRow {
    /// Builds a row from a normalized SERP, taking the domains of its first
    /// `top_n` results.
    #[must_use]
    pub fn from_serp(
        kw: impl Into<String>,
        geo_bucket: impl Into<String>,
        cpc: Option<f64>,
        serp: &NormalizedSerpResult,
        top_n: usize,
    ) -> Self {
        Self {
            kw: kw.into(),
            geo_bucket: geo_bucket.into(),
            cpc,
            serp_top_domains: serp.top_domains(top_n),
        }
    }
}

/// Outcome of intent inference for one keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordIntent {
    /// Arg-max bucket of `scores`.
    pub intent_bucket: IntentBucket,
    /// In `[0.0, 1.0]`.
    pub confidence: f64,
    pub scores: IntentScores,
    /// Human-readable audit trail; not meant for machine parsing.
    pub explanation: String,
}

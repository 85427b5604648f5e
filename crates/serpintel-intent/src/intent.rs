//! Deterministic keyword intent inference from keyword text and SERP
//! composition.
//!
//! Each intent bucket is scored as a weighted sum of a small set of signals
//! (normalized CPC, keyword modifier hits, SERP archetype ratios). The
//! highest score wins; ties go to the bucket declared first in
//! [`IntentBucket::ALL`].

use serpintel_core::{
    Archetype, ArchetypeCounts, IntentBucket, IntentScores, KeywordIntent, KeywordUniverseRow,
};

use crate::archetype::count_serp_archetypes;

pub(crate) const DIY_MODIFIERS: &[&str] = &[
    "how to",
    "diy",
    "fix",
    "repair yourself",
    "what is",
    "cost to do myself",
];

pub(crate) const HIRE_MODIFIERS: &[&str] = &[
    "near me",
    "service",
    "company",
    "contractor",
    "quote",
    "estimate",
    "installation",
    "licensed",
    "24/7",
];

pub(crate) const LOCAL_MODIFIERS: &[&str] = &["near me", "emergency", "24/7", "open now"];

pub(crate) const COMPARISON_MODIFIERS: &[&str] = &["best", "top", "reviews", "vs", "compare"];

/// CPC at or above this value normalizes to `1.0`.
pub const MAX_CPC: f64 = 50.0;

/// Inputs a weight table can reference.
#[derive(Debug, Clone, Copy)]
enum Signal {
    Cpc,
    InverseCpc,
    Hire,
    Diy,
    Local,
    Comparison,
    Brand,
    DirectoryRatio,
    LocalServiceRatio,
    PublisherRatio,
    DirectoryPlusPublisherRatio,
}

/// Per-bucket weight tables, in tie-break order.
const WEIGHTS: [(IntentBucket, &[(Signal, f64)]); 5] = [
    (
        IntentBucket::CommercialHire,
        &[
            (Signal::Cpc, 0.45),
            (Signal::Hire, 0.30),
            (Signal::LocalServiceRatio, 0.15),
            (Signal::DirectoryRatio, 0.10),
        ],
    ),
    (
        IntentBucket::DiyResearch,
        &[
            (Signal::InverseCpc, 0.45),
            (Signal::Diy, 0.35),
            (Signal::PublisherRatio, 0.20),
        ],
    ),
    (
        IntentBucket::LocalImmediate,
        &[
            (Signal::Local, 0.55),
            (Signal::LocalServiceRatio, 0.25),
            (Signal::DirectoryRatio, 0.20),
        ],
    ),
    (
        IntentBucket::Comparison,
        &[
            (Signal::Comparison, 0.65),
            (Signal::DirectoryPlusPublisherRatio, 0.35),
        ],
    ),
    (
        IntentBucket::BrandNavigational,
        &[(Signal::Brand, 0.80), (Signal::DirectoryRatio, 0.20)],
    ),
];

/// Keyword modifier hits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Modifiers {
    hire: bool,
    diy: bool,
    local: bool,
    comparison: bool,
    brand: bool,
}

impl Modifiers {
    fn detect(kw: &str, brand_terms: &[&str]) -> Self {
        let kw = kw.to_lowercase();
        let brand = brand_terms
            .iter()
            .map(|term| term.trim().to_lowercase())
            .any(|term| !term.is_empty() && kw.contains(&term));
        Self {
            hire: contains_any(&kw, HIRE_MODIFIERS),
            diy: contains_any(&kw, DIY_MODIFIERS),
            local: contains_any(&kw, LOCAL_MODIFIERS),
            comparison: contains_any(&kw, COMPARISON_MODIFIERS),
            brand,
        }
    }
}

/// Resolved signal values for one keyword.
#[derive(Debug, Clone, Copy)]
struct Signals {
    cpc_norm: f64,
    modifiers: Modifiers,
    directory_ratio: f64,
    local_service_ratio: f64,
    publisher_ratio: f64,
}

impl Signals {
    fn value(&self, signal: Signal) -> f64 {
        let flag = |hit: bool| if hit { 1.0 } else { 0.0 };
        match signal {
            Signal::Cpc => self.cpc_norm,
            Signal::InverseCpc => 1.0 - self.cpc_norm,
            Signal::Hire => flag(self.modifiers.hire),
            Signal::Diy => flag(self.modifiers.diy),
            Signal::Local => flag(self.modifiers.local),
            Signal::Comparison => flag(self.modifiers.comparison),
            Signal::Brand => flag(self.modifiers.brand),
            Signal::DirectoryRatio => self.directory_ratio,
            Signal::LocalServiceRatio => self.local_service_ratio,
            Signal::PublisherRatio => self.publisher_ratio,
            Signal::DirectoryPlusPublisherRatio => self.directory_ratio + self.publisher_ratio,
        }
    }

    fn score(&self, weights: &[(Signal, f64)]) -> f64 {
        weights
            .iter()
            .map(|&(signal, weight)| weight * self.value(signal))
            .sum()
    }
}

fn contains_any(lowered: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| lowered.contains(term))
}

/// Maps a CPC onto `[0.0, 1.0]`, linear up to [`MAX_CPC`].
///
/// Absent, zero, negative, and NaN CPCs all normalize to `0.0`.
#[must_use]
pub fn normalize_cpc(cpc: Option<f64>) -> f64 {
    match cpc {
        Some(value) if value > 0.0 => (value / MAX_CPC).min(1.0),
        _ => 0.0,
    }
}

/// Infer the intent bucket for a keyword, deriving archetype counts from the
/// row's SERP domains and using no brand terms.
#[must_use]
pub fn infer_intent(row: &KeywordUniverseRow) -> KeywordIntent {
    infer_intent_with(row, None, &[])
}

/// Infer the intent bucket for a keyword.
///
/// `archetype_counts`, when given, is used instead of classifying
/// `row.serp_top_domains`. `brand_terms` are matched case-insensitively as
/// substrings of the keyword; blank terms are ignored.
///
/// Never fails: missing CPC or SERP data contributes zero to every score.
#[must_use]
pub fn infer_intent_with(
    row: &KeywordUniverseRow,
    archetype_counts: Option<&ArchetypeCounts>,
    brand_terms: &[&str],
) -> KeywordIntent {
    let archetypes = archetype_counts
        .copied()
        .unwrap_or_else(|| count_serp_archetypes(&row.serp_top_domains));

    let signals = Signals {
        cpc_norm: normalize_cpc(row.cpc),
        modifiers: Modifiers::detect(&row.kw, brand_terms),
        directory_ratio: archetypes.ratio(Archetype::Directory),
        local_service_ratio: archetypes.ratio(Archetype::LocalService),
        publisher_ratio: archetypes.ratio(Archetype::Publisher),
    };

    let mut scores = IntentScores::default();
    for (bucket, weights) in WEIGHTS {
        scores.set(bucket, signals.score(weights));
    }

    // Stable sort keeps declaration order among equal scores.
    let mut ranking: Vec<(IntentBucket, f64)> = scores.iter().collect();
    ranking.sort_by(|a, b| b.1.total_cmp(&a.1));
    let (intent_bucket, top_score) = ranking[0];
    let second_score = ranking.get(1).map_or(0.0, |&(_, score)| score);
    let confidence = (top_score - second_score + 0.5).clamp(0.0, 1.0);

    let m = signals.modifiers;
    let explanation = format!(
        "cpc={}, modifiers={{hire:{}, diy:{}, local:{}, comparison:{}, brand:{}}}, serp={}, top={}",
        row.cpc.unwrap_or(0.0),
        m.hire,
        m.diy,
        m.local,
        m.comparison,
        m.brand,
        archetypes,
        intent_bucket,
    );

    tracing::trace!(
        kw = %row.kw,
        intent = %intent_bucket,
        confidence,
        "inferred keyword intent"
    );

    KeywordIntent {
        intent_bucket,
        confidence,
        scores,
        explanation,
    }
}

#[cfg(test)]
#[path = "intent_test.rs"]
mod tests;

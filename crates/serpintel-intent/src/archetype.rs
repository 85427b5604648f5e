//! SERP domain archetype tagging.

use serpintel_core::{normalize_host, Archetype, ArchetypeCounts};

/// Review / lead-gen directories. Matched as exact domain or any subdomain.
pub(crate) const DIRECTORY_DOMAINS: &[&str] = &[
    "yelp.com",
    "angi.com",
    "homeadvisor.com",
    "thumbtack.com",
    "yellowpages.com",
];

pub(crate) const PUBLISHER_DOMAINS: &[&str] = &[
    "reddit.com",
    "quora.com",
    "wikipedia.org",
    "wikihow.com",
    "medium.com",
];

pub(crate) const ECOMMERCE_DOMAINS: &[&str] = &[
    "amazon.com",
    "ebay.com",
    "walmart.com",
    "homedepot.com",
    "lowes.com",
];

/// Domain labels that mark a community / editorial site.
const PUBLISHER_LABELS: &[&str] = &["forum", "blog"];

/// Domain labels that mark a storefront.
const ECOMMERCE_LABELS: &[&str] = &["shop", "store"];

/// `true` if `domain` is one of `roots` or a subdomain of one.
fn matches_root(domain: &str, roots: &[&str]) -> bool {
    roots.iter().any(|root| {
        domain == *root
            || domain
                .strip_suffix(root)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

/// `true` if any `.`/`-` separated label of `domain` is one of `labels`.
///
/// Whole-label matching keeps `forumshopping.com` and `restore.com` out of
/// the publisher and ecommerce buckets.
fn has_label(domain: &str, labels: &[&str]) -> bool {
    domain
        .split(['.', '-'])
        .any(|label| labels.contains(&label))
}

/// Classify a SERP domain into an [`Archetype`].
///
/// Checks run in a fixed order and the first match wins:
/// 1. empty (after trimming, lower-casing, stripping `www.`) → publisher
/// 2. known directory (or subdomain) → directory
/// 3. known publisher, or a `forum`/`blog` label → publisher
/// 4. known retailer, or a `shop`/`store` label → ecommerce
/// 5. anything else → `local_service`
#[must_use]
pub fn classify_domain(domain: &str) -> Archetype {
    let normalized = normalize_host(domain);
    if normalized.is_empty() {
        return Archetype::Publisher;
    }

    if matches_root(&normalized, DIRECTORY_DOMAINS) {
        return Archetype::Directory;
    }
    if matches_root(&normalized, PUBLISHER_DOMAINS) || has_label(&normalized, PUBLISHER_LABELS) {
        return Archetype::Publisher;
    }
    if matches_root(&normalized, ECOMMERCE_DOMAINS) || has_label(&normalized, ECOMMERCE_LABELS) {
        return Archetype::Ecommerce;
    }
    Archetype::LocalService
}

/// Tally archetypes across the given SERP domains.
///
/// Every archetype is present in the result; unseen ones count as zero.
pub fn count_serp_archetypes<I, S>(domains: I) -> ArchetypeCounts
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = ArchetypeCounts::default();
    for domain in domains {
        counts.increment(classify_domain(domain.as_ref()));
    }
    counts
}

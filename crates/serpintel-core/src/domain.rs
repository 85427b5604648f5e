//! Host and root-domain helpers shared by adapters and callers.

/// Public suffixes made of two labels. A root domain under one of these keeps
/// three labels (`acme.co.uk`), everything else keeps two (`acme.com`).
const TWO_LEVEL_SUFFIXES: [&str; 7] = [
    "co.uk", "org.uk", "gov.uk", "ac.uk", "com.au", "net.au", "org.au",
];

/// Lower-cases, trims, and strips a leading `www.` from a host.
#[must_use]
pub fn normalize_host(host: &str) -> String {
    let lower = host.trim().to_lowercase();
    match lower.strip_prefix("www.") {
        Some(rest) => rest.to_owned(),
        None => lower,
    }
}

/// Reduces a host or URL to its registrable root domain.
///
/// Accepts bare hosts (`"blog.acme.com"`) as well as URLs
/// (`"https://www.acme.co.uk/contact"`). Returns an empty string for blank
/// input.
#[must_use]
pub fn root_domain(input: &str) -> String {
    let lower = input.trim().to_lowercase();
    if lower.is_empty() {
        return String::new();
    }

    let without_scheme = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .unwrap_or(&lower);
    let without_www = without_scheme
        .strip_prefix("www.")
        .unwrap_or(without_scheme);
    let host = without_www
        .split(['/', '?', '#', ':'])
        .next()
        .unwrap_or_default();

    let parts: Vec<&str> = host.split('.').filter(|p| !p.is_empty()).collect();
    if parts.len() <= 2 {
        return host.to_owned();
    }

    let tail2 = parts[parts.len() - 2..].join(".");
    if TWO_LEVEL_SUFFIXES.contains(&tail2.as_str()) {
        return parts[parts.len() - 3..].join(".");
    }
    tail2
}

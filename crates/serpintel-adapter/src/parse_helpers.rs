//! Lenient accessors over raw provider JSON.
//!
//! Provider payloads are loosely typed: fields go missing, arrive as `null`,
//! or change type between actor versions. Every helper here treats a missing
//! key, a `null`, an empty string, and a value of the wrong type the same way:
//! as absent.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};
use url::{Host, Url};

/// Returns a short name for the JSON kind of `value`, for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns `obj[key]` when it is a non-empty string.
pub(crate) fn non_empty_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Returns `obj[key]` as an identifier string. Non-empty strings are taken
/// as-is and numbers are rendered in decimal.
pub(crate) fn identifier(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Returns `obj[key]` as a positive rank.
///
/// Accepts positive integers and positive whole floats (`3.0`). Zero,
/// negatives, fractions, and non-numbers are treated as absent.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn positive_rank(obj: &Map<String, Value>, key: &str) -> Option<u32> {
    let value = obj.get(key)?;
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok().filter(|&r| r > 0);
    }
    let f = value.as_f64()?;
    if f >= 1.0 && f.fract() == 0.0 && f <= f64::from(u32::MAX) {
        return Some(f as u32);
    }
    None
}

/// Parses an ISO-8601 timestamp into Unix seconds.
///
/// Accepted forms, in order:
/// - RFC 3339 with an offset or trailing `Z` (`2025-04-24T09:00:00.000Z`)
/// - naive date-time with `T` or space separator, interpreted as UTC
/// - bare date (`2025-04-24`), interpreted as midnight UTC
pub(crate) fn parse_timestamp(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.timestamp());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(naive.and_utc().timestamp());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp())
}

/// Returns the hostname of `url` with a leading `www.` stripped, or an empty
/// string when the URL cannot be parsed or has no host.
pub(crate) fn extract_domain(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return String::new();
    };
    let host = match parsed.host() {
        Some(Host::Domain(domain)) => domain.to_owned(),
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Ipv6(addr)) => addr.to_string(),
        None => return String::new(),
    };
    match host.strip_prefix("www.") {
        Some(rest) => rest.to_owned(),
        None => host,
    }
}

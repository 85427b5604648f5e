//! Provider adapter contract.

use serde_json::Value;
use serpintel_core::NormalizedSerpResult;

use crate::error::AdapterError;

/// Converts one provider's raw SERP records into [`NormalizedSerpResult`]s.
///
/// Implementors supply [`SerpAdapter::normalize`]; everything downstream of
/// an adapter treats all implementations interchangeably.
pub trait SerpAdapter: Send + Sync {
    /// Normalize a single raw provider record.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::InvalidInput`] when `raw` is not shaped like a
    /// record this adapter accepts. Missing or malformed fields inside a
    /// well-shaped record degrade to defaults and never fail.
    fn normalize(&self, raw: &Value) -> Result<NormalizedSerpResult, AdapterError>;

    /// Normalize a whole provider dataset.
    ///
    /// An array is treated as a list of records and normalized element by
    /// element, in order; any other value is normalized as a single record.
    /// Each element gets its own `Result` so one bad record does not discard
    /// the rest.
    fn normalize_dataset(&self, payload: &Value) -> Vec<Result<NormalizedSerpResult, AdapterError>> {
        match payload {
            Value::Array(items) => items.iter().map(|item| self.normalize(item)).collect(),
            other => vec![self.normalize(other)],
        }
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    /// The raw record did not have the JSON shape the adapter accepts.
    #[error("invalid raw SERP record: expected a JSON {expected}, got {found}")]
    InvalidInput {
        expected: &'static str,
        found: &'static str,
    },
}

use serde::{Deserialize, Serialize};

/// The fixed body returned for every request.
///
/// Serializes as `{"Test":true}`. The field name keeps its capitalised
/// wire spelling so load generators can compare bodies byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsePayload {
    #[serde(rename = "Test")]
    pub test: bool,
}

impl ResponsePayload {
    /// Creates the payload with `Test` set to `true`.
    pub fn new() -> Self {
        Self { test: true }
    }
}

impl Default for ResponsePayload {
    fn default() -> Self {
        Self::new()
    }
}

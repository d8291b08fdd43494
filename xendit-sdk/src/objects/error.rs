//! Error body returned by the API on non-2xx responses.

use serde::{Deserialize, Serialize};

/// The two fields every error response body carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error_code: String,
    pub message: String,
}

impl ErrorPayload {
    /// Parse a raw response body into the typed payload and the full JSON
    /// object it came from.
    ///
    /// Returns `None` if the body is not a JSON object with string
    /// `error_code` and `message` fields.
    pub fn parse(body: &str) -> Option<(Self, serde_json::Value)> {
        let raw: serde_json::Value = serde_json::from_str(body).ok()?;
        if !raw.is_object() {
            return None;
        }
        let payload = serde_json::from_value(raw.clone()).ok()?;
        Some((payload, raw))
    }

    /// Render the payload as the JSON object the API would have sent.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "error_code": self.error_code,
            "message": self.message,
        })
    }
}

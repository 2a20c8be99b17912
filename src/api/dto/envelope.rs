//! Uniform response envelope.

use serde::{Deserialize, Serialize};

/// Outcome marker carried by every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Error")]
    Error,
}

/// `{"status":"OK"}` or `{"status":"Error","error":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub status: Status,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_envelope_shape() {
        assert_eq!(
            serde_json::to_value(Envelope::ok()).unwrap(),
            json!({ "status": "OK" })
        );
    }

    #[test]
    fn test_error_envelope_shape() {
        assert_eq!(
            serde_json::to_value(Envelope::error("not found")).unwrap(),
            json!({ "status": "Error", "error": "not found" })
        );
    }
}

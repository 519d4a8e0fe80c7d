use serde_json::Value;
use thiserror::Error;

pub const PAYLOAD_TOO_LARGE_TITLE: &str = "Upload failed";
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str =
    "File size is too large. Please upload a smaller file.";

/// Failure of a single pipeline call. Variants that came from an HTTP
/// response carry the response payload, never the whole response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Session expired: please log in again")]
    SessionExpired(Option<Value>),

    #[error("File size is too large. Please upload a smaller file.")]
    PayloadTooLarge(Option<Value>),

    #[error("Request failed with status {status}{}", describe(.payload))]
    Status { status: u16, payload: Option<Value> },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,

    #[error("No organization selected and no default API base URL configured")]
    NoBaseUrl,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Response payload for errors produced by an HTTP response.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            ApiError::SessionExpired(p) | ApiError::PayloadTooLarge(p) => p.as_ref(),
            ApiError::Status { payload, .. } => payload.as_ref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::SessionExpired(_) => Some(401),
            ApiError::PayloadTooLarge(_) => Some(413),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text suitable for showing to the user: the backend's own message
    /// when it sent one, the error description otherwise.
    pub fn user_message(&self) -> String {
        self.payload()
            .and_then(payload_message)
            .unwrap_or_else(|| self.to_string())
    }
}

/// First human-readable message field found in a backend payload.
pub fn payload_message(payload: &Value) -> Option<String> {
    match payload {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Object(map) => ["message", "detail", "error", "msg"]
            .iter()
            .find_map(|k| map.get(*k).and_then(Value::as_str))
            .map(str::to_string),
        _ => None,
    }
}

/// Whether a 401 payload says the bearer token itself is invalid or expired.
pub fn is_invalid_token_payload(payload: Option<&Value>) -> bool {
    let Some(msg) = payload.and_then(payload_message) else {
        return false;
    };
    let msg = msg.to_lowercase();
    msg.contains("token") && (msg.contains("invalid") || msg.contains("expired"))
}

fn describe(payload: &Option<Value>) -> String {
    payload
        .as_ref()
        .and_then(payload_message)
        .map(|m| format!(": {}", m))
        .unwrap_or_default()
}

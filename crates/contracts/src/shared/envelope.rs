//! Backend response envelope `{status, message, data}` and the error taxonomy
//! of the service layer.
//!
//! Decoding is split from transport: the frontend reads the HTTP status and
//! body text, then hands both to [`decode_response`] / [`decode_list_response`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const STATUS_SUCCESS: &str = "success";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Not authenticated. Please log in again.")]
    MissingToken,

    #[error("Network error: {0}")]
    Network(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("{0}")]
    Rejected(String),

    #[error("Unexpected response: {0}")]
    Malformed(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

impl ApiError {
    /// The session is unusable and the user has to log in again.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            ApiError::MissingToken | ApiError::Http { status: 401, .. }
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

#[derive(Debug, Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Value>,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// User-facing message for a non-2xx response: the body's `message`, else its
/// `error`, else a generic text with the status code.
pub fn error_message_from_body(status: u16, body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    parsed
        .as_ref()
        .and_then(|v| {
            non_blank(v.get("message").and_then(Value::as_str))
                .or_else(|| non_blank(v.get("error").and_then(Value::as_str)))
        })
        .unwrap_or_else(|| format!("Request failed with status {}", status))
}

fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

struct Unwrapped {
    message: Option<String>,
    data: Value,
}

fn unwrap_envelope(status: u16, body: &str) -> Result<Unwrapped, ApiError> {
    if !is_success_status(status) {
        return Err(ApiError::Http {
            status,
            message: error_message_from_body(status, body),
        });
    }

    let envelope: RawEnvelope =
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;

    if envelope.status.as_deref() != Some(STATUS_SUCCESS) {
        let message = non_blank(envelope.message.as_deref())
            .unwrap_or_else(|| "The server did not accept the request".to_string());
        return Err(ApiError::Rejected(message));
    }

    Ok(Unwrapped {
        message: envelope.message,
        data: envelope.data.unwrap_or(Value::Null),
    })
}

/// Decodes `data` of a success envelope into `T`.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let unwrapped = unwrap_envelope(status, body)?;
    serde_json::from_value(unwrapped.data).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Like [`decode_response`] for list endpoints; a missing or `null` `data`
/// is an empty list.
pub fn decode_list_response<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<Vec<T>, ApiError> {
    let unwrapped = unwrap_envelope(status, body)?;
    match unwrapped.data {
        Value::Null => Ok(Vec::new()),
        data => serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string())),
    }
}

/// For create/update/delete calls: only the envelope `message` matters.
pub fn decode_ack(status: u16, body: &str) -> Result<String, ApiError> {
    let unwrapped = unwrap_envelope(status, body)?;
    Ok(unwrapped
        .message
        .unwrap_or_else(|| "Saved successfully".to_string()))
}

/// Caller-visible outcome of a list fetch. `data` is always a vector, empty on
/// failure, so pages can render it without a second branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResult<T> {
    pub success: bool,
    pub message: String,
    pub data: Vec<T>,
}

impl<T> ServiceResult<T> {
    pub fn ok(data: Vec<T>) -> Self {
        Self {
            success: true,
            message: String::new(),
            data,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: Vec::new(),
        }
    }
}

impl<T> From<Result<Vec<T>, ApiError>> for ServiceResult<T> {
    fn from(result: Result<Vec<T>, ApiError>) -> Self {
        match result {
            Ok(data) => ServiceResult::ok(data),
            Err(e) => ServiceResult::failure(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    #[test]
    fn test_success_envelope_yields_data() {
        let body = r#"{"status":"success","message":"ok","data":[{"id":1},{"id":2}]}"#;
        let items: Vec<Item> = decode_list_response(200, body).unwrap();
        assert_eq!(items, vec![Item { id: 1 }, Item { id: 2 }]);

        let single: Item = decode_response(200, r#"{"status":"success","data":{"id":7}}"#).unwrap();
        assert_eq!(single, Item { id: 7 });
    }

    #[test]
    fn test_null_data_is_empty_list() {
        let items: Vec<Item> = decode_list_response(200, r#"{"status":"success","data":null}"#).unwrap();
        assert!(items.is_empty());
        let items: Vec<Item> = decode_list_response(200, r#"{"status":"success"}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_error_status_is_rejected() {
        let err = decode_list_response::<Item>(200, r#"{"status":"error","message":"Dealer not found"}"#)
            .unwrap_err();
        assert_eq!(err, ApiError::Rejected("Dealer not found".to_string()));

        let err = decode_list_response::<Item>(200, r#"{"data":[]}"#).unwrap_err();
        assert!(matches!(err, ApiError::Rejected(_)));
    }

    #[test]
    fn test_http_error_message_sources() {
        let err = decode_list_response::<Item>(400, r#"{"message":"Invalid email"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 400,
                message: "Invalid email".to_string()
            }
        );

        let err = decode_list_response::<Item>(500, r#"{"error":"Internal"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Internal");

        let err = decode_list_response::<Item>(502, "<html>Bad gateway</html>").unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status 502");

        let err = decode_ack(401, "").unwrap_err();
        assert!(err.is_auth());
    }

    #[test]
    fn test_malformed_and_mismatched_bodies() {
        let err = decode_list_response::<Item>(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));

        let err = decode_list_response::<Item>(200, r#"[{"id":1}]"#).unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));

        let err = decode_list_response::<Item>(200, r#"{"status":"success","data":{"id":1}}"#)
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_ack_message() {
        assert_eq!(
            decode_ack(200, r#"{"status":"success","message":"Promotion created"}"#).unwrap(),
            "Promotion created"
        );
        assert_eq!(
            decode_ack(201, r#"{"status":"success"}"#).unwrap(),
            "Saved successfully"
        );
    }

    #[test]
    fn test_failed_fetch_converts_to_empty_failure() {
        let timeout: Result<Vec<Item>, ApiError> =
            Err(ApiError::Network("request timed out".to_string()));
        let result = ServiceResult::from(timeout);
        assert!(!result.success);
        assert!(result.data.is_empty());
        assert_eq!(result.message, "Network error: request timed out");

        let missing: ServiceResult<Item> = Err(ApiError::MissingToken).into();
        assert!(!missing.success);
        assert!(missing.data.is_empty());

        let ok: ServiceResult<Item> = Ok(vec![Item { id: 3 }]).into();
        assert!(ok.success);
        assert_eq!(ok.data.len(), 1);
    }
}

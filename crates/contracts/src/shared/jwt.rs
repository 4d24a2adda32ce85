//! Client-side JWT payload reader.
//!
//! Decodes the middle segment (base64url → JSON) to show who is logged in and
//! to drop obviously expired sessions. The signature is NOT verified; the
//! backend stays the only authority on trust.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum JwtError {
    #[error("Token must have three dot-separated segments")]
    Malformed,

    #[error("Invalid base64url payload: {0}")]
    Base64(String),

    #[error("Invalid payload JSON: {0}")]
    Json(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JwtPayload {
    #[serde(default, rename = "userId", alias = "user_id")]
    pub user_id: Option<Value>,
    #[serde(default)]
    pub sub: Option<Value>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Expiration, seconds since the Unix epoch.
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn claim_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl JwtPayload {
    /// `userId`, falling back to the standard `sub` claim.
    pub fn user_id(&self) -> Option<String> {
        self.user_id
            .as_ref()
            .and_then(claim_as_string)
            .or_else(|| self.sub.as_ref().and_then(claim_as_string))
    }

    /// Tokens without `exp` never expire client-side.
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.exp.map(|exp| exp <= now_secs).unwrap_or(false)
    }
}

pub fn decode_payload(token: &str) -> Result<JwtPayload, JwtError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    if segments.len() != 3 || segments[1].is_empty() {
        return Err(JwtError::Malformed);
    }

    let payload = segments[1].trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| JwtError::Base64(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| JwtError::Json(e.to_string()))
}

/// Current user id straight from the token; the top header shows it.
pub fn user_id_from_token(token: &str) -> Option<String> {
    decode_payload(token).ok().and_then(|p| p.user_id())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload);
        format!("{}.{}.signature", header, body)
    }

    #[test]
    fn test_decode_user_id() {
        let token = token_with(r#"{"userId":17,"role":"DEALER_MANAGER","exp":2000000000}"#);
        let payload = decode_payload(&token).unwrap();
        assert_eq!(payload.user_id(), Some("17".to_string()));
        assert_eq!(payload.role.as_deref(), Some("DEALER_MANAGER"));
        assert!(!payload.is_expired(1_700_000_000));
        assert!(payload.is_expired(2_000_000_000));
        assert_eq!(user_id_from_token(&token), Some("17".to_string()));
    }

    #[test]
    fn test_sub_fallback_and_extra_claims() {
        let token = token_with(r#"{"sub":"u-9","dealerId":3}"#);
        let payload = decode_payload(&token).unwrap();
        assert_eq!(payload.user_id(), Some("u-9".to_string()));
        assert_eq!(payload.extra.get("dealerId"), Some(&Value::from(3)));
        assert!(!payload.is_expired(i64::MAX));
    }

    #[test]
    fn test_padded_payload_is_accepted() {
        let header = URL_SAFE_NO_PAD.encode("{}");
        let body = format!("{}==", URL_SAFE_NO_PAD.encode(r#"{"userId":"a"}"#));
        let token = format!("{}.{}.sig", header, body);
        assert_eq!(user_id_from_token(&token), Some("a".to_string()));
    }

    #[test]
    fn test_rejects_bad_tokens() {
        assert_eq!(decode_payload("abc"), Err(JwtError::Malformed));
        assert_eq!(decode_payload("a..c"), Err(JwtError::Malformed));
        assert!(matches!(decode_payload("a.!!!.c"), Err(JwtError::Base64(_))));
        let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("plain"));
        assert!(matches!(decode_payload(&not_json), Err(JwtError::Json(_))));
        assert_eq!(user_id_from_token("garbage"), None);
    }
}

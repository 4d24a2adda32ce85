//! Fetch adapter for the EVDMS backend.
//!
//! Every call is `POST {api_base}/<scope>/<action>` with a JSON body. The
//! bearer token comes from localStorage and a missing token fails before any
//! request is made. Responses are unwrapped with the envelope decoders from
//! `contracts`, so callers only ever see `Result<T, ApiError>`.

use contracts::shared::envelope::{
    decode_ack, decode_list_response, decode_response, ApiError,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::config::config;
use crate::system::auth::{context, storage};

/// Header that makes ngrok tunnels skip their browser interstitial page.
pub const NGROK_SKIP_HEADER: &str = "ngrok-skip-browser-warning";

/// Base URL for API requests: the configured URL, or the current host with
/// the configured fallback port.
pub fn api_base() -> String {
    let cfg = config();
    let window = match web_sys::window() {
        Some(w) => w,
        None => return cfg.api.base_url.clone(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    cfg.resolve_base_url(&protocol, &hostname)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub fn needs_ngrok_header(base: &str) -> bool {
    base.contains("ngrok")
}

fn bearer_token() -> Result<String, ApiError> {
    storage::get_access_token()
        .filter(|t| !t.trim().is_empty())
        .ok_or(ApiError::MissingToken)
}

/// Sends the request and returns the HTTP status with the raw body.
async fn send<B: Serialize>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<(u16, String), ApiError> {
    let base = api_base();
    let url = join_url(&base, path);
    log::debug!("POST {}", url);

    let mut builder = Request::post(&url).header("Content-Type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }
    if needs_ngrok_header(&base) {
        builder = builder.header(NGROK_SKIP_HEADER, "true");
    }

    let request = builder
        .json(body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    Ok((status, text))
}

fn logged<T>(path: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(e) = &result {
        log::warn!("{} failed: {:?}", path, e);
    }
    result
}

/// A missing token or a 401 means the session is over.
fn ends_session<T>(result: &Result<T, ApiError>) -> bool {
    result.as_ref().err().is_some_and(ApiError::is_auth)
}

fn logged_authorized<T>(path: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    let result = logged(path, result);
    if ends_session(&result) {
        context::expire_session();
    }
    result
}

async fn send_authorized<B: Serialize>(path: &str, body: &B) -> Result<(u16, String), ApiError> {
    let token = bearer_token()?;
    send(path, body, Some(&token)).await
}

/// Authenticated call whose `data` decodes into `T`.
pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let result = send_authorized(path, body)
        .await
        .and_then(|(status, text)| decode_response(status, &text));
    logged_authorized(path, result)
}

/// Authenticated list call; `null` data is an empty list.
pub async fn post_list<B, T>(path: &str, body: &B) -> Result<Vec<T>, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let result = send_authorized(path, body)
        .await
        .and_then(|(status, text)| decode_list_response(status, &text));
    logged_authorized(path, result)
}

/// Authenticated write call; returns the envelope message.
pub async fn post_ack<B: Serialize>(path: &str, body: &B) -> Result<String, ApiError> {
    let result = send_authorized(path, body)
        .await
        .and_then(|(status, text)| decode_ack(status, &text));
    logged_authorized(path, result)
}

/// Call without a bearer token (login).
pub async fn post_public<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let result = send(path, body, None)
        .await
        .and_then(|(status, text)| decode_response(status, &text));
    logged(path, result)
}

/// Pages that still run on sample data log the request they would send.
pub fn log_local_call<B: Serialize>(path: &str, body: &B) {
    let body = serde_json::to_string(body).unwrap_or_else(|e| format!("<{}>", e));
    log::info!("Local only, would POST {}{} {}", api_base(), path, body);
}

/// Empty JSON object body for list endpoints.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NoBody {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8080/", "/evm/promotions/list"),
            "http://localhost:8080/evm/promotions/list"
        );
        assert_eq!(join_url("https://api.x.vn/api", "auth/login"), "https://api.x.vn/api/auth/login");
    }

    #[test]
    fn test_ngrok_header_decision() {
        assert!(needs_ngrok_header("https://1a2b.ngrok-free.app"));
        assert!(!needs_ngrok_header("http://localhost:8080"));
    }

    #[test]
    fn test_only_auth_failures_end_the_session() {
        let unauthorized = decode_list_response::<serde_json::Value>(401, r#"{"message":"Token expired"}"#);
        assert!(ends_session(&unauthorized));
        assert!(ends_session::<()>(&Err(ApiError::MissingToken)));

        let forbidden = decode_list_response::<serde_json::Value>(403, r#"{"message":"Forbidden"}"#);
        assert!(!ends_session(&forbidden));
        assert!(!ends_session::<()>(&Err(ApiError::Network("offline".into()))));
        assert!(!ends_session::<()>(&Ok(())));
    }

    #[test]
    fn test_empty_body_serializes_to_object() {
        assert_eq!(serde_json::to_string(&NoBody::default()).unwrap(), "{}");
    }
}

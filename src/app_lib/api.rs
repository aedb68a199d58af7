//! HTTP helper for form submissions. Every accepted submission becomes
//! exactly one JSON POST against the configured base URL; there is no retry,
//! timeout, or cancellation for these low-stakes auth forms. URL joining and
//! error-body mapping are kept pure so they test without a browser.

use crate::app_lib::errors::AppError;
use serde_json::Value;

/// Shown when a failed response carries no usable `msg` field.
const FALLBACK_MESSAGE: &str = "Request failed. Please try again.";

/// Joins the configured base URL and an endpoint path, tolerating stray
/// slashes on either side.
pub(crate) fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Extracts the server-provided `msg` field from an error body, falling back
/// to a generic message when the body is empty, not JSON, or missing `msg`.
pub(crate) fn server_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("msg")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
}

/// Maps a non-200 response into a server error carrying the best available
/// message.
pub(crate) fn map_failure(status: u16, body: &str) -> AppError {
    AppError::Server {
        status,
        message: server_message(body),
    }
}

#[cfg(target_arch = "wasm32")]
mod fetch {
    use super::{build_url, map_failure};
    use crate::app_lib::{config::AppConfig, errors::AppError};
    use gloo_net::http::Request;
    use serde::{Serialize, de::DeserializeOwned};

    /// Sends one JSON POST to `base_url + path`. Success is exactly HTTP
    /// 200; an empty 200 body decodes to the response type's default.
    pub(crate) async fn post_json<B, T>(path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize,
        T: DeserializeOwned + Default,
    {
        let config = AppConfig::load();
        let url = build_url(&config.api_base_url, path);
        let payload = serde_json::to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?
            .send()
            .await
            .map_err(|err| AppError::Network(format!("Unable to reach the server: {err}")))?;

        if response.status() == 200 {
            let text = response.text().await.unwrap_or_default();
            if text.trim().is_empty() {
                return Ok(T::default());
            }
            serde_json::from_str(&text)
                .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(map_failure(status, &body))
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use fetch::post_json;

//! Network fetching utilities with timeout support.
//!
//! Wraps the browser Fetch API with `Promise.race` based timeouts, JSON
//! encoding/decoding, and bearer-token auth headers read from localStorage.

use js_sys::{Array, Promise};
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::ApiError;
use crate::utils::dom;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// Returns [`RaceResult::TimedOut`] if the timeout fires first and
/// [`RaceResult::Error`] if the promise rejects.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Timeout promise resolves to undefined, which the fetch promise never does.
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);

    match JsFuture::from(Promise::race(&race_array)).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// JSON Requests
// =============================================================================

/// `GET` a URL and parse the JSON response body.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let text = request(url, "GET", None).await?;
    serde_json::from_str(&text).map_err(|e| ApiError::JsonParseError(e.to_string()))
}

/// `POST` a JSON body, ignoring any response body.
pub async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    let json = serde_json::to_string(body).map_err(|e| ApiError::JsonParseError(e.to_string()))?;
    request(url, "POST", Some(&json)).await?;
    Ok(())
}

/// `PUT` a JSON body, ignoring any response body.
pub async fn put_json<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    let json = serde_json::to_string(body).map_err(|e| ApiError::JsonParseError(e.to_string()))?;
    request(url, "PUT", Some(&json)).await?;
    Ok(())
}

/// Perform an HTTP request with timeout and return the response text.
///
/// Attaches the stored access token as a bearer Authorization header when one
/// is present; the backend answers 401 otherwise and the caller surfaces it.
async fn request(url: &str, method: &str, json_body: Option<&str>) -> Result<String, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = json_body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| ApiError::RequestCreationFailed)?;
    let headers = request.headers();
    let _ = headers.set("Accept", "application/json");
    if json_body.is_some() {
        let _ = headers.set("Content-Type", "application/json");
    }
    if let Some(token) = dom::access_token() {
        let _ = headers.set("Authorization", &format!("Bearer {}", token));
    }

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(ApiError::Timeout),
        RaceResult::Error(msg) => Err(ApiError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| ApiError::InvalidContent)?;

            if !resp.ok() {
                return Err(ApiError::HttpError(resp.status()));
            }

            let text = JsFuture::from(resp.text().map_err(|_| ApiError::ResponseReadFailed)?)
                .await
                .map_err(|_| ApiError::ResponseReadFailed)?;

            text.as_string().ok_or(ApiError::InvalidContent)
        }
    }
}

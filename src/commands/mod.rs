//! Server API Wrappers
//!
//! Frontend bindings to the admin HTTP endpoints, organized by domain.

mod search;
mod status;
mod user;

use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::config::ApiConfig;

// Re-export all public items
pub use search::*;
pub use status::*;
pub use user::*;

/// Failure of a single API call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Request never produced a response
    #[error("transport error: {0}")]
    Transport(String),
    /// Server answered and reported failure
    #[error("rejected by server: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),
    /// Response body could not be decoded
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// User-facing texts for each failure kind of one operation
#[derive(Debug, Clone, Copy)]
pub struct ErrorMessages {
    pub transport: &'static str,
    pub rejected: &'static str,
    pub malformed: &'static str,
}

impl ApiError {
    /// Server-provided message when present, otherwise the fallback for the kind
    pub fn user_message(&self, messages: &ErrorMessages) -> String {
        match self {
            ApiError::Transport(_) => messages.transport.to_string(),
            ApiError::Rejected(Some(msg)) if !msg.trim().is_empty() => msg.clone(),
            ApiError::Rejected(_) => messages.rejected.to_string(),
            ApiError::Malformed(_) => messages.malformed.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

/// `{error: string}` body of a failed call
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Error carried by a non-2xx body
fn rejection(body: &str) -> ApiError {
    match decode::<ErrorBody>(body) {
        Ok(parsed) => ApiError::Rejected(parsed.error),
        Err(e) => e,
    }
}

async fn post_json<B: Serialize + ?Sized>(config: &ApiConfig, path: &str, body: &B) -> Result<Response, ApiError> {
    let request = Request::post(&config.url(path))
        .header("Content-Type", "application/json")
        .json(body)?;
    Ok(request.send().await?)
}

async fn post_empty(config: &ApiConfig, path: &str) -> Result<Response, ApiError> {
    Ok(Request::post(&config.url(path))
        .header("Content-Type", "application/json")
        .send()
        .await?)
}

//! Status Commands
//!
//! Updating the status of a single request.

use serde::{Deserialize, Serialize};

use super::{decode, post_json, ApiError, ErrorMessages};
use crate::config::ApiConfig;

pub const UPDATE_STATUS_MESSAGES: ErrorMessages = ErrorMessages {
    transport: "Ошибка при соединении с сервером",
    rejected: "Ошибка при обновлении статуса",
    malformed: "Ошибка при соединении с сервером",
};

// ========================
// Wire Structs
// ========================

#[derive(Serialize)]
struct UpdateStatusArgs<'a> {
    id: u32,
    status: &'a str,
}

#[derive(Debug, Deserialize)]
struct UpdateStatusResponse {
    success: bool,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Status to display after a response to a request for `requested`
fn interpret(body: &str, requested: &str) -> Result<String, ApiError> {
    let response: UpdateStatusResponse = decode(body)?;
    if response.success {
        Ok(response.status.unwrap_or_else(|| requested.to_string()))
    } else {
        Err(ApiError::Rejected(response.error))
    }
}

// ========================
// Commands
// ========================

/// `POST /api/update_status`; returns the status confirmed by the server
pub async fn update_status(config: &ApiConfig, id: u32, status: &str) -> Result<String, ApiError> {
    let response = post_json(config, "/api/update_status", &UpdateStatusArgs { id, status }).await?;
    let body = response.text().await?;
    interpret(&body, status)
}

//! User Commands
//!
//! Admin actions on registered users.

use super::{post_empty, rejection, ApiError, ErrorMessages};
use crate::config::ApiConfig;

pub const DELETE_USER_MESSAGES: ErrorMessages = ErrorMessages {
    transport: "Произошла ошибка при удалении пользователя.",
    rejected: "Не удалось удалить пользователя.",
    malformed: "Произошла ошибка на сервере.",
};

/// Outcome of a delete given the HTTP status and body
fn interpret(ok: bool, body: &str) -> Result<(), ApiError> {
    if ok {
        Ok(())
    } else {
        Err(rejection(body))
    }
}

/// `POST /delete_user/{id}` with no body
pub async fn delete_user(config: &ApiConfig, id: u32) -> Result<(), ApiError> {
    let response = post_empty(config, &format!("/delete_user/{}", id)).await?;
    let ok = response.ok();
    let body = if ok { String::new() } else { response.text().await.unwrap_or_default() };
    interpret(ok, &body)
}

//! Search Commands
//!
//! Server-side filtering of the request list.

use serde::{Deserialize, Serialize};

use super::{decode, post_json, rejection, ApiError, ErrorMessages};
use crate::config::ApiConfig;
use crate::filter::FilterCriteria;
use crate::models::Zayavka;

pub const SEARCH_MESSAGES: ErrorMessages = ErrorMessages {
    transport: "Ошибка при соединении с сервером",
    rejected: "Ошибка при фильтрации заявок",
    malformed: "Ошибка при соединении с сервером",
};

// ========================
// Wire Structs
// ========================

#[derive(Serialize)]
struct SearchArgs<'a> {
    #[serde(rename = "type")]
    zayavka_type: &'a str,
    status: &'a str,
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    zayavki: Vec<Zayavka>,
}

fn interpret(ok: bool, body: &str) -> Result<Vec<Zayavka>, ApiError> {
    if ok {
        decode::<SearchResponse>(body).map(|r| r.zayavki)
    } else {
        Err(rejection(body))
    }
}

// ========================
// Commands
// ========================

/// `POST /admin` with the raw input values
pub async fn search_zayavki(config: &ApiConfig, criteria: &FilterCriteria) -> Result<Vec<Zayavka>, ApiError> {
    let args = SearchArgs {
        zayavka_type: &criteria.zayavka_type,
        status: &criteria.status,
        query: &criteria.query,
    };
    let response = post_json(config, "/admin", &args).await?;
    let ok = response.ok();
    let body = response.text().await?;
    interpret(ok, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_use_type_key() {
        let json = serde_json::to_value(SearchArgs { zayavka_type: "Заявка", status: "", query: "иван" }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "Заявка", "status": "", "query": "иван"}));
    }

    #[test]
    fn test_success_returns_items() {
        let body = r#"{"zayavki":[
            {"id":1,"type":"Заявка","description":"a","created_at":"2024-01-01","status":"ожидает","file":"f.pdf","urgent":false},
            {"id":2,"type":"Жалоба","description":"b","created_at":"2024-01-02","status":"принято","urgent":true}
        ]}"#;
        let items = interpret(true, body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].file.as_deref(), Some("f.pdf"));
        assert!(items[1].urgent);
    }

    #[test]
    fn test_failure_message() {
        let err = interpret(false, r#"{"error":"bad filter"}"#).unwrap_err();
        assert_eq!(err.user_message(&SEARCH_MESSAGES), "bad filter");
        let err = interpret(false, r#"{}"#).unwrap_err();
        assert_eq!(err.user_message(&SEARCH_MESSAGES), "Ошибка при фильтрации заявок");
    }

    #[test]
    fn test_ok_with_bad_body_is_connection_error() {
        let err = interpret(true, r#"{"items":[]}"#).unwrap_err();
        assert_eq!(err.user_message(&SEARCH_MESSAGES), "Ошибка при соединении с сервером");
    }
}

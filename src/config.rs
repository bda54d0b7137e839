//! Page Configuration
//!
//! Values the server embeds into the host page: an optional API prefix
//! (`<meta name="api-base">`), the page kind (`<body data-page>`) and the
//! initial data set (`<script type="application/json" id="admin-data">`).

use serde::Deserialize;

use crate::models::{User, Zayavka};

const API_BASE_SELECTOR: &str = "meta[name=\"api-base\"]";
const BOOTSTRAP_ELEMENT_ID: &str = "admin-data";

/// Which page the bundle is mounted on (`<body data-page="...">`)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageKind {
    /// Login / registration
    Auth,
    #[default]
    Admin,
}

impl PageKind {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("auth") | Some("login") => PageKind::Auth,
            _ => PageKind::Admin,
        }
    }

    pub fn from_page() -> Self {
        let value = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|body| body.get_attribute("data-page"));
        Self::parse(value.as_deref())
    }
}

/// Where API calls are sent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base: String,
}

impl ApiConfig {
    pub fn new(base: &str) -> Self {
        Self { base: base.trim().trim_end_matches('/').to_string() }
    }

    /// Read the prefix from the host page; same origin when absent
    pub fn from_page() -> Self {
        let base = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(API_BASE_SELECTOR).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"));
        match base {
            Some(base) => Self::new(&base),
            None => Self::default(),
        }
    }

    /// Absolute or origin-relative URL for an endpoint path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }
}

/// Initial page data
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Bootstrap {
    #[serde(default)]
    pub zayavki: Vec<Zayavka>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Bootstrap {
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(text)
    }

    /// Embedded data, or `None` when the page carries none
    pub fn from_page() -> Option<Self> {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(BOOTSTRAP_ELEMENT_ID))
            .and_then(|el| el.text_content())?;
        match Self::parse(&text) {
            Ok(data) => Some(data),
            Err(e) => {
                leptos::logging::error!("[CONFIG] invalid #{} payload: {}", BOOTSTRAP_ELEMENT_ID, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_same_origin() {
        assert_eq!(ApiConfig::default().url("/admin"), "/admin");
    }

    #[test]
    fn test_base_prefix_is_normalized() {
        let config = ApiConfig::new(" https://example.org/app/ ");
        assert_eq!(config.url("/api/update_status"), "https://example.org/app/api/update_status");
        assert_eq!(config.url("delete_user/3"), "https://example.org/app/delete_user/3");
    }

    #[test]
    fn test_page_kind() {
        assert_eq!(PageKind::parse(Some("auth")), PageKind::Auth);
        assert_eq!(PageKind::parse(Some(" login ")), PageKind::Auth);
        assert_eq!(PageKind::parse(Some("admin")), PageKind::Admin);
        assert_eq!(PageKind::parse(None), PageKind::Admin);
    }

    #[test]
    fn test_bootstrap_parse() {
        let data = Bootstrap::parse(
            r#"{"zayavki":[{"id":1,"type":"Заявка","description":"d","status":"ожидает","username":"ivan","full_name":"Иван"}],
                "users":[{"id":5,"username":"ivan","email":"i@x.ru","role":"employee"}]}"#,
        )
        .unwrap();
        assert_eq!(data.zayavki[0].full_name, "Иван");
        assert_eq!(data.users[0].id, 5);
        assert!(data.users[0].full_name.is_none());
    }

    #[test]
    fn test_bootstrap_empty_and_partial() {
        assert_eq!(Bootstrap::parse("  ").unwrap(), Bootstrap::default());
        assert!(Bootstrap::parse(r#"{"users":[]}"#).unwrap().zayavki.is_empty());
        assert!(Bootstrap::parse("{").is_err());
    }
}

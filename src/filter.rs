//! Filter Engine
//!
//! Client-side visibility of request cards. Type and status apply live;
//! the text query only takes effect once applied and stays applied until
//! the next apply.

use crate::models::Zayavka;

/// Searchable attributes of one card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardAttributes<'a> {
    pub zayavka_type: &'a str,
    pub status: &'a str,
    pub description: &'a str,
    pub username: &'a str,
    pub full_name: &'a str,
}

impl Zayavka {
    pub fn attributes(&self) -> CardAttributes<'_> {
        CardAttributes {
            zayavka_type: &self.zayavka_type,
            status: &self.status,
            description: &self.description,
            username: &self.username,
            full_name: &self.full_name,
        }
    }
}

/// Active criteria; empty string means unconstrained
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub zayavka_type: String,
    pub status: String,
    pub query: String,
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Whether a card with `attrs` is visible under `criteria`
pub fn compute_visibility(criteria: &FilterCriteria, attrs: &CardAttributes<'_>) -> bool {
    let zayavka_type = normalize(&criteria.zayavka_type);
    let status = normalize(&criteria.status);
    let query = normalize(&criteria.query);

    let matches_type = zayavka_type.is_empty() || normalize(attrs.zayavka_type) == zayavka_type;
    let matches_status = status.is_empty() || normalize(attrs.status) == status;
    let matches_query = query.is_empty()
        || [attrs.description, attrs.username, attrs.full_name]
            .iter()
            .any(|field| normalize(field).contains(&query));

    matches_type && matches_status && matches_query
}

/// Filter component state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    zayavka_type: String,
    status: String,
    applied_query: String,
    /// Query the server already matched the current list against
    server_query: Option<String>,
}

impl FilterState {
    pub fn set_type(&mut self, zayavka_type: impl Into<String>) {
        self.zayavka_type = zayavka_type.into();
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Commit the text query; an empty query clears it
    pub fn apply_query(&mut self, query: impl Into<String>) {
        self.applied_query = query.into();
    }

    pub fn zayavka_type(&self) -> &str {
        &self.zayavka_type
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn applied_query(&self) -> &str {
        &self.applied_query
    }

    /// The list now holds the server's answer for `query`
    pub fn mark_server_filtered(&mut self, query: &str) {
        self.server_query = Some(normalize(query));
    }

    pub fn criteria(&self) -> FilterCriteria {
        // search results lack submitter fields; the server matched them already
        let server_matched = self.server_query.as_deref() == Some(normalize(&self.applied_query).as_str());
        FilterCriteria {
            zayavka_type: self.zayavka_type.clone(),
            status: self.status.clone(),
            query: if server_matched { String::new() } else { self.applied_query.clone() },
        }
    }

    pub fn matches(&self, attrs: &CardAttributes<'_>) -> bool {
        compute_visibility(&self.criteria(), attrs)
    }

    pub fn visible_count(&self, items: &[Zayavka]) -> usize {
        let criteria = self.criteria();
        items
            .iter()
            .filter(|z| compute_visibility(&criteria, &z.attributes()))
            .count()
    }
}

/// Type select options: union of `known` and `extra`, deduplicated
/// case-insensitively, first-seen casing, sorted
pub fn type_options<'a>(known: &'a [String], extra: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<(String, String)> = Vec::new();
    let candidates = known.iter().map(String::as_str).chain(extra);
    for candidate in candidates {
        let key = normalize(candidate);
        if key.is_empty() || seen.iter().any(|(k, _)| *k == key) {
            continue;
        }
        seen.push((key, candidate.trim().to_string()));
    }
    seen.sort_by(|a, b| a.0.cmp(&b.0));
    seen.into_iter().map(|(_, label)| label).collect()
}

//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::Bootstrap;
use crate::dispatch::{self, AuthView, UiEvent};
use crate::filter::{type_options, FilterState};
use crate::models::{User, Zayavka};

/// Admin page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    /// Requests currently on the page
    pub zayavki: Vec<Zayavka>,
    /// Registered users (users tab)
    pub users: Vec<User>,
    /// Live type/status and the applied text query
    pub filter: FilterState,
    /// Login or registration panel
    pub auth_view: AuthView,
    /// Number of the latest list refresh; older responses are dropped
    pub refresh_generation: u64,
    /// Every request type seen since load, for the type select
    pub known_types: Vec<String>,
}

impl AdminState {
    pub fn from_bootstrap(data: Bootstrap) -> Self {
        let mut state = Self {
            users: data.users,
            ..Default::default()
        };
        state.remember_types(&data.zayavki);
        state.zayavki = data.zayavki;
        state
    }

    /// Merge the types of `items` into `known_types`
    pub fn remember_types(&mut self, items: &[Zayavka]) {
        self.known_types = type_options(&self.known_types, items.iter().map(|z| z.zayavka_type.as_str()));
    }

    /// Start a list refresh and return its number
    pub fn begin_refresh(&mut self) -> u64 {
        self.refresh_generation += 1;
        self.refresh_generation
    }
}

/// Type alias for the store
pub type AdminStore = Store<AdminState>;

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run an event through the dispatch table
pub fn store_dispatch(store: &AdminStore, event: UiEvent) {
    store.update(|state| dispatch::handle(state, event));
}

/// Start a list refresh
pub fn store_begin_refresh(store: &AdminStore) -> u64 {
    store.try_update(|state| state.begin_refresh()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zayavka(id: u32, zayavka_type: &str) -> Zayavka {
        Zayavka {
            id,
            zayavka_type: zayavka_type.to_string(),
            description: String::new(),
            status: "ожидает".to_string(),
            created_at: String::new(),
            file: None,
            urgent: false,
            username: String::new(),
            full_name: String::new(),
        }
    }

    #[test]
    fn test_bootstrap_collects_types() {
        let state = AdminState::from_bootstrap(Bootstrap {
            zayavki: vec![zayavka(1, "Заявка"), zayavka(2, "Жалоба"), zayavka(3, "заявка")],
            users: Vec::new(),
        });
        assert_eq!(state.zayavki.len(), 3);
        assert_eq!(state.known_types, vec!["Жалоба".to_string(), "Заявка".to_string()]);
    }

    #[test]
    fn test_remember_types_is_a_union() {
        let mut state = AdminState::default();
        state.remember_types(&[zayavka(1, "Заявка")]);
        state.remember_types(&[zayavka(2, "Жалоба")]);
        state.remember_types(&[]);
        assert_eq!(state.known_types, vec!["Жалоба".to_string(), "Заявка".to_string()]);
    }
}

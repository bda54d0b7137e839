//! Event Dispatch
//!
//! Every user-visible state change goes through [`handle`]. Components only
//! translate DOM events (and finished network calls) into [`UiEvent`]s.

use crate::models::Zayavka;
use crate::store::AdminState;

/// Which auth panel is shown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthView {
    #[default]
    Login,
    Register,
}

impl AuthView {
    /// Class of the `.container` element; `active` reveals registration
    pub fn container_class(self) -> &'static str {
        match self {
            AuthView::Login => "container",
            AuthView::Register => "container active",
        }
    }
}

/// Dispatch table entries
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    ShowRegister,
    ShowLogin,
    TypeChanged(String),
    StatusChanged(String),
    /// Text query committed with the apply button
    QueryApplied(String),
    /// Server list arrived for refresh number `generation`, searched with `query`
    ListReplaced { generation: u64, query: String, zayavki: Vec<Zayavka> },
    StatusUpdated { id: u32, status: String },
    UserDeleted(u32),
}

pub fn handle(state: &mut AdminState, event: UiEvent) {
    match event {
        UiEvent::ShowRegister => state.auth_view = AuthView::Register,
        UiEvent::ShowLogin => state.auth_view = AuthView::Login,
        UiEvent::TypeChanged(value) => state.filter.set_type(value),
        UiEvent::StatusChanged(value) => state.filter.set_status(value),
        UiEvent::QueryApplied(value) => state.filter.apply_query(value),
        UiEvent::ListReplaced { generation, query, mut zayavki } => {
            // a newer refresh has been started since this one
            if generation != state.refresh_generation {
                return;
            }
            keep_submitter_fields(&state.zayavki, &mut zayavki);
            state.remember_types(&zayavki);
            state.filter.mark_server_filtered(&query);
            state.zayavki = zayavki;
        }
        UiEvent::StatusUpdated { id, status } => {
            if let Some(z) = state.zayavki.iter_mut().find(|z| z.id == id) {
                z.status = status;
            }
        }
        UiEvent::UserDeleted(id) => {
            if let Some(pos) = state.users.iter().position(|u| u.id == id) {
                state.users.remove(pos);
            }
        }
    }
}

/// `/admin` search results omit username and full name; reuse the ones
/// already known for the same id
fn keep_submitter_fields(previous: &[Zayavka], incoming: &mut [Zayavka]) {
    for item in incoming.iter_mut() {
        let Some(old) = previous.iter().find(|z| z.id == item.id) else {
            continue;
        };
        if item.username.is_empty() {
            item.username = old.username.clone();
        }
        if item.full_name.is_empty() {
            item.full_name = old.full_name.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    fn zayavka(id: u32, status: &str) -> Zayavka {
        Zayavka {
            id,
            zayavka_type: "Заявка".to_string(),
            description: format!("#{id}"),
            status: status.to_string(),
            created_at: String::new(),
            file: None,
            urgent: false,
            username: String::new(),
            full_name: String::new(),
        }
    }

    fn replaced(generation: u64, query: &str, zayavki: Vec<Zayavka>) -> UiEvent {
        UiEvent::ListReplaced { generation, query: query.to_string(), zayavki }
    }

    fn user(id: u32) -> User {
        User {
            id,
            username: format!("user{id}"),
            email: String::new(),
            role: "employee".to_string(),
            full_name: None,
        }
    }

    #[test]
    fn test_auth_view_toggle() {
        let mut state = AdminState::default();
        assert_eq!(state.auth_view.container_class(), "container");
        handle(&mut state, UiEvent::ShowRegister);
        assert_eq!(state.auth_view.container_class(), "container active");
        handle(&mut state, UiEvent::ShowRegister);
        assert_eq!(state.auth_view, AuthView::Register);
        handle(&mut state, UiEvent::ShowLogin);
        assert_eq!(state.auth_view, AuthView::Login);
    }

    #[test]
    fn test_filter_events_update_criteria() {
        let mut state = AdminState::default();
        handle(&mut state, UiEvent::TypeChanged("Жалоба".into()));
        handle(&mut state, UiEvent::StatusChanged("ожидает".into()));
        handle(&mut state, UiEvent::QueryApplied("иван".into()));
        let criteria = state.filter.criteria();
        assert_eq!(criteria.zayavka_type, "Жалоба");
        assert_eq!(criteria.status, "ожидает");
        assert_eq!(criteria.query, "иван");
    }

    #[test]
    fn test_status_update_touches_only_target() {
        let mut state = AdminState::default();
        state.zayavki = vec![zayavka(1, "ожидает"), zayavka(2, "ожидает")];
        handle(&mut state, UiEvent::StatusUpdated { id: 2, status: "сделано".into() });
        assert_eq!(state.zayavki[0].status, "ожидает");
        assert_eq!(state.zayavki[1].status, "сделано");

        handle(&mut state, UiEvent::StatusUpdated { id: 99, status: "сделано".into() });
        assert_eq!(state.zayavki[0].status, "ожидает");
    }

    #[test]
    fn test_delete_removes_exactly_one_row() {
        let mut state = AdminState::default();
        state.users = vec![user(1), user(2), user(3)];
        handle(&mut state, UiEvent::UserDeleted(2));
        assert_eq!(state.users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 3]);
        handle(&mut state, UiEvent::UserDeleted(42));
        assert_eq!(state.users.len(), 2);
    }

    #[test]
    fn test_stale_list_is_ignored() {
        let mut state = AdminState::default();
        state.zayavki = vec![zayavka(1, "ожидает")];
        let first = state.begin_refresh();
        let second = state.begin_refresh();

        handle(&mut state, replaced(second, "", vec![zayavka(3, "принято")]));
        handle(&mut state, replaced(first, "", vec![zayavka(2, "принято")]));
        assert_eq!(state.zayavki.iter().map(|z| z.id).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_empty_refresh_clears_list() {
        let mut state = AdminState::default();
        state.zayavki = vec![zayavka(1, "ожидает")];
        let generation = state.begin_refresh();
        handle(&mut state, replaced(generation, "", Vec::new()));
        assert!(state.zayavki.is_empty());
    }

    #[test]
    fn test_search_by_username_survives_refresh() {
        let mut state = AdminState::default();
        let mut known = zayavka(1, "ожидает");
        known.username = "ivan".to_string();
        known.full_name = "Иван Петров".to_string();
        state.zayavki = vec![known, zayavka(2, "ожидает")];

        // "Найти" commits the draft, then the server answers without user fields
        handle(&mut state, UiEvent::QueryApplied("ivan".into()));
        let generation = state.begin_refresh();
        handle(&mut state, replaced(generation, "ivan", vec![zayavka(1, "ожидает"), zayavka(7, "ожидает")]));

        assert_eq!(state.zayavki[0].username, "ivan");
        assert_eq!(state.zayavki[0].full_name, "Иван Петров");
        assert_eq!(state.filter.visible_count(&state.zayavki), 2);

        // applying another query filters the server list locally again
        handle(&mut state, UiEvent::QueryApplied("петров".into()));
        assert_eq!(state.filter.visible_count(&state.zayavki), 1);
    }

    #[test]
    fn test_narrowing_refresh_keeps_type_options() {
        let mut state = AdminState::default();
        let mut complaint = zayavka(2, "ожидает");
        complaint.zayavka_type = "Жалоба".to_string();
        let generation = state.begin_refresh();
        handle(&mut state, replaced(generation, "", vec![zayavka(1, "ожидает"), complaint.clone()]));
        assert_eq!(state.known_types, vec!["Жалоба".to_string(), "Заявка".to_string()]);

        handle(&mut state, UiEvent::TypeChanged("Жалоба".into()));
        let generation = state.begin_refresh();
        handle(&mut state, replaced(generation, "", vec![complaint]));
        assert_eq!(state.zayavki.len(), 1);
        assert_eq!(state.known_types, vec!["Жалоба".to_string(), "Заявка".to_string()]);
    }
}

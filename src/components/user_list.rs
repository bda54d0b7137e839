//! User List Component
//!
//! Registered users with an immediate delete action (no confirmation).

use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, DELETE_USER_MESSAGES};
use crate::context::use_app_context;
use crate::dispatch::UiEvent;
use crate::models::User;
use crate::store::{store_dispatch, use_admin_store, AdminStateStoreFields};

#[component]
pub fn UserList() -> impl IntoView {
    let store = use_admin_store();

    view! {
        <table class="user-table">
            <thead>
                <tr>
                    <th>"Логин"</th>
                    <th>"ФИО"</th>
                    <th>"Email"</th>
                    <th>"Роль"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || store.users().get()
                    key=|user| user.id
                    children=move |user| view! { <UserRow user=user /> }
                />
            </tbody>
        </table>
        <Show when=move || store.users().with(|users| users.is_empty())>
            <p class="empty-list">"Пользователей нет"</p>
        </Show>
    }
}

#[component]
fn UserRow(user: User) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();
    let id = user.id;
    let display_name = user.display_name().to_string();

    let on_delete = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let config = ctx.config();
        spawn_local(async move {
            match commands::delete_user(&config, id).await {
                Ok(()) => {
                    log!("[USERS] deleted #{}", id);
                    store_dispatch(&store, UiEvent::UserDeleted(id));
                }
                Err(e) => {
                    error!("[USERS] delete of #{} failed: {}", id, e);
                    ctx.notify(e.user_message(&DELETE_USER_MESSAGES));
                }
            }
        });
    };

    view! {
        <tr id=format!("user-{}", id)>
            <td>{user.username}</td>
            <td>{display_name}</td>
            <td>{user.email}</td>
            <td>{user.role}</td>
            <td>
                <button class="btn delete-user-btn" data-user-id=id.to_string() on:click=on_delete>
                    "Удалить"
                </button>
            </td>
        </tr>
    }
}

//! Request Card Component
//!
//! One request with its status actions. Hidden, not removed, when the
//! filter excludes it.

use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cards::CardModel;
use crate::commands::{self, UPDATE_STATUS_MESSAGES};
use crate::context::use_app_context;
use crate::dispatch::UiEvent;
use crate::models::STATUS_ACTIONS;
use crate::store::{store_dispatch, use_admin_store, AdminStateStoreFields};

#[component]
pub fn ZayavkaCard(card: CardModel) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();
    let (pending, set_pending) = signal(false);

    let id = card.id;
    let filter_card = card.clone();
    let visible = move || store.filter().with(|f| f.matches(&filter_card.attributes()));

    let update = move |status: &'static str| {
        if pending.get_untracked() {
            return;
        }
        set_pending.set(true);
        let config = ctx.config();
        spawn_local(async move {
            match commands::update_status(&config, id, status).await {
                Ok(confirmed) => {
                    log!("[STATUS] #{} -> {}", id, confirmed);
                    store_dispatch(&store, UiEvent::StatusUpdated { id, status: confirmed });
                }
                Err(e) => {
                    error!("[STATUS] update of #{} failed: {}", id, e);
                    ctx.notify(e.user_message(&UPDATE_STATUS_MESSAGES));
                }
            }
            // the card is re-keyed when its status changes; this one may be gone
            let _ = set_pending.try_set(false);
        });
    };

    view! {
        <div
            class=card.class
            style:display=move || if visible() { "block" } else { "none" }
            data-id=id.to_string()
            data-type=card.data_type
            data-status=card.data_status
            data-description=card.data_description
            data-username=card.data_username
            data-fullname=card.data_fullname
        >
            <h3>{card.title}</h3>
            <p>{card.description}</p>
            <p><strong>"Дата: "</strong>{card.created_at}</p>
            <p>
                <strong>"Статус: "</strong>
                <span class="status" style:color=card.status_color>{card.status}</span>
            </p>
            <p>
                <strong>"Файл: "</strong>
                {match card.file_href {
                    Some(href) => view! { <a href=href target="_blank">"Скачать"</a> }.into_any(),
                    None => view! { <span>"Нет файла"</span> }.into_any(),
                }}
            </p>
            <div class="card-actions">
                {STATUS_ACTIONS.iter().map(|(status, color)| {
                    let status: &'static str = *status;
                    view! {
                        <button
                            class="btn styled-btn update-status"
                            data-status=status
                            style:background=*color
                            disabled=move || pending.get()
                            on:click=move |_| update(status)
                        >
                            {status}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

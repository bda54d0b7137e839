//! Filter Bar Component
//!
//! Type and status selects filter the list as soon as they change. The text
//! query is only applied by "Применить". "Найти" applies it too and asks the
//! server for a fresh list with the current input values.

use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, SEARCH_MESSAGES};
use crate::context::{use_app_context, AppContext};
use crate::dispatch::UiEvent;
use crate::filter::{type_options, FilterCriteria};
use crate::models::STATUSES;
use crate::store::{store_begin_refresh, store_dispatch, use_admin_store, AdminStateStoreFields, AdminStore};

/// Replace the list with the server's answer for `criteria`
pub fn refresh_list(ctx: AppContext, store: AdminStore, criteria: FilterCriteria) {
    let generation = store_begin_refresh(&store);
    let config = ctx.config();
    spawn_local(async move {
        match commands::search_zayavki(&config, &criteria).await {
            Ok(zayavki) => {
                log!("[ADMIN] refresh #{} returned {} requests", generation, zayavki.len());
                let query = criteria.query;
                store_dispatch(&store, UiEvent::ListReplaced { generation, query, zayavki });
            }
            Err(e) => {
                error!("[ADMIN] refresh #{} failed: {}", generation, e);
                ctx.notify(e.user_message(&SEARCH_MESSAGES));
            }
        }
    });
}

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();
    let (query_draft, set_query_draft) = signal(String::new());

    // the selected type stays listed even if no loaded request has it
    let types = Memo::new(move |_| {
        store
            .known_types()
            .with(|known| store.filter().with(|f| type_options(known, [f.zayavka_type()])))
    });

    let on_type_change = move |ev: web_sys::Event| {
        store_dispatch(&store, UiEvent::TypeChanged(event_target_value(&ev)));
    };
    let on_status_change = move |ev: web_sys::Event| {
        store_dispatch(&store, UiEvent::StatusChanged(event_target_value(&ev)));
    };
    let apply_query = move |_| {
        store_dispatch(&store, UiEvent::QueryApplied(query_draft.get_untracked()));
    };

    let refresh = move |_| {
        let query = query_draft.get_untracked();
        store_dispatch(&store, UiEvent::QueryApplied(query.clone()));
        let criteria = store.filter().with_untracked(|f| FilterCriteria {
            zayavka_type: f.zayavka_type().to_string(),
            status: f.status().to_string(),
            query,
        });
        refresh_list(ctx, store, criteria);
    };

    view! {
        <div class="filters">
            <select
                id="filter-type"
                prop:value=move || store.filter().with(|f| f.zayavka_type().to_string())
                on:change=on_type_change
            >
                <option value="">"Все типы"</option>
                <For
                    each=move || types.get()
                    key=|t| t.clone()
                    children=move |t| {
                        let label = t.clone();
                        view! { <option value=t>{label}</option> }
                    }
                />
            </select>

            <select
                id="filter-status"
                prop:value=move || store.filter().with(|f| f.status().to_string())
                on:change=on_status_change
            >
                <option value="">"Все статусы"</option>
                {STATUSES.iter().map(|(value, label)| view! {
                    <option value=*value>{*label}</option>
                }).collect_view()}
            </select>

            <input
                type="text"
                id="filter-query"
                placeholder="Описание, логин или ФИО"
                prop:value=move || query_draft.get()
                on:input=move |ev| set_query_draft.set(event_target_value(&ev))
            />
            <button type="button" id="apply-filters" class="btn styled-btn" on:click=apply_query>
                "Применить"
            </button>
            <button type="button" id="filter-submit" class="btn styled-btn" on:click=refresh>
                "Найти"
            </button>
            {move || store.filter().with(|f| {
                let applied = f.applied_query().trim().to_string();
                (!applied.is_empty()).then(|| view! {
                    <span class="applied-query">"Поиск: «" {applied} "»"</span>
                })
            })}
        </div>
    }
}

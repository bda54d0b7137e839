//! Request List Component
//!
//! Renders every request card and the "no results" placeholder.

use leptos::prelude::*;

use crate::cards;
use crate::components::ZayavkaCard;
use crate::store::{use_admin_store, AdminStateStoreFields};

#[component]
pub fn ZayavkaList() -> impl IntoView {
    let store = use_admin_store();

    let visible_count = Memo::new(move |_| {
        store.zayavki().with(|items| store.filter().with(|f| f.visible_count(items)))
    });

    view! {
        <div id="request-list">
            <div id="requests-container">
                <For
                    each=move || store.zayavki().with(|items| cards::render_list(items))
                    key=|card| (card.id, card.status.clone())
                    children=move |card| view! { <ZayavkaCard card=card /> }
                />
            </div>
            <p
                id="no-requests"
                style:display=move || if visible_count.get() == 0 { "block" } else { "none" }
            >
                "Заявок не найдено"
            </p>
        </div>
    }
}

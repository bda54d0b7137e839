//! Notice Banner Component
//!
//! Shows the latest failure message from [`AppContext::notify`].

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.notice.get().map(|notice| view! {
            <div class="notice" role="alert">
                <span class="notice-text">{notice.text}</span>
                <button class="notice-close" on:click=move |_| ctx.dismiss()>"×"</button>
            </div>
        })}
    }
}

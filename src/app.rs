//! Zayavki Admin App
//!
//! Root component: theme switch, notices, and either the auth forms or the
//! admin page depending on the host page.

use leptos::logging::log;
use leptos::prelude::*;
use leptos_theme::ThemeToggle;
use reactive_stores::Store;

use crate::components::{
    refresh_list, AdminTab, AuthPanel, FilterBar, NoticeBanner, PageTabs, UserList, ZayavkaList,
};
use crate::config::{ApiConfig, Bootstrap, PageKind};
use crate::context::{use_app_context, AppContext};
use crate::filter::FilterCriteria;
use crate::store::{use_admin_store, AdminState};

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_page();
    let bootstrap = Bootstrap::from_page();
    let load_on_mount = bootstrap.is_none();
    let state = AdminState::from_bootstrap(bootstrap.unwrap_or_default());
    log!("[APP] starting with {} requests, {} users", state.zayavki.len(), state.users.len());

    // Provide context to all children
    provide_context(Store::new(state));
    provide_context(AppContext::new(config));

    let page = PageKind::from_page();

    view! {
        <header class="app-header">
            <ThemeToggle />
        </header>
        <NoticeBanner />
        {match page {
            PageKind::Auth => view! { <AuthPanel /> }.into_any(),
            PageKind::Admin => view! { <AdminPage load_on_mount=load_on_mount /> }.into_any(),
        }}
    }
}

/// Request list and user management
#[component]
fn AdminPage(load_on_mount: bool) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();
    let (tab, set_tab) = signal(AdminTab::Requests);

    // No embedded data: fetch the unfiltered list once
    if load_on_mount {
        refresh_list(ctx, store, FilterCriteria::default());
    }

    view! {
        <main class="admin-page">
            <PageTabs current=tab set_current=set_tab />
            {move || match tab.get() {
                AdminTab::Requests => view! {
                    <section class="requests">
                        <FilterBar />
                        <ZayavkaList />
                    </section>
                }.into_any(),
                AdminTab::Users => view! {
                    <section class="users">
                        <UserList />
                    </section>
                }.into_any(),
            }}
        </main>
    }
}

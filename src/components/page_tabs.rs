//! Page Tabs Component
//!
//! Switches the admin page between the request list and the user list.

use leptos::prelude::*;

/// Admin page sections
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminTab {
    Requests,
    Users,
}

impl AdminTab {
    pub const ALL: [AdminTab; 2] = [AdminTab::Requests, AdminTab::Users];

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Requests => "Заявки",
            AdminTab::Users => "Пользователи",
        }
    }
}

#[component]
pub fn PageTabs(current: ReadSignal<AdminTab>, set_current: WriteSignal<AdminTab>) -> impl IntoView {
    view! {
        <nav class="page-tabs">
            {AdminTab::ALL.into_iter().map(|tab| {
                let tab_class = move || if current.get() == tab { "page-tab active" } else { "page-tab" };
                view! {
                    <button class=tab_class on:click=move |_| set_current.set(tab)>
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}

//! UI Components
//!
//! Leptos components of the admin page.

mod auth_panel;
mod filter_bar;
mod notice_banner;
mod page_tabs;
mod user_list;
mod zayavka_card;
mod zayavka_list;

pub use auth_panel::AuthPanel;
pub use filter_bar::{refresh_list, FilterBar};
pub use notice_banner::NoticeBanner;
pub use page_tabs::{AdminTab, PageTabs};
pub use user_list::UserList;
pub use zayavka_card::ZayavkaCard;
pub use zayavka_list::ZayavkaList;

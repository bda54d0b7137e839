//! Zayavki Admin Frontend Entry Point

mod app;
mod cards;
mod commands;
mod components;
mod config;
mod context;
mod dispatch;
mod filter;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::ApiConfig;

/// How long a notice stays on screen
const NOTICE_TIMEOUT_MS: u32 = 5_000;

/// User-visible message about a failed action
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub text: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Message banner - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Message banner - write
    set_notice: WriteSignal<Option<Notice>>,
    /// Endpoint prefix resolved at startup
    config: StoredValue<ApiConfig>,
    /// Last issued notice id
    notice_seq: StoredValue<u32>,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        let (notice, set_notice) = signal(None::<Notice>);
        Self {
            notice,
            set_notice,
            config: StoredValue::new(config),
            notice_seq: StoredValue::new(0),
        }
    }

    pub fn config(&self) -> ApiConfig {
        self.config.get_value()
    }

    /// Show a message; it clears itself unless replaced meanwhile
    pub fn notify(&self, text: impl Into<String>) {
        self.notice_seq.update_value(|seq| *seq += 1);
        let id = self.notice_seq.get_value();
        self.set_notice.set(Some(Notice { id, text: text.into() }));

        let notice = self.notice;
        let set_notice = self.set_notice;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            if notice.get_untracked().map(|n| n.id) == Some(id) {
                set_notice.set(None);
            }
        });
    }

    pub fn dismiss(&self) {
        self.set_notice.set(None);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

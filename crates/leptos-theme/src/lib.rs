//! Leptos Theme Utilities
//!
//! Light/dark theme preference persisted in browser local storage.
//! The preference is read once on mount and written on every toggle.

use leptos::prelude::*;

/// Local storage key holding the preference
pub const STORAGE_KEY: &str = "theme";

/// Class added to `<body>` while the dark theme is active
pub const DARK_CLASS: &str = "dark-mode";

/// Two-valued theme preference
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored representation
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Theme selected by a checkbox state (checked = dark)
    pub fn from_checked(checked: bool) -> Self {
        if checked { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Key-value storage for the preference
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`; silently no-ops when storage is unavailable
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.set_item(key, value) {
                leptos::logging::warn!("[THEME] failed to save {}={}: {:?}", key, value, e);
            }
        }
    }
}

/// Read the saved preference (missing or unknown → light)
pub fn load_theme(store: &impl PreferenceStore) -> Theme {
    store
        .get(STORAGE_KEY)
        .and_then(|value| Theme::parse(&value))
        .unwrap_or_default()
}

/// Persist the preference
pub fn save_theme(store: &impl PreferenceStore, theme: Theme) {
    store.set(STORAGE_KEY, theme.as_str());
}

/// Add or remove the dark class on `<body>`
pub fn apply_theme(theme: Theme) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let classes = body.class_list();
    let result = if theme.is_dark() {
        classes.add_1(DARK_CLASS)
    } else {
        classes.remove_1(DARK_CLASS)
    };
    if let Err(e) = result {
        leptos::logging::warn!("[THEME] failed to apply {}: {:?}", theme.as_str(), e);
    }
}

/// Checkbox bound to the persisted theme
///
/// Renders `#theme-toggle-checkbox`. Checked means dark.
#[component]
pub fn ThemeToggle(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let initial = load_theme(&LocalStorage);
    apply_theme(initial);
    let (theme, set_theme) = signal(initial);

    let on_change = move |ev: web_sys::Event| {
        let next = Theme::from_checked(event_target_checked(&ev));
        save_theme(&LocalStorage, next);
        apply_theme(next);
        set_theme.set(next);
        leptos::logging::log!("[THEME] switched to {}", next.as_str());
    };

    view! {
        <label class="theme-toggle">
            <input
                type="checkbox"
                id="theme-toggle-checkbox"
                prop:checked=move || theme.get().is_dark()
                on:change=on_change
            />
            <span class="theme-toggle-label">{label.unwrap_or_else(|| "Тёмная тема".to_string())}</span>
        </label>
    }
}

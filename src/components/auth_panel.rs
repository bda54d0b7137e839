//! Auth Panel Component
//!
//! Login and registration forms sharing one container; the `active` class
//! on the container reveals the registration side.

use leptos::prelude::*;

use crate::dispatch::UiEvent;
use crate::store::{store_dispatch, use_admin_store, AdminStateStoreFields};

/// Role options for self-registration: (value, label)
const ROLES: &[(&str, &str)] = &[
    ("employee", "Сотрудник"),
    ("admin", "Администратор"),
];

#[component]
pub fn AuthPanel() -> impl IntoView {
    let store = use_admin_store();
    let show_register = move |_| store_dispatch(&store, UiEvent::ShowRegister);
    let show_login = move |_| store_dispatch(&store, UiEvent::ShowLogin);

    view! {
        <div class=move || store.auth_view().get().container_class()>
            <div class="form-box login">
                <form action="/login" method="post">
                    <h1>"Вход"</h1>
                    <input type="text" name="username" placeholder="Логин" required />
                    <input type="password" name="password" placeholder="Пароль" required />
                    <button type="submit" class="btn">"Войти"</button>
                </form>
            </div>

            <div class="form-box register">
                <form action="/register" method="post" enctype="multipart/form-data">
                    <h1>"Регистрация"</h1>
                    <input type="text" name="username" placeholder="Логин" required />
                    <input type="email" name="email" placeholder="Email" required />
                    <input type="password" name="password" placeholder="Пароль" required />
                    <input type="text" name="full_name" placeholder="ФИО" />
                    <select name="role">
                        {ROLES.iter().map(|(value, label)| view! {
                            <option value=*value>{*label}</option>
                        }).collect_view()}
                    </select>
                    <button type="submit" class="btn">"Зарегистрироваться"</button>
                </form>
            </div>

            <div class="toggle-box">
                <div class="toggle-panel toggle-left">
                    <p>"Нет аккаунта?"</p>
                    <button type="button" class="btn register-btn" on:click=show_register>"Регистрация"</button>
                </div>
                <div class="toggle-panel toggle-right">
                    <p>"Уже есть аккаунт?"</p>
                    <button type="button" class="btn login-btn" on:click=show_login>"Вход"</button>
                </div>
            </div>
        </div>
    }
}

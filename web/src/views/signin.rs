//! Signin page view: identifier (username or email) + password.

use api::{forms, ApiError};
use dioxus::prelude::*;
use ui::{use_session, use_sheet_client};

/// Signin page component.
#[component]
pub fn SignIn() -> Element {
    let client = use_sheet_client();
    let mut session = use_session();
    let nav = use_navigator();

    let mut who = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let handle_signin = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let ident = who();
            let secret = password();
            if let Err(msg) = forms::validate_signin(&ident, &secret) {
                error.set(Some(msg));
                return;
            }

            busy.set(true);
            let fetched = client.list_users().await;
            busy.set(false);

            let users = match fetched {
                Ok(users) => users,
                Err(ApiError::Unconfigured) => {
                    error.set(Some("No storage endpoint configured".to_string()));
                    return;
                }
                Err(e) => {
                    tracing::error!("user list fetch failed: {e}");
                    error.set(Some("Failed to fetch users".to_string()));
                    return;
                }
            };

            let found = forms::verify_signin(&users, &ident, &secret).cloned();
            session.write().users = users;

            who.set(String::new());
            password.set(String::new());

            match found {
                Some(user) => {
                    session.write().current = Some(user);
                    nav.push(crate::Route::Dashboard {});
                }
                None => error.set(Some("Sign in failed".to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "page",
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; padding: 2rem; background: #ffffff;",

            h1 {
                style: "margin-bottom: 0.5rem; color: #37352f; font-weight: 700; font-size: 1.75rem;",
                "Welcome back"
            }

            p {
                style: "margin-bottom: 2rem; color: #787774; font-size: 0.9375rem;",
                "Sign in with your username or email"
            }

            form {
                onsubmit: handle_signin,
                style: "display: flex; flex-direction: column; gap: 0.75rem; width: 100%; max-width: 320px;",

                if let Some(err) = error() {
                    div {
                        style: "padding: 0.625rem; border-radius: 4px; font-size: 0.8125rem; background: #fef2f2; border: 1px solid #fecaca; color: #dc2626;",
                        "{err}"
                    }
                }

                input {
                    style: "padding: 0.5rem 0.75rem; border: 1px solid #d3d1cb; border-radius: 4px; font-size: 0.9375rem;",
                    r#type: "text",
                    placeholder: "Username or email",
                    value: who(),
                    oninput: move |evt| who.set(evt.value()),
                }
                input {
                    style: "padding: 0.5rem 0.75rem; border: 1px solid #d3d1cb; border-radius: 4px; font-size: 0.9375rem;",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                button {
                    style: "padding: 0.625rem 1.25rem; border: none; border-radius: 4px; background-color: #4f46e5; color: white; font-size: 0.9375rem; font-weight: 500; cursor: pointer;",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Checking…" } else { "Sign in" }
                }
            }

            p {
                style: "margin-top: 1.5rem; font-size: 0.875rem; color: #787774;",
                "New here? "
                a { href: "/", "Back to sign up" }
            }
        }
    }
}

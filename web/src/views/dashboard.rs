//! Profile dashboard for the signed-in user.

use api::profile;
use dioxus::prelude::*;
use ui::{use_session, Avatar};

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "—"
    } else {
        value
    }
}

/// Dashboard page component. Redirects to signup when nobody is signed in.
#[component]
pub fn Dashboard() -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let Some(user) = session().current else {
        nav.replace(crate::Route::SignUp {});
        return rsx! {};
    };

    let name = user.display_name().to_string();
    let username = user.username.clone();
    let email = user.email.clone();
    let phone = or_dash(&user.phone).to_string();
    let dob = or_dash(&user.dob).to_string();
    let created = or_dash(&user.created).to_string();

    let filename = profile::profile_filename(&user);
    let download_href = profile::profile_download_href(&user).unwrap_or_else(|e| {
        tracing::error!("profile export failed: {e}");
        String::new()
    });

    let sign_out = move |_| {
        session.write().current = None;
        nav.replace(crate::Route::SignUp {});
    };

    rsx! {
        div {
            class: "page",
            style: "display: flex; flex-direction: column; align-items: center; min-height: 100vh; padding: 3rem 2rem; background: #ffffff;",

            Avatar { user: user.clone() }

            h1 {
                style: "margin: 1rem 0 0.25rem; color: #37352f; font-weight: 700; font-size: 1.5rem;",
                "{name}"
            }
            p {
                style: "margin-bottom: 2rem; color: #787774; font-size: 0.9375rem;",
                "@{username}"
            }

            dl {
                style: "width: 100%; max-width: 420px; display: grid; grid-template-columns: auto 1fr; gap: 0.5rem 1.5rem; font-size: 0.9375rem;",
                dt { style: "color: #787774;", "Email" }
                dd { "{email}" }
                dt { style: "color: #787774;", "Phone" }
                dd { "{phone}" }
                dt { style: "color: #787774;", "Date of birth" }
                dd { "{dob}" }
                dt { style: "color: #787774;", "Member since" }
                dd { "{created}" }
            }

            div {
                style: "margin-top: 2.5rem; display: flex; gap: 0.75rem;",
                a {
                    style: "padding: 0.625rem 1.25rem; border-radius: 4px; background-color: #4f46e5; color: white; font-size: 0.9375rem; text-decoration: none;",
                    href: "{download_href}",
                    download: "{filename}",
                    "Download profile"
                }
                button {
                    style: "padding: 0.625rem 1.25rem; border: 1px solid #d3d1cb; border-radius: 4px; background: white; color: #37352f; font-size: 0.9375rem; cursor: pointer;",
                    onclick: sign_out,
                    "Sign out"
                }
            }
        }

        style {
            r#"
            .avatar {{
                width: 96px;
                height: 96px;
                border-radius: 50%;
                object-fit: cover;
                border: 2px solid #e7e5e0;
            }}
            "#
        }
    }
}

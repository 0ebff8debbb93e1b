//! Signup page view: the full registration form with avatar upload.

use api::{forms, forms::SignupForm, resize, ApiError};
use dioxus::prelude::*;
use ui::{use_session, use_sheet_client};

/// Signup page component.
#[component]
pub fn SignUp() -> Element {
    let client = use_sheet_client();
    let mut session = use_session();

    let mut fullname = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut dob = use_signal(String::new);
    let mut gender = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut terms = use_signal(|| false);
    let mut avatar_file = use_signal(|| Option::<(String, Vec<u8>)>::None);

    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_avatar = move |evt: FormEvent| {
        spawn(async move {
            if let Some(file_engine) = evt.files() {
                if let Some(name) = file_engine.files().first().cloned() {
                    if let Some(bytes) = file_engine.read_file(&name).await {
                        avatar_file.set(Some((name, bytes)));
                    }
                }
            }
        });
    };

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            notice.set(None);

            let form = SignupForm {
                fullname: fullname(),
                username: username(),
                email: email(),
                password: password(),
                confirm: confirm(),
                phone: phone(),
                dob: dob(),
                gender: gender(),
                address: address(),
                terms: terms(),
            };

            let cached = session();
            if let Err(msg) = forms::validate_signup(&form, &cached.users, client.is_configured())
            {
                error.set(Some(msg));
                return;
            }

            let avatar = match avatar_file() {
                Some((name, bytes)) => {
                    match resize::resize_to_data_url(&bytes, resize::MAX_AVATAR_DIM) {
                        Ok(data_url) => data_url,
                        Err(e) => {
                            tracing::warn!("avatar resize failed, falling back to raw encoding: {e}");
                            resize::raw_data_url(&bytes, &name)
                        }
                    }
                }
                None => String::new(),
            };

            let record = forms::build_record(&form, avatar);

            saving.set(true);
            let result = client.create_user(&record).await;
            saving.set(false);

            match result {
                Ok(()) => {
                    // Refresh the cached list from the authoritative store.
                    match client.list_users().await {
                        Ok(users) => session.write().users = users,
                        Err(e) => tracing::warn!("user list refresh failed: {e}"),
                    }
                    notice.set(Some("Registered and saved to the sheet".to_string()));

                    fullname.set(String::new());
                    username.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    confirm.set(String::new());
                    phone.set(String::new());
                    dob.set(String::new());
                    gender.set(String::new());
                    address.set(String::new());
                    terms.set(false);
                    avatar_file.set(None);
                }
                Err(ApiError::UsernameExists) => {
                    error.set(Some("Username already exists (remote)".to_string()));
                }
                Err(ApiError::EmailExists) => {
                    error.set(Some("Email already registered (remote)".to_string()));
                }
                Err(e) => {
                    tracing::error!("signup failed: {e}");
                    error.set(Some(format!("Failed to save: {e}")));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page",
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; padding: 2rem; background: #ffffff;",

            h1 {
                style: "margin-bottom: 0.5rem; color: #37352f; font-weight: 700; font-size: 1.75rem;",
                "Create Account"
            }

            p {
                style: "margin-bottom: 2rem; color: #787774; font-size: 0.9375rem;",
                "Sign up — your profile is saved to the shared sheet"
            }

            form {
                onsubmit: handle_signup,
                style: "display: flex; flex-direction: column; gap: 0.75rem; width: 100%; max-width: 320px;",

                if let Some(err) = error() {
                    div { class: "banner banner-error", "{err}" }
                }
                if let Some(msg) = notice() {
                    div { class: "banner banner-ok", "{msg}" }
                }

                input {
                    class: "field",
                    r#type: "text",
                    placeholder: "Full name",
                    value: fullname(),
                    oninput: move |evt| fullname.set(evt.value()),
                }
                input {
                    class: "field",
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt| username.set(evt.value()),
                }
                input {
                    class: "field",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    class: "field",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }
                input {
                    class: "field",
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm(),
                    oninput: move |evt| confirm.set(evt.value()),
                }
                input {
                    class: "field",
                    r#type: "tel",
                    placeholder: "Phone (optional)",
                    value: phone(),
                    oninput: move |evt| phone.set(evt.value()),
                }
                input {
                    class: "field",
                    r#type: "date",
                    value: dob(),
                    oninput: move |evt| dob.set(evt.value()),
                }
                select {
                    class: "field",
                    value: gender(),
                    oninput: move |evt| gender.set(evt.value()),
                    option { value: "", "Gender (optional)" }
                    option { value: "Female", "Female" }
                    option { value: "Male", "Male" }
                    option { value: "Other", "Other" }
                }
                input {
                    class: "field",
                    r#type: "text",
                    placeholder: "Address (optional)",
                    value: address(),
                    oninput: move |evt| address.set(evt.value()),
                }

                label {
                    style: "font-size: 0.8125rem; color: #787774;",
                    "Avatar (optional)"
                    input {
                        r#type: "file",
                        accept: "image/*",
                        onchange: handle_avatar,
                    }
                }

                label {
                    style: "display: flex; gap: 0.5rem; align-items: center; font-size: 0.8125rem; color: #37352f;",
                    input {
                        r#type: "checkbox",
                        checked: terms(),
                        oninput: move |evt| terms.set(evt.checked()),
                    }
                    "I accept the Terms & Conditions"
                }

                button {
                    class: "submit",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving…" } else { "Sign up" }
                }
            }

            p {
                style: "margin-top: 1.5rem; font-size: 0.875rem; color: #787774;",
                "Already have an account? "
                a { href: "/signin", "Sign in" }
            }
        }

        style { {STYLE} }
    }
}

const STYLE: &str = r#"
.field {
    padding: 0.5rem 0.75rem;
    border: 1px solid #d3d1cb;
    border-radius: 4px;
    font-size: 0.9375rem;
}
.submit {
    padding: 0.625rem 1.25rem;
    border: none;
    border-radius: 4px;
    background-color: #4f46e5;
    color: white;
    font-size: 0.9375rem;
    font-weight: 500;
    cursor: pointer;
}
.submit:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}
.banner {
    padding: 0.625rem;
    border-radius: 4px;
    font-size: 0.8125rem;
}
.banner-error {
    background: #fef2f2;
    border: 1px solid #fecaca;
    color: #dc2626;
}
.banner-ok {
    background: #f0fdf4;
    border: 1px solid #bbf7d0;
    color: #16a34a;
}
"#;

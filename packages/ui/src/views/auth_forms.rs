//! Login and registration forms.
//!
//! Both end with a full session (token and user written together) and land
//! on `/dashboard`.

use api::models::{RegisterPayload, SIGNUP_CHOICES};
use dioxus::prelude::*;

use crate::components::{ErrorBanner, PageHeader};
use crate::state::{use_app, use_services};

#[component]
pub fn LoginView() -> Element {
    let app = use_app();
    let services = use_services();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let services = services.clone();
        spawn(async move {
            error.set(None);
            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            match services.api.sign_in(&e, &p).await {
                Ok(user) => {
                    app.sync_user(&services, Some(user));
                    nav.push("/dashboard");
                }
                Err(err) => {
                    tracing::warn!(error = %err, "login failed");
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "page auth-page",
            PageHeader { title: "Welcome back", subtitle: "Log in to your GymUnity account." }
            form {
                class: "card auth-form",
                onsubmit: handle_login,
                if let Some(err) = error() {
                    ErrorBanner { message: err }
                }
                label {
                    "Email"
                    input {
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label {
                    "Password"
                    input {
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Log in" }
                }
                p {
                    class: "muted small",
                    "No account yet? "
                    Link { to: "/register", "Create one" }
                }
            }
        }
    }
}

#[component]
pub fn RegisterView() -> Element {
    let app = use_app();
    let services = use_services();
    let nav = use_navigator();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| "member".to_string());
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let services = services.clone();
        spawn(async move {
            error.set(None);
            let payload = RegisterPayload::from_form(
                &first_name(),
                &last_name(),
                &email(),
                &password(),
                &role(),
            );
            if payload.name.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if payload.email.is_empty() || !payload.email.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if payload.password.is_empty() {
                error.set(Some("Password is required".to_string()));
                return;
            }

            loading.set(true);
            match services.api.sign_up(&payload).await {
                Ok(user) => {
                    app.sync_user(&services, Some(user));
                    nav.push("/dashboard");
                }
                Err(err) => {
                    tracing::warn!(error = %err, "registration failed");
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "page auth-page",
            PageHeader { title: "Apply now", subtitle: "Create your GymUnity account." }
            form {
                class: "card auth-form",
                onsubmit: handle_register,
                if let Some(err) = error() {
                    ErrorBanner { message: err }
                }
                div {
                    class: "form-row",
                    label {
                        "First name"
                        input { value: "{first_name}", oninput: move |evt| first_name.set(evt.value()) }
                    }
                    label {
                        "Last name"
                        input { value: "{last_name}", oninput: move |evt| last_name.set(evt.value()) }
                    }
                }
                label {
                    "Email"
                    input {
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label {
                    "Password"
                    input {
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                label {
                    "I am a"
                    select {
                        onchange: move |evt| role.set(evt.value()),
                        for (value, label) in SIGNUP_CHOICES.iter().copied() {
                            option { key: "{value}", value: "{value}", selected: role() == value, "{label}" }
                        }
                    }
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Create account" }
                }
                p {
                    class: "muted small",
                    "Already registered? "
                    Link { to: "/login", "Log in" }
                }
            }
        }
    }
}

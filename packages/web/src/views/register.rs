//! Registration page view with email/password form.

use dioxus::prelude::*;
use ui::{use_app, use_signed_in_redirect};

use crate::Route;

const MIN_PASSWORD_LEN: usize = 6;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let app = use_app();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_signed_in_redirect(Route::Dashboard {});

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let app = app.clone();
        spawn(async move {
            error.set(None);

            let e = email();
            let p = password();

            if p != confirm_password() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }
            if p.chars().count() < MIN_PASSWORD_LEN {
                error.set(Some(format!(
                    "Password must be at least {MIN_PASSWORD_LEN} characters"
                )));
                return;
            }

            loading.set(true);
            match app.client.register(&e, &p).await {
                Ok(auth) => {
                    if let Err(e) = app.session.save(&auth.token, &auth.user) {
                        tracing::error!("Failed to store session: {}", e);
                        loading.set(false);
                        error.set(Some(e.to_string()));
                        return;
                    }
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::error!("Registration failed: {}", e);
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page page--centered",

            div {
                class: "card",
                h1 { class: "card-title", "Create account" }

                form {
                    class: "form",
                    onsubmit: handle_register,

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            required: true,
                            disabled: loading(),
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            required: true,
                            disabled: loading(),
                            placeholder: "At least {MIN_PASSWORD_LEN} characters",
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "confirm-password", "Confirm password" }
                        input {
                            id: "confirm-password",
                            r#type: "password",
                            required: true,
                            disabled: loading(),
                            value: confirm_password(),
                            oninput: move |evt| confirm_password.set(evt.value()),
                        }
                    }

                    button {
                        class: "button button--primary button--block",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Sign up" }
                    }
                }

                p {
                    class: "card-footer",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}

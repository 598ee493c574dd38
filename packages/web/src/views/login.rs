//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::{use_app, use_signed_in_redirect};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let app = use_app();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_signed_in_redirect(Route::Dashboard {});

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let app = app.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            match app.client.login(&email(), &password()).await {
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
                    tracing::error!("Login failed: {}", e);
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
                h1 { class: "card-title", "Sign in" }

                form {
                    class: "form",
                    onsubmit: handle_login,

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
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }

                    button {
                        class: "button button--primary button--block",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }

                p {
                    class: "card-footer",
                    "No account yet? "
                    Link { to: Route::Register {}, "Create one" }
                }
            }
        }
    }
}

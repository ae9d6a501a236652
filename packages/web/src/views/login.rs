//! Login page view with email/password form.

use api::{Field, SignInDraft};
use dioxus::prelude::*;
use ui::components::{FormAlert, TextField};
use ui::{use_client, use_form_errors, use_session};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let client = use_client();
    let session = use_session();
    let nav = use_navigator();

    let mut draft = use_signal(SignInDraft::default);
    let mut errors = use_form_errors();
    let mut failure = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        failure.set(None);

        let request = match draft.read().validate() {
            Ok(request) => request,
            Err(found) => {
                errors.set(found);
                return;
            }
        };

        let client = client.clone();
        let session = session.clone();
        loading.set(true);
        spawn(async move {
            match client.sign_in(&request).await {
                Ok(reply) => {
                    session.set(&reply.token);
                    tracing::debug!("Signed in");
                    nav.push(Route::Home {});
                }
                Err(e) => {
                    tracing::warn!("Sign-in failed: {}", e);
                    failure.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    };

    let form = draft();

    rsx! {
        document::Title { "Login" }

        div {
            class: "auth-page",

            div {
                class: "auth-card",

                h2 { class: "auth-title", "Login" }

                form {
                    class: "auth-form",
                    onsubmit: handle_login,

                    if let Some(message) = failure() {
                        FormAlert { message }
                    }

                    TextField {
                        id: "email",
                        label: "Email",
                        kind: "email",
                        placeholder: "Enter your email",
                        value: form.email,
                        error: errors.read().get(Field::Email),
                        oninput: move |value: String| draft.write().email = value,
                    }

                    TextField {
                        id: "password",
                        label: "Password",
                        kind: "password",
                        placeholder: "Enter your password",
                        value: form.password,
                        error: errors.read().get(Field::Password),
                        oninput: move |value: String| draft.write().password = value,
                    }

                    button {
                        class: "btn btn-primary auth-submit",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Logging in..." } else { "Login" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}

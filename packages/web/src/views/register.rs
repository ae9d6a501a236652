//! Registration page view.

use api::{Field, SignUpDraft};
use dioxus::prelude::*;
use ui::components::{FormAlert, TextField};
use ui::{use_client, use_form_errors};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let client = use_client();
    let nav = use_navigator();

    let mut draft = use_signal(SignUpDraft::default);
    let mut errors = use_form_errors();
    let mut failure = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
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
        loading.set(true);
        spawn(async move {
            match client.sign_up(&request).await {
                Ok(_) => {
                    tracing::debug!("Registered new account");
                    draft.set(SignUpDraft::default());
                    nav.push(Route::Login {});
                }
                Err(e) => {
                    tracing::warn!("Registration failed: {}", e);
                    failure.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    };

    let form = draft();
    let field_error = move |field: Field| errors.read().get(field);

    rsx! {
        document::Title { "Register" }

        div {
            class: "auth-page",

            div {
                class: "auth-card",

                h2 { class: "auth-title", "Register" }

                form {
                    class: "auth-form",
                    onsubmit: handle_register,

                    if let Some(message) = failure() {
                        FormAlert { message }
                    }

                    TextField {
                        id: "name",
                        label: "Name",
                        placeholder: "Enter your name",
                        value: form.name,
                        error: field_error(Field::Name),
                        oninput: move |value: String| draft.write().name = value,
                    }

                    TextField {
                        id: "email",
                        label: "Email",
                        kind: "email",
                        placeholder: "Enter your email",
                        value: form.email,
                        error: field_error(Field::Email),
                        oninput: move |value: String| draft.write().email = value,
                    }

                    TextField {
                        id: "password",
                        label: "Password",
                        kind: "password",
                        placeholder: "Enter your password",
                        value: form.password,
                        error: field_error(Field::Password),
                        oninput: move |value: String| draft.write().password = value,
                    }

                    TextField {
                        id: "age",
                        label: "Age",
                        kind: "number",
                        placeholder: "Enter your age",
                        value: form.age,
                        error: field_error(Field::Age),
                        oninput: move |value: String| draft.write().age = value,
                    }

                    TextField {
                        id: "phone",
                        label: "Phone",
                        kind: "tel",
                        placeholder: "Enter your phone number",
                        value: form.phone,
                        error: field_error(Field::Phone),
                        oninput: move |value: String| draft.write().phone = value,
                    }

                    button {
                        class: "btn btn-primary auth-submit",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Registering..." } else { "Register" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Login" }
                }
            }
        }
    }
}

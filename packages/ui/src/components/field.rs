use dioxus::prelude::*;

/// Labelled input with an optional validation message underneath.
#[component]
pub fn TextField(
    id: String,
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "text".to_string())] kind: String,
    #[props(default)] placeholder: String,
    #[props(default)] error: Option<&'static str>,
) -> Element {
    let input_class = if error.is_some() {
        "field-input field-input--error"
    } else {
        "field-input"
    };

    rsx! {
        div {
            class: "field",
            label { class: "field-label", r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                class: input_class,
                r#type: "{kind}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            if let Some(message) = error {
                FieldError { message: message.to_string() }
            }
        }
    }
}

#[component]
pub fn FieldError(message: String) -> Element {
    rsx! {
        p { class: "field-error", "{message}" }
    }
}

/// Form-level message, e.g. a server rejection.
#[component]
pub fn FormAlert(message: String) -> Element {
    rsx! {
        div { class: "form-alert", role: "alert", "{message}" }
    }
}

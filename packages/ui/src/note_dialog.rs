use api::NoteDraft;
use dioxus::prelude::*;

use crate::components::ModalOverlay;

/// Modal form for adding a note or editing an existing one.
#[component]
pub fn NoteDialog(
    /// Prefilled title and content; empty when adding.
    initial: NoteDraft,
    on_save: EventHandler<NoteDraft>,
    on_cancel: EventHandler<()>,
    #[props(default)] editing: bool,
    #[props(default)] busy: bool,
) -> Element {
    let mut title = use_signal(|| initial.title.clone());
    let mut content = use_signal(|| initial.content.clone());

    let draft = NoteDraft::new(title(), content());
    let can_save = !busy && draft.is_complete();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = NoteDraft::new(title(), content());
        if !draft.is_complete() {
            return;
        }
        on_save.call(draft);
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            h2 {
                class: "modal-title",
                if editing { "Edit Note" } else { "Add a New Note" }
            }
            form {
                class: "note-form",
                onsubmit: handle_submit,
                div {
                    class: "field",
                    label { class: "field-label", r#for: "note-title", "Title" }
                    input {
                        id: "note-title",
                        class: "field-input",
                        r#type: "text",
                        placeholder: "Enter note title",
                        required: true,
                        value: title(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }
                }
                div {
                    class: "field",
                    label { class: "field-label", r#for: "note-content", "Content" }
                    textarea {
                        id: "note-content",
                        class: "field-input",
                        rows: "4",
                        placeholder: "Enter note content",
                        required: true,
                        value: content(),
                        oninput: move |evt: FormEvent| content.set(evt.value()),
                    }
                }
                div {
                    class: "note-form-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: !can_save,
                        "Save"
                    }
                }
            }
        }
    }
}

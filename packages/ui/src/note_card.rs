use api::Note;
use dioxus::prelude::*;

/// One note in the grid, with its Update and Delete actions.
#[component]
pub fn NoteCard(
    note: Note,
    on_edit: EventHandler<Note>,
    on_delete: EventHandler<String>,
    #[props(default)] disabled: bool,
) -> Element {
    let edit_note = note.clone();
    let delete_id = note.id.clone();

    rsx! {
        article {
            class: "note-card",
            div {
                class: "note-card-section",
                h3 { "Title :" }
                p { class: "note-card-title", "{note.title}" }
            }
            div {
                class: "note-card-section",
                h3 { "Content :" }
                p { class: "note-card-content", "{note.content}" }
            }
            div {
                class: "note-card-actions",
                button {
                    class: "btn btn-update",
                    disabled: disabled,
                    onclick: move |evt: Event<MouseData>| {
                        evt.stop_propagation();
                        on_edit.call(edit_note.clone());
                    },
                    "Update"
                }
                button {
                    class: "btn btn-delete",
                    disabled: disabled,
                    onclick: move |evt: Event<MouseData>| {
                        evt.stop_propagation();
                        on_delete.call(delete_id.clone());
                    },
                    "Delete"
                }
            }
        }
    }
}

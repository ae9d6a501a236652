//! Notes grid with the add/edit dialog.

use api::{Note, NoteDraft};
use dioxus::prelude::*;
use ui::components::FormAlert;
use ui::{use_notes, use_session, Mutation, NoteCard, NoteDialog};

use crate::Route;

/// What the note dialog is doing, if it is open.
#[derive(Clone, Debug, PartialEq)]
enum Editing {
    New,
    Existing(Note),
}

#[component]
pub fn Home() -> Element {
    let notes = use_notes();
    let session = use_session();
    let nav = use_navigator();
    let mut editing = use_signal(|| Option::<Editing>::None);

    // A rejected token ends the session
    use_effect(move || {
        if notes.view().read().session_rejected() {
            tracing::info!("Session rejected, signing out");
            session.clear();
            nav.replace(Route::Login {});
        }
    });

    // Close the dialog once its save has landed
    let mut was_saving = use_signal(|| false);
    use_effect(move || {
        let view = notes.view();
        let view = view.read();
        let saving = view.is_saving();
        if *was_saving.peek() && !saving && view.error().is_none() {
            editing.set(None);
        }
        was_saving.set(saving);
    });

    let view = notes.view();
    let state = view.read();
    let saving = state.is_saving();

    let on_save = move |draft: NoteDraft| {
        let mutation = match editing() {
            Some(Editing::Existing(note)) => Mutation::Update { id: note.id, draft },
            _ => Mutation::Create(draft),
        };
        notes.apply(mutation);
    };

    rsx! {
        document::Title { "Home" }

        div {
            class: "home",

            div {
                class: "home-actions",
                button {
                    class: "btn btn-primary",
                    disabled: saving,
                    onclick: move |_| editing.set(Some(Editing::New)),
                    "Add Note"
                }
            }

            if let Some(message) = state.error() {
                FormAlert { message: message.to_string() }
            }

            if state.is_loading() && state.notes().is_empty() {
                p { class: "home-status", "Loading notes..." }
            } else if state.notes().is_empty() {
                p { class: "home-status", "No notes yet" }
            }

            div {
                class: "notes-grid",
                for note in state.notes().iter().cloned() {
                    NoteCard {
                        key: "{note.id}",
                        note,
                        disabled: saving,
                        on_edit: move |note: Note| editing.set(Some(Editing::Existing(note))),
                        on_delete: move |id: String| notes.apply(Mutation::Delete { id }),
                    }
                }
            }

            match editing() {
                Some(Editing::Existing(note)) => rsx! {
                    NoteDialog {
                        key: "{note.id}",
                        initial: NoteDraft::from_note(&note),
                        editing: true,
                        busy: saving,
                        on_save,
                        on_cancel: move |_| editing.set(None),
                    }
                },
                Some(Editing::New) => rsx! {
                    NoteDialog {
                        initial: NoteDraft::default(),
                        busy: saving,
                        on_save,
                        on_cancel: move |_| editing.set(None),
                    }
                },
                None => rsx! {},
            }
        }
    }
}

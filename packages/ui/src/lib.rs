//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod context;
pub use context::{use_app, use_client, use_session, AppContext, AppProvider};

mod session;
pub use session::{make_session, SignOutButton};

pub mod guard;
pub use guard::{check_access, Access};

pub mod notes;
pub use notes::{use_notes, FetchTicket, Mutation, NotesController, NotesView};

mod form_errors;
pub use form_errors::use_form_errors;

mod navbar;
pub use navbar::Navbar;

mod note_card;
pub use note_card::NoteCard;

mod note_dialog;
pub use note_dialog::NoteDialog;

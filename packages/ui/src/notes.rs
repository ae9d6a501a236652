//! # Notes view state
//!
//! [`NotesView`] is the only place the note list lives on the client. It holds
//! the snapshot of the last successful `GET /notes`, never a locally edited copy:
//! every mutation is sent to the server and followed by a full re-fetch, and the
//! view changes only when that re-fetch succeeds. Delete follows the same rule
//! as create and update.
//!
//! Fetches and mutations finish separately: a list fetch never clears the
//! saving flag, and a fetch that was overtaken by a mutation is discarded.
//!
//! | Piece | Role |
//! |-------|------|
//! | [`Mutation`] | One create/update/delete command; [`Mutation::run`] sends it and fetches the new snapshot. |
//! | [`NotesView`] | Snapshot, loading/saving flags and the last error. Async [`refresh`](NotesView::refresh) and [`apply`](NotesView::apply) drive it directly; the hook drives it in two steps around a spawned task. |
//! | [`use_notes`] | Dioxus hook: fetches once on activation and returns a [`NotesController`]. |

use api::{ApiError, Note, NoteDraft, NotesClient};
use dioxus::prelude::*;

use crate::context::use_client;

/// A change to the server-side note list.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    Create(NoteDraft),
    Update { id: String, draft: NoteDraft },
    Delete { id: String },
}

impl Mutation {
    /// Send the mutation. Resolves once the server acknowledged it.
    pub async fn send(&self, client: &NotesClient) -> Result<(), ApiError> {
        match self {
            Mutation::Create(draft) => client.create_note(draft).await.map(drop),
            Mutation::Update { id, draft } => client.update_note(id, draft).await.map(drop),
            Mutation::Delete { id } => client.delete_note(id).await.map(drop),
        }
    }

    /// Send the mutation, then fetch the list it produced.
    pub async fn run(&self, client: &NotesClient) -> Result<Vec<Note>, ApiError> {
        self.send(client).await?;
        client.list_notes().await
    }
}

/// The note list as last confirmed by the server.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotesView {
    notes: Vec<Note>,
    loading: bool,
    saving: bool,
    error: Option<String>,
    session_rejected: bool,
    /// Bumped by every mutation; a fetch started before the bump is stale.
    generation: u64,
}

/// Ticket handed out by [`NotesView::begin_fetch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl NotesView {
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// A mutation is in flight; submit controls stay disabled.
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The last failure means the user has to sign in again.
    pub fn session_rejected(&self) -> bool {
        self.session_rejected
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.loading = true;
        FetchTicket(self.generation)
    }

    /// Record the outcome of a list fetch. The result is dropped if a mutation
    /// started after the fetch did, since that mutation fetches a newer list.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<Note>, ApiError>) {
        self.loading = false;
        if ticket.0 != self.generation {
            tracing::debug!("Dropping stale notes fetch");
            return;
        }
        self.record(result);
    }

    /// Mark a mutation as started. Returns `false` if one is already in flight.
    pub fn begin_mutation(&mut self) -> bool {
        if self.saving {
            return false;
        }
        self.saving = true;
        self.generation += 1;
        self.error = None;
        true
    }

    /// Record the outcome of a mutation and its re-fetch.
    pub fn finish_mutation(&mut self, result: Result<Vec<Note>, ApiError>) {
        self.saving = false;
        self.record(result);
    }

    /// A failure keeps the previous snapshot.
    fn record(&mut self, result: Result<Vec<Note>, ApiError>) {
        match result {
            Ok(notes) => {
                self.notes = notes;
                self.error = None;
                self.session_rejected = false;
            }
            Err(e) => {
                self.session_rejected = e.is_auth_failure();
                self.error = Some(e.user_message());
            }
        }
    }

    /// Replace the snapshot with the server's current list.
    pub async fn refresh(&mut self, client: &NotesClient) {
        let ticket = self.begin_fetch();
        let result = client.list_notes().await;
        self.finish_fetch(ticket, result);
    }

    /// Send `mutation` and re-fetch. Ignored while another mutation is in flight.
    pub async fn apply(&mut self, client: &NotesClient, mutation: Mutation) {
        if !self.begin_mutation() {
            return;
        }
        let result = mutation.run(client).await;
        self.finish_mutation(result);
    }
}

/// Handle returned by [`use_notes`].
#[derive(Clone, Copy, PartialEq)]
pub struct NotesController {
    view: Signal<NotesView>,
    client: Signal<NotesClient>,
}

impl NotesController {
    pub fn view(&self) -> Signal<NotesView> {
        self.view
    }

    pub fn refresh(&self) {
        let mut view = self.view;
        let client = self.client.peek().clone();
        spawn(async move {
            let ticket = view.write().begin_fetch();
            let result = client.list_notes().await;
            if let Err(e) = &result {
                tracing::error!("Failed to load notes: {}", e);
            }
            view.write().finish_fetch(ticket, result);
        });
    }

    pub fn apply(&self, mutation: Mutation) {
        let mut view = self.view;
        if !view.write().begin_mutation() {
            return;
        }
        let client = self.client.peek().clone();
        spawn(async move {
            let result = mutation.run(&client).await;
            if let Err(e) = &result {
                tracing::error!("Failed to save notes: {}", e);
            }
            view.write().finish_mutation(result);
        });
    }
}

/// Notes state for the current view, fetched once when the view activates.
pub fn use_notes() -> NotesController {
    let client = use_client();
    let client = use_signal(move || client);
    let view = use_signal(NotesView::default);
    let controller = NotesController { view, client };

    use_hook(move || controller.refresh());

    controller
}

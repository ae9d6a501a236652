//! # Stub notes API
//!
//! An in-memory axum implementation of the remote API contract the client
//! consumes. Integration tests spawn it on an ephemeral port with
//! [`StubServer::spawn`]; the `notes-stub` binary serves it for local
//! development of the web app.
//!
//! ## Routes
//!
//! | Method | Path | Auth | Success body |
//! |--------|------|------|--------------|
//! | `POST` | `/api/v1/users/signUp` | none | `201 {message}` |
//! | `POST` | `/api/v1/users/signIn` | none | `200 {message, token}` |
//! | `GET` | `/api/v1/notes` | `token` header | `200 {message, notes: [...]}` |
//! | `POST` | `/api/v1/notes` | `token` header | `201 {message, note}` |
//! | `PUT` | `/api/v1/notes/{id}` | `token` header | `200 {message, note}` |
//! | `DELETE` | `/api/v1/notes/{id}` | `token` header | `200 {message}` |
//!
//! Authenticated routes expect the header value `<prefix><token>` and answer
//! `401 {message}` otherwise. Every note is owned by the account whose token
//! created it and lists come back in insertion order.
//!
//! ## Test hooks
//!
//! [`StubState`] records every request (method, path and raw `token` header)
//! and can be told to fail the next request with an arbitrary status.

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;

pub const TOKEN_HEADER: &str = "token";
pub const DEFAULT_TOKEN_PREFIX: &str = "3b8ny__";

type Reply = (StatusCode, Json<Value>);

/// A request as seen by the stub, before routing.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// Raw value of the `token` header, prefix included.
    pub token: Option<String>,
}

#[derive(Debug)]
struct Account {
    password: String,
}

#[derive(Clone, Debug)]
struct StoredNote {
    id: String,
    owner: String,
    title: String,
    content: String,
}

impl StoredNote {
    fn to_json(&self) -> Value {
        json!({ "_id": self.id, "title": self.title, "content": self.content })
    }
}

#[derive(Debug, Default)]
struct Backend {
    accounts: HashMap<String, Account>,
    /// token -> account email
    tokens: HashMap<String, String>,
    notes: Vec<StoredNote>,
    failures: VecDeque<StatusCode>,
    requests: Vec<RecordedRequest>,
}

/// Shared state of a stub server.
#[derive(Clone, Debug)]
pub struct StubState {
    backend: Arc<Mutex<Backend>>,
    token_prefix: Arc<str>,
}

impl Default for StubState {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_TOKEN_PREFIX)
    }
}

impl StubState {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            backend: Arc::new(Mutex::new(Backend::default())),
            token_prefix: Arc::from(prefix),
        }
    }

    fn backend(&self) -> MutexGuard<'_, Backend> {
        self.backend.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Answer the next request with `status` instead of routing it.
    pub fn fail_next(&self, status: u16) {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.backend().failures.push_back(status);
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.backend().requests.clone()
    }

    /// Number of notes across all accounts.
    pub fn note_count(&self) -> usize {
        self.backend().notes.len()
    }

    /// Create an account and return a session token for it, bypassing HTTP.
    pub fn seed_session(&self, email: &str, password: &str) -> String {
        let mut backend = self.backend();
        backend.accounts.insert(
            email.to_string(),
            Account {
                password: password.to_string(),
            },
        );
        issue_token(&mut backend, email)
    }

    /// Resolve the `token` header to the owning account.
    fn authorize(&self, headers: &HeaderMap) -> Result<String, Reply> {
        let raw = headers
            .get(TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| reply(StatusCode::UNAUTHORIZED, "token is required"))?;
        let token = raw
            .strip_prefix(&*self.token_prefix)
            .ok_or_else(|| reply(StatusCode::UNAUTHORIZED, "invalid token prefix"))?;
        self.backend()
            .tokens
            .get(token)
            .cloned()
            .ok_or_else(|| reply(StatusCode::UNAUTHORIZED, "invalid token"))
    }
}

fn issue_token(backend: &mut Backend, email: &str) -> String {
    let token = uuid::Uuid::new_v4().simple().to_string();
    backend.tokens.insert(token.clone(), email.to_string());
    token
}

fn reply(status: StatusCode, message: &str) -> Reply {
    (status, Json(json!({ "message": message })))
}

/// Build the API router over `state`.
pub fn router(state: StubState) -> Router {
    Router::new()
        .route("/api/v1/users/signUp", post(sign_up))
        .route("/api/v1/users/signIn", post(sign_in))
        .route("/api/v1/notes", post(create_note).get(list_notes))
        .route("/api/v1/notes/{id}", put(update_note).delete(delete_note))
        .layer(middleware::from_fn_with_state(state.clone(), record_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn record_request(State(state): State<StubState>, request: Request, next: Next) -> Response {
    let injected = {
        let mut backend = state.backend();
        backend.requests.push(RecordedRequest {
            method: request.method().to_string(),
            path: request.uri().path().to_string(),
            token: request
                .headers()
                .get(TOKEN_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string),
        });
        backend.failures.pop_front()
    };

    if let Some(status) = injected {
        tracing::debug!(%status, "Injecting failure");
        return reply(status, "injected failure").into_response();
    }
    next.run(request).await
}

#[derive(Deserialize)]
struct SignUpBody {
    name: String,
    email: String,
    password: String,
    age: f64,
    phone: String,
}

async fn sign_up(State(state): State<StubState>, Json(body): Json<SignUpBody>) -> Reply {
    if body.name.is_empty() || body.email.is_empty() || body.password.is_empty() || body.phone.is_empty() {
        return reply(StatusCode::BAD_REQUEST, "all fields are required");
    }
    if body.age.is_nan() || body.age < 18.0 {
        return reply(StatusCode::BAD_REQUEST, "age must be at least 18");
    }

    let mut backend = state.backend();
    if backend.accounts.contains_key(&body.email) {
        return reply(StatusCode::CONFLICT, "email already exists");
    }
    backend.accounts.insert(
        body.email.clone(),
        Account {
            password: body.password,
        },
    );
    tracing::info!(email = %body.email, "Registered account");
    reply(StatusCode::CREATED, "success")
}

#[derive(Deserialize)]
struct SignInBody {
    email: String,
    password: String,
}

async fn sign_in(State(state): State<StubState>, Json(body): Json<SignInBody>) -> Reply {
    let mut backend = state.backend();
    let valid = backend
        .accounts
        .get(&body.email)
        .is_some_and(|account| account.password == body.password);
    if !valid {
        return reply(StatusCode::UNAUTHORIZED, "incorrect email or password");
    }

    let token = issue_token(&mut backend, &body.email);
    (StatusCode::OK, Json(json!({ "message": "success", "token": token })))
}

#[derive(Deserialize)]
struct NoteBody {
    title: String,
    content: String,
}

async fn list_notes(State(state): State<StubState>, headers: HeaderMap) -> Reply {
    let owner = match state.authorize(&headers) {
        Ok(owner) => owner,
        Err(rejection) => return rejection,
    };
    let notes: Vec<Value> = state
        .backend()
        .notes
        .iter()
        .filter(|note| note.owner == owner)
        .map(StoredNote::to_json)
        .collect();
    (StatusCode::OK, Json(json!({ "message": "success", "notes": notes })))
}

async fn create_note(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<NoteBody>,
) -> Reply {
    let owner = match state.authorize(&headers) {
        Ok(owner) => owner,
        Err(rejection) => return rejection,
    };
    if body.title.is_empty() || body.content.is_empty() {
        return reply(StatusCode::BAD_REQUEST, "title and content are required");
    }

    let note = StoredNote {
        id: uuid::Uuid::new_v4().simple().to_string(),
        owner,
        title: body.title,
        content: body.content,
    };
    let created = note.to_json();
    state.backend().notes.push(note);
    (StatusCode::CREATED, Json(json!({ "message": "success", "note": created })))
}

async fn update_note(
    State(state): State<StubState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<NoteBody>,
) -> Reply {
    let owner = match state.authorize(&headers) {
        Ok(owner) => owner,
        Err(rejection) => return rejection,
    };

    let mut backend = state.backend();
    let Some(note) = backend
        .notes
        .iter_mut()
        .find(|note| note.id == id && note.owner == owner)
    else {
        return reply(StatusCode::NOT_FOUND, "note not found");
    };
    note.title = body.title;
    note.content = body.content;
    (StatusCode::OK, Json(json!({ "message": "success", "note": note.to_json() })))
}

async fn delete_note(
    State(state): State<StubState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Reply {
    let owner = match state.authorize(&headers) {
        Ok(owner) => owner,
        Err(rejection) => return rejection,
    };

    let mut backend = state.backend();
    let before = backend.notes.len();
    backend
        .notes
        .retain(|note| !(note.id == id && note.owner == owner));
    if backend.notes.len() == before {
        return reply(StatusCode::NOT_FOUND, "note not found");
    }
    reply(StatusCode::OK, "success")
}

/// A stub API bound to an ephemeral localhost port. Stops when dropped.
pub struct StubServer {
    addr: SocketAddr,
    state: StubState,
    handle: JoinHandle<()>,
}

impl StubServer {
    pub async fn spawn() -> std::io::Result<Self> {
        Self::spawn_with(StubState::default()).await
    }

    pub async fn spawn_with(state: StubState) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let app = router(state.clone());
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Stub server stopped: {}", e);
            }
        });
        Ok(Self {
            addr,
            state,
            handle,
        })
    }

    /// Versioned API root, e.g. `http://127.0.0.1:41234/api/v1`.
    pub fn base_url(&self) -> String {
        format!("http://{}/api/v1", self.addr)
    }

    pub fn state(&self) -> &StubState {
        &self.state
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

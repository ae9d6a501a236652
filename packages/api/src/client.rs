//! # NotesClient: typed access to the remote notes API
//!
//! [`NotesClient`] issues the six requests the application needs. Each call is a
//! single request/response exchange with no retries or timeouts.
//!
//! | Method | Request | Auth |
//! |--------|---------|------|
//! | [`sign_in`](NotesClient::sign_in) | `POST /users/signIn` | none |
//! | [`sign_up`](NotesClient::sign_up) | `POST /users/signUp` | none |
//! | [`list_notes`](NotesClient::list_notes) | `GET /notes` | yes |
//! | [`create_note`](NotesClient::create_note) | `POST /notes` | yes |
//! | [`update_note`](NotesClient::update_note) | `PUT /notes/{id}` | yes |
//! | [`delete_note`](NotesClient::delete_note) | `DELETE /notes/{id}` | yes |
//!
//! ## Authentication
//!
//! The client holds a [`Session`] handle and reads it right before every
//! authenticated request, so a sign-in or sign-out elsewhere in the app is
//! picked up by the next call. The token travels in a custom header
//! (`token: <prefix><raw token>` by default), not in `Authorization`. Without a
//! token, authenticated calls fail with [`ApiError::NotAuthenticated`] and
//! never reach the network.
//!
//! `sign_in` does not touch the session; persisting the returned token is the
//! caller's decision.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::{ApiConfig, ClientConfig, Note, NoteDraft, Session};

use crate::error::ApiError;
use crate::models::{
    NoteList, NoteReply, RawSignIn, SignInRequest, SignInResponse, SignUpRequest, SignUpResponse,
};

/// HTTP client for the notes API.
#[derive(Clone, Debug)]
pub struct NotesClient {
    http: reqwest::Client,
    config: ApiConfig,
    session: Session,
}

impl NotesClient {
    pub fn new(config: &ClientConfig, session: Session) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self::with_http(http, config, session))
    }

    /// Build on an existing `reqwest::Client`.
    pub fn with_http(http: reqwest::Client, config: &ClientConfig, session: Session) -> Self {
        Self {
            http,
            config: config.api.clone(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.config.endpoint(path))
    }

    /// Request carrying the session token header.
    fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let token = self.session.get().ok_or(ApiError::NotAuthenticated)?;
        Ok(self
            .request(method, path)
            .header(self.config.token_header.as_str(), self.config.token_value(&token)))
    }

    /// Send and turn any non-2xx status into an [`ApiError`].
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Request failed to send: {}", e);
            ApiError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status, &body);
        tracing::warn!(status = status.as_u16(), "Request rejected: {}", err);
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Exchange credentials for a session token.
    pub async fn sign_in(&self, credentials: &SignInRequest) -> Result<SignInResponse, ApiError> {
        tracing::debug!(email = %credentials.email, "Signing in");
        let response = self
            .send(self.request(Method::POST, "/users/signIn").json(credentials))
            .await?;
        let raw: RawSignIn = Self::decode(response).await?;

        let token = raw
            .token
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::MissingToken)?;
        Ok(SignInResponse {
            token,
            message: raw.message,
        })
    }

    /// Register a new account. The server runs its own validation.
    pub async fn sign_up(&self, account: &SignUpRequest) -> Result<SignUpResponse, ApiError> {
        tracing::debug!(email = %account.email, "Signing up");
        let response = self
            .send(self.request(Method::POST, "/users/signUp").json(account))
            .await?;
        // Some deployments acknowledge with an empty body
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(SignUpResponse::default());
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// All notes of the signed-in user, in server order.
    pub async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        tracing::debug!("Listing notes");
        let response = self.send(self.authed(Method::GET, "/notes")?).await?;
        let list: NoteList = Self::decode(response).await?;
        Ok(list.notes)
    }

    pub async fn create_note(&self, draft: &NoteDraft) -> Result<Note, ApiError> {
        tracing::debug!(title = %draft.title, "Creating note");
        let response = self
            .send(self.authed(Method::POST, "/notes")?.json(draft))
            .await?;
        let reply: NoteReply = Self::decode(response).await?;
        Ok(reply.into_note())
    }

    /// Replace title and content of note `id`.
    pub async fn update_note(&self, id: &str, draft: &NoteDraft) -> Result<Note, ApiError> {
        tracing::debug!(id, "Updating note");
        let response = self
            .send(self.authed(Method::PUT, &format!("/notes/{id}"))?.json(draft))
            .await?;
        let reply: NoteReply = Self::decode(response).await?;
        Ok(reply.into_note())
    }

    /// Delete note `id`. Success is signalled by the status alone; returns `id`.
    pub async fn delete_note(&self, id: &str) -> Result<String, ApiError> {
        tracing::debug!(id, "Deleting note");
        self.send(self.authed(Method::DELETE, &format!("/notes/{id}"))?)
            .await?;
        Ok(id.to_string())
    }
}

//! # API crate: typed client for the remote notes service
//!
//! The notes themselves, the accounts and every business rule live behind an
//! external HTTP API. This crate is everything the frontend needs to talk to it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`NotesClient`]: sign-in, sign-up and note CRUD over `reqwest` |
//! | [`error`] | [`ApiError`]: failures classified by status class |
//! | [`forms`] | Client-side validation of the sign-in and sign-up drafts |
//! | [`models`] | Request and response bodies |
//!
//! Notes, drafts, the session handle and the configuration are defined in the
//! `store` crate and re-exported here.

pub mod client;
pub mod error;
pub mod forms;
pub mod models;

pub use client::NotesClient;
pub use error::ApiError;
pub use forms::{Field, FormErrors, SignInDraft, SignUpDraft};
pub use models::{SignInRequest, SignInResponse, SignUpRequest, SignUpResponse};

pub use store::{ClientConfig, Note, NoteDraft, Session};

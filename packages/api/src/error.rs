//! # API errors keyed by status class
//!
//! Every failure of a request to the notes API ends up as one [`ApiError`].
//! Responses outside `2xx` are classified by status class rather than collapsed
//! into a single failure, so the UI can tell a dead session from a rejected form
//! from a broken server:
//!
//! | Status | Variant |
//! |--------|---------|
//! | no token in the session | [`ApiError::NotAuthenticated`] (nothing is sent) |
//! | network / TLS / CORS failure | [`ApiError::Transport`] |
//! | `401`, `403` | [`ApiError::Unauthorized`] |
//! | other `4xx` | [`ApiError::Rejected`] |
//! | `5xx` | [`ApiError::Server`] |
//! | anything else outside `2xx` | [`ApiError::UnexpectedStatus`] |
//!
//! When the server sends a JSON body with a `message` (or `error`) string, it is
//! kept in the variant and preferred by [`ApiError::user_message`].

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not signed in")]
    NotAuthenticated,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unauthorized ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Unauthorized { status: u16, message: Option<String> },

    #[error("request rejected ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },

    #[error("server error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },

    #[error("unexpected status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("sign-in response did not contain a token")]
    MissingToken,

    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Error body shapes the API is known to send.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ApiError {
    /// Classify a non-success status, reading the server's message from `body`.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .filter(|m| !m.trim().is_empty());
        let code = status.as_u16();

        match code {
            401 | 403 => ApiError::Unauthorized {
                status: code,
                message,
            },
            400..=499 => ApiError::Rejected {
                status: code,
                message,
            },
            500..=599 => ApiError::Server {
                status: code,
                message,
            },
            _ => ApiError::UnexpectedStatus { status: code },
        }
    }

    /// HTTP status of the response that caused this error, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { status, .. }
            | ApiError::Rejected { status, .. }
            | ApiError::Server { status, .. }
            | ApiError::UnexpectedStatus { status } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the user has to sign in (again) before retrying.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            ApiError::NotAuthenticated | ApiError::Unauthorized { .. }
        )
    }

    /// Message suitable for showing next to the action that failed.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::NotAuthenticated => "Please sign in to continue".to_string(),
            ApiError::Transport(_) => {
                "Could not reach the server, check your connection".to_string()
            }
            ApiError::Unauthorized { message, .. } => message
                .clone()
                .unwrap_or_else(|| "Your session is no longer valid, please sign in again".to_string()),
            ApiError::Rejected { message, .. } => message
                .clone()
                .unwrap_or_else(|| "The request was rejected".to_string()),
            ApiError::Server { message, .. } => message
                .clone()
                .unwrap_or_else(|| "The server had a problem, try again later".to_string()),
            ApiError::UnexpectedStatus { status } => {
                format!("Unexpected response from the server ({status})")
            }
            ApiError::MissingToken => "Sign-in did not return a session".to_string(),
            ApiError::Decode(_) => "Unexpected response from the server".to_string(),
        }
    }
}

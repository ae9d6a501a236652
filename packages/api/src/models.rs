//! Request and response bodies of the notes API.

use serde::{Deserialize, Serialize};
use store::Note;

/// Body of `POST /users/signIn`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /users/signIn`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignInResponse {
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /users/signUp`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: f64,
    pub phone: String,
}

/// Acknowledgement of `POST /users/signUp`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SignUpResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `GET /notes`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct NoteList {
    #[serde(default)]
    pub notes: Vec<Note>,
}

/// Response of `POST /notes` and `PUT /notes/{id}`: wrapped or bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum NoteReply {
    Wrapped { note: Note },
    Bare(Note),
}

impl NoteReply {
    pub fn into_note(self) -> Note {
        match self {
            NoteReply::Wrapped { note } | NoteReply::Bare(note) => note,
        }
    }
}

/// Raw sign-in body, before the token is checked.
#[derive(Debug, Deserialize)]
pub(crate) struct RawSignIn {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_list_defaults_to_empty() {
        let list: NoteList = serde_json::from_str(r#"{"message":"success"}"#).unwrap();
        assert!(list.notes.is_empty());
    }

    #[test]
    fn test_note_reply_accepts_both_shapes() {
        let wrapped: NoteReply =
            serde_json::from_str(r#"{"message":"ok","note":{"_id":"1","title":"T","content":"C"}}"#)
                .unwrap();
        let bare: NoteReply =
            serde_json::from_str(r#"{"_id":"1","title":"T","content":"C"}"#).unwrap();
        assert_eq!(wrapped.into_note(), bare.into_note());
    }

    #[test]
    fn test_sign_up_request_shape() {
        let body = SignUpRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "Abcdef1!".to_string(),
            age: 36.0,
            phone: "0123456789".to_string(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["age"].as_f64(), Some(36.0));
        assert_eq!(value["phone"], "0123456789");
    }
}

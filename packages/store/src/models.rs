//! # Domain models for notes
//!
//! The remote API owns every note; these types are the client's view of them.
//! They are `Serialize + Deserialize` so the API client can send and receive
//! them unchanged, and `PartialEq` so Dioxus components can take them as props.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Note`] | A note as returned by the server. The identifier is assigned by the server and travels as `_id` on the wire. |
//! | [`NoteDraft`] | The unsaved `{title, content}` of the add/edit dialog. Never persisted; becomes the request body of create and update. |

use serde::{Deserialize, Serialize};

/// A note stored by the remote API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Server-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Title and content being edited in the note dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Draft prefilled from an existing note, for editing.
    pub fn from_note(note: &Note) -> Self {
        Self::new(note.title.clone(), note.content.clone())
    }

    /// Both fields are required before the draft can be saved.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_reads_underscore_id() {
        let note: Note =
            serde_json::from_str(r#"{"_id":"64f1","title":"T","content":"C","__v":0}"#).unwrap();
        assert_eq!(note.id, "64f1");
        assert_eq!(note.title, "T");
        assert_eq!(note.content, "C");
    }

    #[test]
    fn test_note_writes_underscore_id() {
        let note = Note {
            id: "1".to_string(),
            title: "T".to_string(),
            content: "C".to_string(),
        };
        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(value["_id"], "1");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_draft_from_note() {
        let note = Note {
            id: "1".to_string(),
            title: "Groceries".to_string(),
            content: "milk".to_string(),
        };
        assert_eq!(NoteDraft::from_note(&note), NoteDraft::new("Groceries", "milk"));
    }

    #[test]
    fn test_draft_requires_both_fields() {
        assert!(NoteDraft::new("T", "C").is_complete());
        assert!(!NoteDraft::new("", "C").is_complete());
        assert!(!NoteDraft::new("T", "   ").is_complete());
        assert!(!NoteDraft::default().is_complete());
    }
}

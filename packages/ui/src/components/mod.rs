mod field;
pub use field::{FieldError, FormAlert, TextField};

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

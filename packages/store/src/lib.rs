pub mod config;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use config::{ApiConfig, ClientConfig, FormsConfig, SessionConfig};
pub use models::{Note, NoteDraft};
pub use session::{Session, TokenStore};

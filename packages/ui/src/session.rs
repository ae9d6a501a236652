//! Shared session constructor and sign-out control.
//!
//! Returns a [`Session`] backed by the appropriate [`store::TokenStore`]:
//! - **Web** (WASM + `web` feature): browser localStorage via `store::LocalStorageStore`
//! - **Desktop / tests** (native): process memory via [`store::MemoryStore`]

use dioxus::prelude::*;
use store::{Session, SessionConfig};

use crate::context::use_session;

/// Create a platform-appropriate session.
pub fn make_session(config: &SessionConfig) -> Session {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Session::new(store::LocalStorageStore::with_key(&config.storage_key))
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let _ = config;
        Session::new(store::MemoryStore::new())
    }
}

/// Button that forgets the session token, then calls `on_signed_out`.
#[component]
pub fn SignOutButton(
    on_signed_out: EventHandler<()>,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();

    let onclick = move |_| {
        session.clear();
        tracing::info!("Signed out");
        on_signed_out.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "Sign Out"
        }
    }
}

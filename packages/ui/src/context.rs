//! Application context: configuration, session and API client.

use api::{ApiError, ClientConfig, NotesClient, Session};
use dioxus::prelude::*;

use crate::session::make_session;

/// Everything views need to reach the notes API.
#[derive(Clone, Debug)]
pub struct AppContext {
    pub config: ClientConfig,
    pub session: Session,
    pub client: NotesClient,
}

impl AppContext {
    /// Build a context with the platform's session storage.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let session = make_session(&config.session);
        Self::with_session(config, session)
    }

    pub fn with_session(config: ClientConfig, session: Session) -> Result<Self, ApiError> {
        let client = NotesClient::new(&config, session.clone())?;
        Ok(Self {
            config,
            session,
            client,
        })
    }
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && self.session == other.session
    }
}

/// Get the application context provided by [`AppProvider`].
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

/// The session handle shared by every view.
pub fn use_session() -> Session {
    use_app().session
}

pub fn use_client() -> NotesClient {
    use_app().client
}

/// Provider component that builds the session and API client.
/// Wrap your app with this component.
#[component]
pub fn AppProvider(config: ClientConfig, children: Element) -> Element {
    let context = use_hook(move || AppContext::new(config).map_err(|e| e.to_string()));

    match context {
        Ok(context) => rsx! {
            AppScope { context, {children} }
        },
        Err(e) => {
            tracing::error!("Failed to create API client: {}", e);
            rsx! {
                div { class: "fatal-error", "The application could not start: {e}" }
            }
        }
    }
}

#[component]
fn AppScope(context: AppContext, children: Element) -> Element {
    use_context_provider(move || context);

    rsx! {
        {children}
    }
}

use dioxus::prelude::*;
use ui::{check_access, use_session, Access, Navbar};

use crate::Route;

/// Layout for signed-in routes. Without a token the visitor is sent to the
/// sign-in page and nothing inside is rendered.
#[component]
pub fn ProtectedLayout() -> Element {
    let session = use_session();
    let nav = use_navigator();

    match check_access(&session) {
        Access::Granted => rsx! {
            Navbar {
                on_signed_out: move |_| {
                    nav.replace(Route::Login {});
                },
            }
            main {
                class: "protected-content",
                Outlet::<Route> {}
            }
        },
        Access::Redirect { to } => {
            tracing::debug!("No session, redirecting to {}", to);
            nav.replace(to);
            rsx! {}
        }
    }
}

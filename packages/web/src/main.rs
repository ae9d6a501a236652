use dioxus::prelude::*;

use api::ClientConfig;
use ui::AppProvider;
use views::{Home, Login, ProtectedLayout, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(ProtectedLayout)]
        #[route("/home")]
        Home {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(ClientConfig::from_build_env);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }

        AppProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/login`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Login {});
    rsx! {}
}

/// Unknown paths land on the sign-in page.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("Unknown route /{}", segments.join("/"));
    nav.replace(Route::Login {});
    rsx! {}
}

use dioxus::prelude::*;

use crate::session::SignOutButton;

/// Top bar of the signed-in area.
#[component]
pub fn Navbar(
    on_signed_out: EventHandler<()>,
    #[props(default = "Note App".to_string())] title: String,
) -> Element {
    rsx! {
        nav {
            class: "navbar",
            h1 { class: "navbar-title", "{title}" }
            SignOutButton {
                class: "navbar-signout",
                on_signed_out: move |_| on_signed_out.call(()),
            }
        }
    }
}

use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a dialog card.
/// Clicking outside the card triggers `on_close`; so does the × button.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                button {
                    class: "modal-close",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                {children}
            }
        }
    }
}

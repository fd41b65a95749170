//! Loading spinner component.

use dioxus::prelude::*;

/// Simple loading indicator.
#[component]
pub fn LoadingSpinner(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "loading-spinner",
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: var(--muted);",
            "{label}"
        }
    }
}

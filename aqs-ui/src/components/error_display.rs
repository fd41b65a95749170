//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Shows a Retry button when set
    pub on_retry: Option<EventHandler<()>>,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            class: "error-display",
            style: "padding: 12px 16px; margin: 8px 0; background: var(--error-bg); color: var(--error-fg); border-radius: 4px; border: 1px solid var(--error-border); display: flex; align-items: center; gap: 12px;",
            div {
                style: "flex: 1;",
                strong { "Error: " }
                "{props.message}"
            }
            if let Some(on_retry) = props.on_retry {
                button {
                    class: "retry-button",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        }
    }
}

//! Persistent banner shown while the browser reports no connection.

use crate::state::AppState;
use dioxus::prelude::*;

/// News is only fetched on demand, so the banner points at the Refresh button.
pub const OFFLINE_MESSAGE: &str =
    "You are offline. Showing cached data; use Refresh on the news panel once you are back online.";

#[component]
pub fn OfflineBanner() -> Element {
    let state = use_context::<AppState>();
    if (state.online)() {
        return rsx! {};
    }
    rsx! {
        div {
            class: "offline-banner",
            role: "status",
            style: "position: sticky; top: 0; z-index: 10; padding: 8px 16px; background: var(--warning-bg); color: var(--warning-fg); text-align: center; font-weight: 600;",
            "{OFFLINE_MESSAGE}"
        }
    }
}

//! Top navigation: panel tabs, theme toggle and profile badge.

use super::Avatar;
use crate::state::AppState;
use aqs_core::profile::{Panel, Theme};
use dioxus::prelude::*;

#[component]
pub fn NavBar() -> Element {
    let mut state = use_context::<AppState>();
    let active = (state.panel)();
    let theme = (state.theme)();
    let display_name = state.profile.read().display_name.clone();
    let toggle_label = match theme {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };

    rsx! {
        nav {
            class: "nav-bar",
            style: "display: flex; align-items: center; gap: 8px; padding: 8px 16px; border-bottom: 1px solid var(--border); background: var(--surface);",
            strong { style: "font-size: 18px; margin-right: 16px;", "Aqua Sentinel" }
            for panel in Panel::ALL {
                button {
                    class: if panel == active { "tab active" } else { "tab" },
                    aria_current: if panel == active { "page" } else { "false" },
                    onclick: move |_| state.panel.set(panel),
                    {panel.label()}
                }
            }
            div { style: "flex: 1;" }
            button {
                onclick: move |_| {
                    let next = state.theme.peek().toggled();
                    state.theme.set(next);
                },
                "{toggle_label}"
            }
            button {
                class: "profile-badge",
                style: "display: flex; align-items: center; gap: 8px; background: none; border: none; color: inherit;",
                onclick: move |_| state.panel.set(Panel::Settings),
                Avatar { size: 32 }
                span { "{display_name}" }
            }
        }
    }
}

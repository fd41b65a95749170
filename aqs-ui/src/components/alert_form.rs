//! Per-location tide alert configuration.

use crate::persist;
use crate::state::AppState;
use aqs_core::alert::AlertConfig;
use dioxus::prelude::*;

#[component]
pub fn AlertForm(location: String, height: f64) -> Element {
    let mut state = use_context::<AppState>();
    let mut enabled = use_signal(|| false);
    let mut threshold = use_signal(String::new);

    // reload the form whenever the location changes
    use_effect(use_reactive((&location,), move |(location,)| {
        let config = state.alerts.peek().config_for(&location);
        enabled.set(config.enabled);
        threshold.set(format!("{:.1}", config.threshold_height));
    }));

    let saved = state.alerts.read().get(&location).copied();
    let parsed = threshold.read().trim().parse::<f64>().ok().filter(|t| *t >= 0.0);
    let preview = AlertConfig {
        enabled: enabled(),
        threshold_height: parsed.unwrap_or_default(),
    };
    let would_trigger = parsed.is_some() && preview.is_triggered(height);

    let save_location = location.clone();
    let on_save = move |_| {
        let Some(threshold_height) = parsed else {
            return;
        };
        let config = AlertConfig {
            enabled: enabled(),
            threshold_height,
        };
        let book = persist::save_alert(&state.alerts.peek(), &save_location, config);
        state.alerts.set(book);
    };

    let remove_location = location.clone();
    let on_remove = move |_| {
        let book = persist::remove_alert(&state.alerts.peek(), &remove_location);
        state.alerts.set(book);
    };

    rsx! {
        div {
            class: "alert-form card",
            h3 { style: "margin: 0 0 8px 0;", "Tide alert for {location}" }
            label {
                style: "display: block; margin: 4px 0;",
                input {
                    r#type: "checkbox",
                    checked: enabled(),
                    onchange: move |evt: Event<FormData>| enabled.set(evt.checked()),
                }
                " Notify me when the tide reaches the threshold"
            }
            label {
                style: "display: block; margin: 4px 0;",
                "Threshold (m): "
                input {
                    r#type: "number",
                    min: "0",
                    step: "0.1",
                    value: "{threshold}",
                    oninput: move |evt: Event<FormData>| threshold.set(evt.value()),
                }
            }
            if parsed.is_none() {
                p { style: "color: var(--danger); margin: 4px 0;", "Enter a threshold of 0 or more." }
            }
            p {
                style: "margin: 4px 0; color: var(--muted);",
                if !enabled() {
                    "Alert is off."
                } else if would_trigger {
                    "Current height {height:.1} m would trigger this alert."
                } else {
                    "Current height {height:.1} m is below the threshold."
                }
            }
            div {
                style: "display: flex; gap: 8px;",
                button { disabled: parsed.is_none(), onclick: on_save, "Save alert" }
                if saved.is_some() {
                    button { onclick: on_remove, "Remove" }
                }
            }
        }
    }
}

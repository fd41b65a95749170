//! Calendar date input driving the generators.

use crate::state::AppState;
use aqs_utils::dates::{format_date, parse_date};
use dioxus::prelude::*;

/// Single date input. The value is read as calendar fields, never as an
/// instant, so the selected day does not shift with the time zone.
#[component]
pub fn DatePicker() -> Element {
    let mut state = use_context::<AppState>();
    let value = format_date(&(state.selected_date)());

    let on_change = move |evt: Event<FormData>| match parse_date(&evt.value()) {
        Ok(date) => state.selected_date.set(date),
        Err(e) => log::warn!("[AQS] ui: ignoring date input: {}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold;",
                "Date: "
                input {
                    r#type: "date",
                    value: "{value}",
                    onchange: on_change,
                }
            }
        }
    }
}

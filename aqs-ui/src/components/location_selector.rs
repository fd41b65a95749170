//! Dropdown selector for choosing a location.

use crate::state::AppState;
use dioxus::prelude::*;

/// Location dropdown selector.
/// Reads the fixture locations from AppState and updates selected_location on change.
#[component]
pub fn LocationSelector() -> Element {
    let mut state = use_context::<AppState>();
    let locations = state.locations.read().clone();
    let selected = (state.selected_location)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_location.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "location-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Location: "
            }
            select {
                id: "location-select",
                onchange: on_change,
                for location in locations.iter() {
                    option {
                        value: "{location.name}",
                        selected: location.name == selected,
                        "{location.name} ({location.region})"
                    }
                }
            }
        }
    }
}

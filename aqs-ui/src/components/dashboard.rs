//! Overview panel: location and date pickers, live gauge, station map.

use super::{DatePicker, LocationSelector, MapView, WaterGauge};
use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<AppState>();
    let location = (state.selected_location)();
    let date = (state.selected_date)();

    rsx! {
        div {
            class: "dashboard",
            style: "display: grid; gap: 16px;",
            div {
                style: "display: flex; flex-wrap: wrap; gap: 16px;",
                LocationSelector {}
                DatePicker {}
            }
            WaterGauge { location, date }
            MapView {}
        }
    }
}

//! Tide card, 7-day forecast and alert form for the selected location.

use super::{AlertForm, DatePicker, ErrorDisplay, LocationSelector, Sparkline};
use crate::state::AppState;
use aqs_core::tide::TideRecord;
use aqs_data::tide;
use aqs_utils::dates::format_date;
use chrono::{Duration, NaiveDate};
use dioxus::prelude::*;

/// Days shown in the forecast table.
pub const FORECAST_DAYS: u32 = 7;

#[component]
pub fn TidePanel() -> Element {
    let state = use_context::<AppState>();

    let record = use_memo(move || {
        let location = state.selected_location.read().clone();
        let date = *state.selected_date.read();
        tide::generate(&location, &date).map_err(|e| e.to_string())
    });

    let forecast = use_memo(move || {
        let location = state.selected_location.read().clone();
        let date = *state.selected_date.read();
        tide::forecast(&location, &date, FORECAST_DAYS, &mut rand::rng())
            .map_err(|e| e.to_string())
    });

    let pickers = rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 16px;",
            LocationSelector {}
            DatePicker {}
        }
    };
    let record = match record() {
        Ok(record) => record,
        Err(message) => return rsx! { {pickers} ErrorDisplay { message } },
    };
    let triggered = state.alerts.read().is_triggered(&record);
    let start = *state.selected_date.read();

    rsx! {
        div {
            class: "tide-panel",
            style: "display: grid; gap: 16px;",
            {pickers}
            TideCard { record: record.clone(), triggered }
            AlertForm { location: record.location.clone(), height: record.height }
            match forecast() {
                Ok(days) => rsx! {
                    div {
                        class: "card",
                        h3 { style: "margin: 0 0 8px 0;", "{FORECAST_DAYS}-day forecast" }
                        table {
                            style: "width: 100%; border-collapse: collapse;",
                            thead {
                                tr {
                                    th { "Date" }
                                    th { "Status" }
                                    th { "Height" }
                                    th { "High" }
                                    th { "Low" }
                                }
                            }
                            tbody {
                                for row in forecast_rows(start, days) {
                                    tr {
                                        key: "{row.date}",
                                        td { "{row.date}" }
                                        td { "{row.status}" }
                                        td { "{row.height:.1} m" }
                                        td { "{row.high}" }
                                        td { "{row.low}" }
                                    }
                                }
                            }
                        }
                    }
                },
                Err(message) => rsx! { ErrorDisplay { message } },
            }
        }
    }
}

struct ForecastRow {
    date: String,
    status: String,
    height: f64,
    high: String,
    low: String,
}

fn forecast_rows(start: NaiveDate, days: Vec<TideRecord>) -> Vec<ForecastRow> {
    days.into_iter()
        .enumerate()
        .map(|(offset, day)| ForecastRow {
            date: format_date(&(start + Duration::days(offset as i64))),
            status: format!("{} {}", day.status.symbol(), day.status),
            height: day.height,
            high: day.next_high_time,
            low: day.next_low_time,
        })
        .collect()
}

#[derive(Props, Clone, PartialEq)]
pub struct TideCardProps {
    pub record: TideRecord,
    /// Alert for this location is enabled and the height reached its threshold
    pub triggered: bool,
}

#[component]
pub fn TideCard(props: TideCardProps) -> Element {
    let r = &props.record;
    let status = format!("{} {}", r.status.symbol(), r.status);
    let border = if props.triggered { "var(--danger)" } else { "var(--border)" };
    rsx! {
        div {
            class: "tide-card card",
            style: "border: 2px solid {border};",
            div {
                style: "display: flex; justify-content: space-between; align-items: baseline;",
                h3 { style: "margin: 0;", "{r.location}" }
                span {
                    style: "font-size: 20px; font-weight: 600;",
                    "{status}"
                }
            }
            if props.triggered {
                p {
                    class: "alert-triggered",
                    style: "margin: 8px 0; font-weight: 700; color: var(--danger);",
                    "Alert: tide at or above your threshold"
                }
            }
            p { style: "font-size: 36px; font-weight: 700; margin: 8px 0;", "{r.height:.1} m" }
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 4px; color: var(--muted);",
                span { "Next high: {r.next_high_time}" }
                span { "Next low: {r.next_low_time}" }
                span { "Monthly avg high: {r.monthly_avg_high:.1} m" }
                span { "Monthly avg low: {r.monthly_avg_low:.1} m" }
            }
            p { style: "margin: 12px 0 0 0; font-size: 12px; color: var(--muted);", "Past 24 hours" }
            Sparkline { values: r.past24h.clone() }
        }
    }
}

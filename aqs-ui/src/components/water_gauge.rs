//! Live water-level gauge.
//!
//! The gauge owns one refresh task (`use_future`); it is dropped with the
//! component, so leaving the panel stops the timer and remounting starts a
//! fresh one. Changing the location or date reseeds the walk in place.

use super::{ErrorDisplay, Sparkline};
use aqs_core::gauge::{GaugeLevel, LEVEL_MAX, LEVEL_MIN};
use aqs_data::water_level::{WaterLevelSimulator, REFRESH_INTERVAL_MS};
use chrono::NaiveDate;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

#[component]
pub fn WaterGauge(location: String, date: NaiveDate) -> Element {
    let mut simulator = use_signal(|| None::<WaterLevelSimulator>);
    let mut error = use_signal(|| None::<String>);

    use_effect(use_reactive((&location, &date), move |(location, date)| {
        let mut slot = simulator.write();
        let result = match slot.as_mut() {
            Some(sim) => sim.reseed(&location, date),
            None => WaterLevelSimulator::new(&location, date).map(|sim| {
                *slot = Some(sim);
            }),
        };
        match result {
            Ok(()) => error.set(None),
            Err(e) => {
                log::warn!("[AQS] gauge: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    }));

    use_future(move || async move {
        loop {
            TimeoutFuture::new(REFRESH_INTERVAL_MS).await;
            if let Some(sim) = simulator.write().as_mut() {
                sim.tick();
            }
        }
    });

    if let Some(message) = error() {
        return rsx! { ErrorDisplay { message } };
    }

    let guard = simulator.read();
    let Some(sim) = guard.as_ref() else {
        return rsx! {};
    };
    let current = sim.current();
    let level = sim.level();
    let trend = sim.trend();
    let base = sim.base();
    drop(guard);

    let fill_pct = ((current - LEVEL_MIN) / (LEVEL_MAX - LEVEL_MIN) * 100.0).clamp(0.0, 100.0);
    let color = level.color();
    let bar_style = format!(
        "position: absolute; bottom: 0; left: 0; right: 0; height: {:.1}%; background: {}; transition: height 0.6s ease;",
        fill_pct, color
    );

    rsx! {
        div {
            class: "water-gauge card",
            style: "display: flex; gap: 16px; align-items: stretch;",
            div {
                style: "position: relative; width: 48px; min-height: 160px; border: 2px solid var(--border); border-radius: 6px; overflow: hidden; background: var(--surface-alt);",
                div { style: "{bar_style}" }
            }
            div {
                style: "flex: 1;",
                h3 { style: "margin: 0 0 4px 0;", "Water level: {location}" }
                p {
                    style: "margin: 0; font-size: 32px; font-weight: 700; color: {color};",
                    "{current:.1}%"
                }
                p {
                    style: "margin: 4px 0; color: var(--muted);",
                    "{level} · seasonal base {base:.0}%"
                }
                if level == GaugeLevel::Danger {
                    p { class: "gauge-warning", style: "margin: 4px 0; font-weight: 600; color: {color};", "Flood risk: move to higher ground if advised." }
                }
                Sparkline {
                    values: trend,
                    color: color.to_string(),
                    range: Some((LEVEL_MIN, LEVEL_MAX)),
                }
            }
        }
    }
}

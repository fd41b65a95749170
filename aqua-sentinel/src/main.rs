//! Aqua Sentinel flood-monitoring dashboard.
//!
//! Root shell: builds the shared `AppState`, keeps the theme attribute and
//! the connectivity flag in sync with the browser, registers the offline
//! cache worker and switches between the four panels.
//!
//! News settings are read at compile time from `AQS_COMPLETION_URL`,
//! `AQS_COMPLETION_MODEL` and `AQS_API_KEY`; without an endpoint the feed is
//! generated locally.

use aqs_core::location::Location;
use aqs_core::profile::Panel;
use aqs_news::{CompletionConfig, NewsSource};
use aqs_ui::components::{
    Dashboard, ErrorDisplay, NavBar, NewsFeed, OfflineBanner, SettingsPanel, TidePanel,
};
use aqs_ui::js_bridge;
use aqs_ui::persist;
use aqs_ui::state::AppState;
use aqs_utils::dates::today;
use dioxus::prelude::*;
use std::rc::Rc;

// Palette and layout, embedded at compile time.
const MAIN_CSS: &str = include_str!("../assets/main.css");

/// Served next to the app by the static host; see aqs-worker/js/sw.js.
const SERVICE_WORKER_URL: &str = "/sw.js";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("aqua-sentinel-root"))
        .launch(App);
}

fn news_source() -> NewsSource {
    let config = option_env!("AQS_COMPLETION_URL").map(|endpoint| {
        let mut config = CompletionConfig::new(endpoint);
        if let Some(model) = option_env!("AQS_COMPLETION_MODEL") {
            config.model = model.to_string();
        }
        config.api_key = option_env!("AQS_API_KEY").map(str::to_string);
        config
    });
    NewsSource::from_config(config)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(|| {
        AppState::new(
            Location::get_location_vector(),
            persist::load_theme(),
            persist::load_alerts(),
            news_source(),
            today(),
        )
    });

    // Listeners live as long as the shell.
    let _connectivity = use_hook(move || {
        Rc::new(js_bridge::watch_connectivity(move |online| {
            let mut flag = state.online;
            flag.set(online);
        }))
    });

    // ─── Effect 1: one-time browser setup ───
    use_effect(move || {
        let online = js_bridge::is_online();
        log::info!("[AQS] app: started, online={}", online);
        state.online.set(online);
        js_bridge::register_service_worker(SERVICE_WORKER_URL);
    });

    // ─── Effect 2: apply and persist the theme ───
    use_effect(move || {
        let theme = (state.theme)();
        js_bridge::apply_theme(theme);
        persist::save_theme(theme);
    });

    let panel = (state.panel)();

    rsx! {
        style { {MAIN_CSS} }
        div {
            class: "app",
            OfflineBanner {}
            NavBar {}
            main {
                style: "max-width: 1100px; margin: 0 auto; padding: 16px;",
                if let Some(message) = (state.error_msg)() {
                    ErrorDisplay { message }
                }
                match panel {
                    Panel::Dashboard => rsx! { Dashboard {} },
                    Panel::Tides => rsx! { TidePanel {} },
                    Panel::News => rsx! { NewsFeed {} },
                    Panel::Settings => rsx! { SettingsPanel {} },
                }
            }
        }
    }
}

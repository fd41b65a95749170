//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use aqs_core::alert::AlertBook;
use aqs_core::location::Location;
use aqs_core::news::NewsArticle;
use aqs_core::profile::{Panel, Profile, Theme};
use aqs_news::NewsSource;
use chrono::NaiveDate;
use dioxus::prelude::*;

/// Lifecycle of the news feed.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NewsState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<NewsArticle>),
    Failed(String),
}

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Panel shown in the main area
    pub panel: Signal<Panel>,
    pub theme: Signal<Theme>,
    /// Session-only profile; not persisted
    pub profile: Signal<Profile>,
    /// Fixture locations
    pub locations: Signal<Vec<Location>>,
    /// Currently selected location name
    pub selected_location: Signal<String>,
    /// Calendar date the generators run for
    pub selected_date: Signal<NaiveDate>,
    /// Browser connectivity
    pub online: Signal<bool>,
    /// Per-location alert configuration
    pub alerts: Signal<AlertBook>,
    pub news: Signal<NewsState>,
    pub news_source: Signal<NewsSource>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState; `locations` seeds the selection with its first entry.
    pub fn new(
        locations: Vec<Location>,
        theme: Theme,
        alerts: AlertBook,
        news_source: NewsSource,
        today: NaiveDate,
    ) -> Self {
        let first = locations
            .first()
            .map(|l| l.name.clone())
            .unwrap_or_default();
        let error_msg = if locations.is_empty() {
            Some("No monitoring locations available.".to_string())
        } else {
            None
        };
        Self {
            panel: Signal::new(Panel::Dashboard),
            theme: Signal::new(theme),
            profile: Signal::new(Profile::default()),
            locations: Signal::new(locations),
            selected_location: Signal::new(first),
            selected_date: Signal::new(today),
            online: Signal::new(true),
            alerts: Signal::new(alerts),
            news: Signal::new(NewsState::Idle),
            news_source: Signal::new(news_source),
            error_msg: Signal::new(error_msg),
        }
    }

    /// Names of every fixture location.
    pub fn city_names(&self) -> Vec<String> {
        self.locations.read().iter().map(|l| l.name.clone()).collect()
    }
}

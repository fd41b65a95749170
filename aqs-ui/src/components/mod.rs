//! Reusable Dioxus RSX components for the dashboard.

mod alert_form;
mod dashboard;
mod date_picker;
mod error_display;
mod loading_spinner;
mod location_selector;
mod map_view;
mod nav_bar;
mod news_feed;
mod offline_banner;
mod settings_panel;
mod sparkline;
mod tide_panel;
mod water_gauge;

pub use alert_form::AlertForm;
pub use dashboard::Dashboard;
pub use date_picker::DatePicker;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use location_selector::LocationSelector;
pub use map_view::MapView;
pub use nav_bar::NavBar;
pub use news_feed::{refresh_news, NewsCard, NewsFeed};
pub use offline_banner::OfflineBanner;
pub use settings_panel::{Avatar, SettingsPanel};
pub use sparkline::{sparkline_points, Sparkline};
pub use tide_panel::{TideCard, TidePanel, FORECAST_DAYS};
pub use water_gauge::WaterGauge;

//! Command implementations for the Aqua Sentinel CLI.
//!
//! Provides subcommands for inspecting the seeded generators, editing the
//! persisted theme and alerts, fetching the news feed and warming the
//! offline asset cache.

use aqs_cache::CACHE_VERSION;
use clap::Subcommand;

pub mod generate;
pub mod news;
pub mod precache;
pub mod prefs;

/// Preferences database used when `--store` is not given.
pub const DEFAULT_STORE: &str = "aqua-sentinel.db";

#[derive(Subcommand)]
pub enum Command {
    /// List the monitored locations
    Locations,

    /// Print the tide record for one location and date
    Tide {
        #[arg(short, long)]
        location: String,

        /// Calendar date, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Seed for the 24h history jitter; unseeded when omitted
        #[arg(long)]
        noise_seed: Option<u64>,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a multi-day tide forecast as CSV
    Forecast {
        #[arg(short, long)]
        location: String,

        /// First day, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,

        #[arg(long, default_value_t = 7)]
        days: u32,

        #[arg(long)]
        noise_seed: Option<u64>,
    },

    /// Run the water-level walk for a number of refresh ticks
    Level {
        #[arg(short, long)]
        location: String,

        #[arg(short, long)]
        date: Option<String>,

        #[arg(long, default_value_t = 10)]
        ticks: u32,

        #[arg(long)]
        noise_seed: Option<u64>,
    },

    /// Manage per-location tide alerts
    Alert {
        /// Preferences database path
        #[arg(long, env = "AQS_STORE", default_value = DEFAULT_STORE)]
        store: String,

        #[command(subcommand)]
        action: AlertAction,
    },

    /// Show or set the dashboard theme
    Theme {
        #[arg(long, env = "AQS_STORE", default_value = DEFAULT_STORE)]
        store: String,

        /// "light" or "dark"; prints the current theme when omitted
        value: Option<String>,
    },

    /// Fetch one news feed
    News {
        /// OpenAI-compatible chat completions URL
        #[arg(long, env = "AQS_COMPLETION_URL")]
        endpoint: Option<String>,

        #[arg(long, env = "AQS_COMPLETION_MODEL")]
        model: Option<String>,

        #[arg(long, env = "AQS_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Use the locally generated feed even when an endpoint is set
        #[arg(long)]
        offline: bool,

        #[arg(short, long)]
        date: Option<String>,
    },

    /// Precache the dashboard assets from a running server and verify they
    /// are served offline
    Precache {
        /// Origin serving the built dashboard, e.g. http://localhost:8080
        #[arg(long)]
        base_url: String,

        /// Cache version tag
        #[arg(long, default_value = CACHE_VERSION)]
        version: String,
    },
}

#[derive(Subcommand)]
pub enum AlertAction {
    /// Create or replace the alert for a location
    Set {
        location: String,

        /// Height in metres at or above which the alert fires
        #[arg(long)]
        threshold: f64,

        /// Store the alert switched off
        #[arg(long)]
        disabled: bool,
    },

    /// Delete the alert for a location
    Remove { location: String },

    /// List stored alerts
    List,

    /// Show which alerts fire for a date
    Check {
        #[arg(short, long)]
        date: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Locations => generate::run_locations(),
        Command::Tide {
            location,
            date,
            noise_seed,
            json,
        } => generate::run_tide(&location, date.as_deref(), noise_seed, json),
        Command::Forecast {
            location,
            date,
            days,
            noise_seed,
        } => generate::run_forecast(&location, date.as_deref(), days, noise_seed),
        Command::Level {
            location,
            date,
            ticks,
            noise_seed,
        } => generate::run_level(&location, date.as_deref(), ticks, noise_seed),
        Command::Alert { store, action } => prefs::run_alert(&store, action),
        Command::Theme { store, value } => prefs::run_theme(&store, value.as_deref()),
        Command::News {
            endpoint,
            model,
            api_key,
            offline,
            date,
        } => {
            news::run_news(endpoint, model, api_key, offline, date.as_deref()).await
        }
        Command::Precache { base_url, version } => {
            precache::run_precache(&base_url, &version).await
        }
    }
}

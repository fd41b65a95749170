//! Alert and theme commands over an on-disk preferences store.

use crate::generate::{resolve_date, resolve_location};
use crate::AlertAction;
use anyhow::Context;
use aqs_core::alert::{AlertBook, AlertConfig};
use aqs_core::location::Location;
use aqs_core::profile::Theme;
use aqs_data::tide;
use aqs_store::{KeyValueStore, Preferences, SqliteStore};
use chrono::NaiveDate;
use log::info;
use std::io::Write;

fn open(store: &str) -> anyhow::Result<Preferences<SqliteStore>> {
    info!("Opening preferences store at {}", store);
    let backend = SqliteStore::open(store)
        .with_context(|| format!("Failed to open preferences store {}", store))?;
    Ok(Preferences::new(backend))
}

pub fn run_alert(store: &str, action: AlertAction) -> anyhow::Result<()> {
    let prefs = open(store)?;
    let mut stdout = std::io::stdout();
    match action {
        AlertAction::Set {
            location,
            threshold,
            disabled,
        } => {
            let location = resolve_location(&location)?;
            let config = AlertConfig {
                enabled: !disabled,
                threshold_height: threshold,
            };
            let book = set_alert(&prefs, &location.name, config)?;
            writeln!(stdout, "Saved alert for {} ({} stored)", location.name, book.len())?;
        }
        AlertAction::Remove { location } => {
            let location = resolve_location(&location)?;
            let before = prefs.alerts().len();
            let book = prefs.remove_alert(&location.name)?;
            if book.len() == before {
                writeln!(stdout, "No alert stored for {}", location.name)?;
            } else {
                writeln!(stdout, "Removed alert for {}", location.name)?;
            }
        }
        AlertAction::List => write_alerts(&mut stdout, &prefs.alerts())?,
        AlertAction::Check { date } => {
            let date = resolve_date(date.as_deref())?;
            let fired = check_alerts(&prefs.alerts(), &date)?;
            if fired.is_empty() {
                writeln!(stdout, "No alerts triggered on {}", date)?;
            }
            for (name, height, threshold) in fired {
                writeln!(
                    stdout,
                    "{}: {:.1} m reaches threshold {:.1} m",
                    name, height, threshold
                )?;
            }
        }
    }
    Ok(())
}

/// Validate and store one alert.
pub fn set_alert<S: KeyValueStore>(
    prefs: &Preferences<S>,
    location: &str,
    config: AlertConfig,
) -> anyhow::Result<AlertBook> {
    if !config.threshold_height.is_finite() || config.threshold_height < 0.0 {
        anyhow::bail!(
            "Threshold must be a non-negative height in metres, got {}",
            config.threshold_height
        );
    }
    Ok(prefs.set_alert(location, config)?)
}

pub fn write_alerts<W: Write>(out: &mut W, book: &AlertBook) -> anyhow::Result<()> {
    if book.is_empty() {
        writeln!(out, "No alerts stored")?;
        return Ok(());
    }
    for (name, config) in book.iter() {
        let state = if config.enabled { "on" } else { "off" };
        writeln!(out, "{:<12} {:>5.1} m  {}", name, config.threshold_height, state)?;
    }
    Ok(())
}

/// Locations whose alert fires on `date`, with the generated height and
/// the configured threshold.
pub fn check_alerts(
    book: &AlertBook,
    date: &NaiveDate,
) -> anyhow::Result<Vec<(String, f64, f64)>> {
    let mut fired = Vec::new();
    for location in Location::get_location_vector() {
        let Some(config) = book.get(&location.name) else {
            continue;
        };
        let record = tide::generate(&location.name, date)?;
        if config.is_triggered(record.height) {
            fired.push((location.name, record.height, config.threshold_height));
        }
    }
    Ok(fired)
}

pub fn run_theme(store: &str, value: Option<&str>) -> anyhow::Result<()> {
    let prefs = open(store)?;
    match value {
        Some(value) => {
            let theme: Theme = value.parse().map_err(anyhow::Error::msg)?;
            prefs.set_theme(theme)?;
            println!("Theme set to {}", theme);
        }
        None => println!("{}", prefs.theme()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs() -> Preferences<SqliteStore> {
        Preferences::new(SqliteStore::open_in_memory().unwrap())
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn rejects_negative_thresholds() {
        let prefs = prefs();
        let config = AlertConfig {
            enabled: true,
            threshold_height: -1.0,
        };
        assert!(set_alert(&prefs, "Jakarta", config).is_err());
        assert!(prefs.alerts().is_empty());
    }

    #[test]
    fn lists_stored_alerts() {
        let prefs = prefs();
        let config = AlertConfig {
            enabled: false,
            threshold_height: 1.5,
        };
        set_alert(&prefs, "Medan", config).unwrap();
        let mut buf = Vec::new();
        write_alerts(&mut buf, &prefs.alerts()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Medan"));
        assert!(text.contains("1.5 m"));
        assert!(text.trim_end().ends_with("off"));
    }

    #[test]
    fn check_fires_only_enabled_alerts_at_or_above_threshold() {
        let mut book = AlertBook::new();
        book.set(
            "Jakarta",
            AlertConfig {
                enabled: true,
                threshold_height: 0.0,
            },
        );
        book.set(
            "Semarang",
            AlertConfig {
                enabled: false,
                threshold_height: 0.0,
            },
        );
        book.set(
            "Medan",
            AlertConfig {
                enabled: true,
                threshold_height: 1000.0,
            },
        );
        let fired = check_alerts(&book, &date()).unwrap();
        let names: Vec<&str> = fired.iter().map(|(n, _, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Jakarta"]);
    }
}

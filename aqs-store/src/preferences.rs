//! Typed access to the persisted theme and alert configuration.
//!
//! Unreadable values are logged and treated as absent; the dashboard never
//! fails to start because of a corrupted entry.

use crate::{KeyValueStore, StoreError};
use aqs_core::alert::{AlertBook, AlertConfig};
use aqs_core::profile::Theme;

pub const THEME_KEY: &str = "aqua-sentinel-theme";
pub const ALERTS_KEY: &str = "aqua-sentinel-alerts";

#[derive(Clone)]
pub struct Preferences<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Saved theme, or `Light` when unset or unreadable.
    pub fn theme(&self) -> Theme {
        let raw = match self.store.get(THEME_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Theme::default(),
            Err(e) => {
                log::warn!("[AQS] prefs: theme read failed: {}", e);
                return Theme::default();
            }
        };
        // Older builds wrote the bare word instead of a JSON string.
        serde_json::from_str::<Theme>(&raw)
            .ok()
            .or_else(|| raw.parse::<Theme>().ok())
            .unwrap_or_else(|| {
                log::warn!("[AQS] prefs: ignoring malformed theme {:?}", raw);
                Theme::default()
            })
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&theme).map_err(|e| StoreError::Backend(e.to_string()))?;
        self.store.set(THEME_KEY, &raw)
    }

    /// Saved alert configuration, or an empty book when unset or unreadable.
    pub fn alerts(&self) -> AlertBook {
        let raw = match self.store.get(ALERTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return AlertBook::new(),
            Err(e) => {
                log::warn!("[AQS] prefs: alerts read failed: {}", e);
                return AlertBook::new();
            }
        };
        match serde_json::from_str::<AlertBook>(&raw) {
            Ok(book) => book,
            Err(e) => {
                log::warn!("[AQS] prefs: ignoring malformed alert config: {}", e);
                AlertBook::new()
            }
        }
    }

    pub fn save_alerts(&self, book: &AlertBook) -> Result<(), StoreError> {
        let raw = serde_json::to_string(book).map_err(|e| StoreError::Backend(e.to_string()))?;
        self.store.set(ALERTS_KEY, &raw)
    }

    /// Store `config` for `location` and return the updated book.
    pub fn set_alert(&self, location: &str, config: AlertConfig) -> Result<AlertBook, StoreError> {
        let mut book = self.alerts();
        book.set(location, config);
        self.save_alerts(&book)?;
        Ok(book)
    }

    /// Drop the alert for `location` and return the updated book.
    pub fn remove_alert(&self, location: &str) -> Result<AlertBook, StoreError> {
        let mut book = self.alerts();
        if book.remove(location).is_some() {
            self.save_alerts(&book)?;
        }
        Ok(book)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::SqliteStore;

    fn prefs() -> Preferences<SqliteStore> {
        Preferences::new(SqliteStore::open_in_memory().unwrap())
    }

    #[test]
    fn theme_defaults_to_light() {
        assert_eq!(prefs().theme(), Theme::Light);
    }

    #[test]
    fn theme_round_trips_as_json_string() {
        let prefs = prefs();
        prefs.set_theme(Theme::Dark).unwrap();
        assert_eq!(prefs.store().get(THEME_KEY).unwrap().as_deref(), Some("\"dark\""));
        assert_eq!(prefs.theme(), Theme::Dark);
    }

    #[test]
    fn theme_accepts_bare_word_and_ignores_garbage() {
        let prefs = prefs();
        prefs.store().set(THEME_KEY, "dark").unwrap();
        assert_eq!(prefs.theme(), Theme::Dark);
        prefs.store().set(THEME_KEY, "{not json").unwrap();
        assert_eq!(prefs.theme(), Theme::Light);
    }

    #[test]
    fn malformed_alerts_fall_back_to_empty() {
        let prefs = prefs();
        prefs.store().set(ALERTS_KEY, "[1, 2").unwrap();
        assert!(prefs.alerts().is_empty());
        prefs.store().set(ALERTS_KEY, r#"{"Jakarta": true}"#).unwrap();
        assert!(prefs.alerts().is_empty());
    }

    #[test]
    fn alerts_persist_per_location() {
        let prefs = prefs();
        let config = AlertConfig {
            enabled: true,
            threshold_height: 1.7,
        };
        prefs.set_alert("Jakarta", config).unwrap();
        prefs
            .set_alert("Medan", AlertConfig::default())
            .unwrap();
        let book = prefs.alerts();
        assert_eq!(book.len(), 2);
        assert_eq!(book.get("Jakarta"), Some(&config));

        let book = prefs.remove_alert("Jakarta").unwrap();
        assert!(book.get("Jakarta").is_none());
        assert_eq!(prefs.alerts().len(), 1);
    }
}

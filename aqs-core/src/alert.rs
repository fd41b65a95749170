//! User-defined tide alerts.
//!
//! Configurations are persisted per location name. Whether an alert is
//! triggered is always derived from the current record and never stored.

use crate::tide::TideRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default threshold offered by the alert form, in metres.
pub const DEFAULT_THRESHOLD: f64 = 2.0;

/// Alert settings for a single location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertConfig {
    pub enabled: bool,
    pub threshold_height: f64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        AlertConfig {
            enabled: false,
            threshold_height: DEFAULT_THRESHOLD,
        }
    }
}

impl AlertConfig {
    /// A disabled alert never triggers, whatever the height.
    pub fn is_triggered(&self, height: f64) -> bool {
        self.enabled && height >= self.threshold_height
    }
}

/// All alert configurations, keyed by location name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertBook {
    entries: BTreeMap<String, AlertConfig>,
}

impl AlertBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, location: &str) -> Option<&AlertConfig> {
        self.entries.get(location)
    }

    /// Configuration for `location`, or the disabled default.
    pub fn config_for(&self, location: &str) -> AlertConfig {
        self.entries.get(location).copied().unwrap_or_default()
    }

    pub fn set(&mut self, location: &str, config: AlertConfig) {
        self.entries.insert(location.to_string(), config);
    }

    pub fn remove(&mut self, location: &str) -> Option<AlertConfig> {
        self.entries.remove(location)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AlertConfig)> {
        self.entries.iter()
    }

    /// Whether the record's location has an enabled alert at or below its height.
    pub fn is_triggered(&self, record: &TideRecord) -> bool {
        self.entries
            .get(&record.location)
            .is_some_and(|c| c.is_triggered(record.height))
    }

    /// Names of locations whose alerts fire for the given records.
    pub fn triggered<'a>(&self, records: &'a [TideRecord]) -> Vec<&'a str> {
        records
            .iter()
            .filter(|r| self.is_triggered(r))
            .map(|r| r.location.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tide::TideStatus;

    fn record(location: &str, height: f64) -> TideRecord {
        TideRecord {
            location: location.to_string(),
            status: TideStatus::Rising,
            height,
            next_high_time: "12:00".to_string(),
            next_low_time: "06:00".to_string(),
            monthly_avg_high: 2.0,
            monthly_avg_low: 0.5,
            past24h: Vec::new(),
        }
    }

    #[test]
    fn test_trigger_at_threshold() {
        let config = AlertConfig {
            enabled: true,
            threshold_height: 1.5,
        };
        assert!(config.is_triggered(1.5));
        assert!(config.is_triggered(2.4));
        assert!(!config.is_triggered(1.4));
    }

    #[test]
    fn test_disabled_never_triggers() {
        let config = AlertConfig {
            enabled: false,
            threshold_height: 0.0,
        };
        assert!(!config.is_triggered(2.5));
    }

    #[test]
    fn test_book_triggered_records() {
        let mut book = AlertBook::new();
        book.set(
            "Jakarta",
            AlertConfig {
                enabled: true,
                threshold_height: 1.0,
            },
        );
        book.set(
            "Medan",
            AlertConfig {
                enabled: false,
                threshold_height: 1.0,
            },
        );
        let records = vec![record("Jakarta", 1.2), record("Medan", 2.5), record("Manado", 2.5)];
        assert_eq!(book.triggered(&records), vec!["Jakarta"]);
        assert_eq!(book.config_for("Manado"), AlertConfig::default());
    }

    #[test]
    fn test_book_json_shape() {
        let mut book = AlertBook::new();
        book.set(
            "Semarang",
            AlertConfig {
                enabled: true,
                threshold_height: 1.8,
            },
        );
        let json = serde_json::to_string(&book).unwrap();
        assert_eq!(json, r#"{"Semarang":{"enabled":true,"thresholdHeight":1.8}}"#);
        let back: AlertBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
        assert!(book.remove("Semarang").is_some());
        assert!(book.is_empty());
    }
}

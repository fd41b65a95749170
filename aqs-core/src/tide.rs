//! Tide forecast record types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of hourly samples in a tide record's history.
pub const HISTORY_HOURS: usize = 24;

/// Current tide movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TideStatus {
    Rising,
    Falling,
    High,
    Low,
}

impl TideStatus {
    /// Status table indexed by `seed mod 4`.
    pub const TABLE: [TideStatus; 4] = [
        TideStatus::Rising,
        TideStatus::Falling,
        TideStatus::High,
        TideStatus::Low,
    ];

    pub fn from_seed(seed: u32) -> TideStatus {
        TideStatus::TABLE[(seed % 4) as usize]
    }

    /// Arrow glyph used by the tide card.
    pub fn symbol(&self) -> &'static str {
        match self {
            TideStatus::Rising => "↑",
            TideStatus::Falling => "↓",
            TideStatus::High => "▲",
            TideStatus::Low => "▼",
        }
    }
}

impl fmt::Display for TideStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TideStatus::Rising => write!(f, "Rising"),
            TideStatus::Falling => write!(f, "Falling"),
            TideStatus::High => write!(f, "High"),
            TideStatus::Low => write!(f, "Low"),
        }
    }
}

/// Synthetic tide measurement for one location on one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TideRecord {
    pub location: String,
    pub status: TideStatus,
    /// Current height in metres (0.8 - 2.5, one decimal).
    pub height: f64,
    /// Next high tide, "HH:MM".
    pub next_high_time: String,
    /// Next low tide, "HH:MM".
    pub next_low_time: String,
    pub monthly_avg_high: f64,
    pub monthly_avg_low: f64,
    /// Hourly heights for the past 24 hours, oldest first.
    pub past24h: Vec<f64>,
}

impl TideRecord {
    /// True when every seed-derived field matches, ignoring the noisy history.
    pub fn same_forecast(&self, other: &TideRecord) -> bool {
        self.location == other.location
            && self.status == other.status
            && self.height == other.height
            && self.next_high_time == other.next_high_time
            && self.next_low_time == other.next_low_time
            && self.monthly_avg_high == other.monthly_avg_high
            && self.monthly_avg_low == other.monthly_avg_low
    }
}

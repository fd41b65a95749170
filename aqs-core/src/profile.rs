//! Root-shell state types: theme, active panel and the session profile.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Colour theme, persisted as `"light"` or `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}', expected light or dark", other)),
        }
    }
}

/// Top-level dashboard panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Dashboard,
    Tides,
    News,
    Settings,
}

impl Panel {
    pub const ALL: [Panel; 4] = [Panel::Dashboard, Panel::Tides, Panel::News, Panel::Settings];

    pub fn label(&self) -> &'static str {
        match self {
            Panel::Dashboard => "Dashboard",
            Panel::Tides => "Tides",
            Panel::News => "News",
            Panel::Settings => "Settings",
        }
    }
}

/// Name shown before the user sets one.
pub const DEFAULT_DISPLAY_NAME: &str = "Sentinel";

/// Local profile; lives only as long as the root shell.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub display_name: String,
    /// Picture as a `data:` URL read from a local file.
    pub picture_data: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            picture_data: None,
        }
    }
}

impl Profile {
    /// Replace the display name; blank input keeps the current one.
    pub fn rename(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.display_name = trimmed.to_string();
        true
    }

    /// Up to two initials for the avatar placeholder.
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

//! Local key-value persistence for Aqua Sentinel.
//!
//! The dashboard keeps two things across sessions: the theme and the
//! per-location alert configuration. Both are JSON strings under fixed keys
//! in a [`KeyValueStore`]:
//!
//! - in the browser, `window.localStorage` ([`BrowserStore`], wasm32 only)
//! - natively, a SQLite `kv` table ([`SqliteStore`]), in memory or on disk
//!
//! [`Preferences`] wraps either backend with typed accessors.
//!
//! # Usage
//!
//! ```rust
//! use aqs_core::profile::Theme;
//! use aqs_store::{Preferences, SqliteStore};
//!
//! let prefs = Preferences::new(SqliteStore::open_in_memory().unwrap());
//! prefs.set_theme(Theme::Dark).unwrap();
//! assert_eq!(prefs.theme(), Theme::Dark);
//! ```

mod error;
mod preferences;
pub mod schema;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(not(target_arch = "wasm32"))]
mod sqlite;

pub use error::StoreError;
pub use preferences::{Preferences, ALERTS_KEY, THEME_KEY};

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;
#[cfg(not(target_arch = "wasm32"))]
pub use sqlite::SqliteStore;

/// String key-value storage with `localStorage` semantics.
///
/// Methods take `&self`; implementations use interior mutability so a store
/// can be shared by clones in a single-threaded UI.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

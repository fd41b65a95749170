//! Theme and alert persistence for the UI.
//!
//! The browser build keeps preferences in `localStorage`; native builds (tests,
//! tooling) fall back to an in-memory SQLite store. The store is opened once
//! per thread and reused.

use aqs_core::alert::{AlertBook, AlertConfig};
use aqs_core::profile::Theme;
use aqs_store::Preferences;
use std::cell::RefCell;

#[cfg(target_arch = "wasm32")]
type UiStore = aqs_store::BrowserStore;
#[cfg(not(target_arch = "wasm32"))]
type UiStore = aqs_store::SqliteStore;

thread_local! {
    static PREFERENCES: RefCell<Option<Preferences<UiStore>>> = RefCell::new(None);
}

#[cfg(target_arch = "wasm32")]
fn open_store() -> Result<UiStore, aqs_store::StoreError> {
    aqs_store::BrowserStore::local()
}

#[cfg(not(target_arch = "wasm32"))]
fn open_store() -> Result<UiStore, aqs_store::StoreError> {
    aqs_store::SqliteStore::open_in_memory()
}

fn with_preferences<T>(f: impl FnOnce(&Preferences<UiStore>) -> T) -> Option<T> {
    PREFERENCES.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            match open_store() {
                Ok(store) => *slot = Some(Preferences::new(store)),
                Err(e) => {
                    log::warn!("[AQS] persist: storage unavailable: {}", e);
                    return None;
                }
            }
        }
        slot.as_ref().map(f)
    })
}

pub fn load_theme() -> Theme {
    with_preferences(|p| p.theme()).unwrap_or_default()
}

pub fn save_theme(theme: Theme) {
    if let Some(Err(e)) = with_preferences(|p| p.set_theme(theme)) {
        log::warn!("[AQS] persist: could not save theme: {}", e);
    }
}

pub fn load_alerts() -> AlertBook {
    with_preferences(|p| p.alerts()).unwrap_or_default()
}

/// Persist `config` for `location`; returns the book to show, saved or not.
pub fn save_alert(current: &AlertBook, location: &str, config: AlertConfig) -> AlertBook {
    match with_preferences(|p| p.set_alert(location, config)) {
        Some(Ok(book)) => book,
        other => {
            if let Some(Err(e)) = other {
                log::warn!("[AQS] persist: could not save alert: {}", e);
            }
            let mut book = current.clone();
            book.set(location, config);
            book
        }
    }
}

pub fn remove_alert(current: &AlertBook, location: &str) -> AlertBook {
    match with_preferences(|p| p.remove_alert(location)) {
        Some(Ok(book)) => book,
        other => {
            if let Some(Err(e)) = other {
                log::warn!("[AQS] persist: could not remove alert: {}", e);
            }
            let mut book = current.clone();
            book.remove(location);
            book
        }
    }
}

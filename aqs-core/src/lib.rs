//! Core domain types shared by the Aqua Sentinel generator, store, CLI and UI.

pub mod alert;
pub mod gauge;
pub mod location;
pub mod news;
pub mod profile;
pub mod tide;

//! Data generation and transform math for the Aqua Sentinel dashboard.
//!
//! Nothing here talks to a sensor: every measurement is derived from a
//! (location, date) seed so that the dashboard, the CLI and the tests agree
//! on what a given city looks like on a given day.
//!
//! - `seed`: the location/date hash
//! - `tide`: tide records and multi-day forecasts
//! - `water_level`: seeded base level plus a mean-reverting random walk
//! - `pan_zoom`: view transform state machine for the map widget

pub mod error;
pub mod pan_zoom;
pub mod seed;
pub mod tide;
pub mod water_level;

pub use error::GeneratorError;

/// Reproducible jitter source for tests and `--noise-seed`.
pub fn seeded_rng(seed: u64) -> rand::rngs::StdRng {
    rand::SeedableRng::seed_from_u64(seed)
}

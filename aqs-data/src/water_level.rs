//! Simulated water-level gauge.
//!
//! Each (location, date) seeds a base level. The live reading starts at the
//! base and is perturbed on every tick by a bounded random step plus a pull
//! back toward the base.

use crate::error::GeneratorError;
use crate::seed::water_level_seed;
use aqs_core::gauge::{GaugeLevel, LEVEL_MAX, LEVEL_MIN};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Gauge refresh period in milliseconds.
pub const REFRESH_INTERVAL_MS: u32 = 3_000;
/// Largest random step per tick, in percent.
pub const WALK_STEP: f64 = 2.0;
/// Fraction of the distance to the base recovered per tick.
pub const REVERSION: f64 = 0.1;
/// Samples kept for the gauge trend line.
pub const TREND_LEN: usize = 20;

/// `20 + (seed * 37) mod 60`, a percentage in [20, 79].
pub fn base_level(location: &str, date: &NaiveDate) -> Result<f64, GeneratorError> {
    let seed = water_level_seed(location, date)?;
    Ok(20.0 + ((seed as u64 * 37) % 60) as f64)
}

/// One random-walk step from `current` toward `base`.
pub fn step(current: f64, base: f64, jitter: f64) -> f64 {
    (current + jitter + (base - current) * REVERSION).clamp(LEVEL_MIN, LEVEL_MAX)
}

#[derive(Debug, Clone)]
pub struct WaterLevelSimulator<R: Rng = StdRng> {
    location: String,
    date: NaiveDate,
    base: f64,
    current: f64,
    trend: VecDeque<f64>,
    rng: R,
}

impl WaterLevelSimulator<StdRng> {
    /// Simulator seeded from the OS entropy source.
    pub fn new(location: &str, date: NaiveDate) -> Result<Self, GeneratorError> {
        Self::with_rng(location, date, StdRng::from_os_rng())
    }
}

impl<R: Rng> WaterLevelSimulator<R> {
    pub fn with_rng(location: &str, date: NaiveDate, rng: R) -> Result<Self, GeneratorError> {
        let base = base_level(location, &date)?;
        let mut trend = VecDeque::with_capacity(TREND_LEN);
        trend.push_back(base);
        Ok(WaterLevelSimulator {
            location: location.to_string(),
            date,
            base,
            current: base,
            trend,
            rng,
        })
    }

    /// Start over from the base of a new location/date.
    pub fn reseed(&mut self, location: &str, date: NaiveDate) -> Result<(), GeneratorError> {
        let base = base_level(location, &date)?;
        log::debug!(
            "[AQS] water_level: reseed {} {} base={:.0}",
            location,
            date,
            base
        );
        self.location = location.to_string();
        self.date = date;
        self.base = base;
        self.current = base;
        self.trend.clear();
        self.trend.push_back(base);
        Ok(())
    }

    /// Advance one refresh interval and return the new reading.
    pub fn tick(&mut self) -> f64 {
        let jitter = self.rng.random_range(-WALK_STEP..=WALK_STEP);
        self.current = step(self.current, self.base, jitter);
        if self.trend.len() == TREND_LEN {
            self.trend.pop_front();
        }
        self.trend.push_back(self.current);
        self.current
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn level(&self) -> GaugeLevel {
        GaugeLevel::classify(self.current)
    }

    /// Recent readings, oldest first.
    pub fn trend(&self) -> Vec<f64> {
        self.trend.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeded_rng;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
    }

    #[test]
    fn test_base_is_seeded_and_bounded() {
        let a = base_level("Surabaya", &date()).unwrap();
        let b = base_level("Surabaya", &date()).unwrap();
        assert_eq!(a, b);
        assert!((20.0..80.0).contains(&a));
        assert!(base_level("", &date()).is_err());
    }

    #[test]
    fn test_walk_stays_in_bounds() {
        let mut sim = WaterLevelSimulator::with_rng("Jakarta", date(), seeded_rng(5)).unwrap();
        for _ in 0..5_000 {
            let level = sim.tick();
            assert!((LEVEL_MIN..=LEVEL_MAX).contains(&level));
        }
        assert_eq!(sim.trend().len(), TREND_LEN);
    }

    #[test]
    fn test_walk_reverts_toward_base() {
        // Without jitter the distance to the base shrinks every tick.
        let base = 40.0;
        let mut level = 90.0;
        for _ in 0..50 {
            let next = step(level, base, 0.0);
            assert!((next - base).abs() < (level - base).abs());
            level = next;
        }
        assert!((level - base).abs() < 1.0);
    }

    #[test]
    fn test_step_clamps_extremes() {
        assert_eq!(step(99.5, 99.0, 2.0), LEVEL_MAX);
        assert_eq!(step(0.5, 1.0, -2.0), LEVEL_MIN);
    }

    #[test]
    fn test_reseed_resets_reading() {
        let mut sim = WaterLevelSimulator::with_rng("Medan", date(), seeded_rng(2)).unwrap();
        for _ in 0..10 {
            sim.tick();
        }
        sim.reseed("Manado", date()).unwrap();
        assert_eq!(sim.location(), "Manado");
        assert_eq!(sim.current(), base_level("Manado", &date()).unwrap());
        assert_eq!(sim.trend(), vec![sim.base()]);
        assert!(sim.reseed("", date()).is_err());
        assert_eq!(sim.location(), "Manado");
    }
}

//! Location/date seed hashing.
//!
//! Seeds use calendar fields only (`NaiveDate`), never an instant, so a
//! date picked in the UI hashes identically in every timezone.

use crate::error::GeneratorError;
use chrono::{Datelike, NaiveDate};

/// Character code at `index`, or 0 when the location is shorter.
pub fn char_code(location: &str, index: usize) -> u32 {
    location.chars().nth(index).map(u32::from).unwrap_or(0)
}

/// `day + month0 * 31 + code(location[0]) + code(location[1])`.
///
/// The month is zero-based (January = 0).
pub fn tide_seed(location: &str, date: &NaiveDate) -> Result<u32, GeneratorError> {
    if location.is_empty() {
        return Err(GeneratorError::InvalidArgument(
            "location must not be empty".to_string(),
        ));
    }
    Ok(date.day() + date.month0() * 31 + char_code(location, 0) + char_code(location, 1))
}

/// Tide seed plus the calendar year.
pub fn water_level_seed(location: &str, date: &NaiveDate) -> Result<u32, GeneratorError> {
    let seed = tide_seed(location, date)?;
    Ok(seed.wrapping_add(date.year() as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tide_seed_formula() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        // 'J' = 74, 'a' = 97, March -> month0 = 2
        assert_eq!(tide_seed("Jakarta", &date).unwrap(), 9 + 2 * 31 + 74 + 97);
        assert_eq!(
            water_level_seed("Jakarta", &date).unwrap(),
            9 + 2 * 31 + 74 + 97 + 2024
        );
    }

    #[test]
    fn test_single_char_location_uses_zero() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(tide_seed("J", &date).unwrap(), 1 + 74);
        assert_eq!(char_code("J", 1), 0);
    }

    #[test]
    fn test_empty_location_is_invalid() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(matches!(
            tide_seed("", &date),
            Err(GeneratorError::InvalidArgument(_))
        ));
        assert!(water_level_seed("", &date).is_err());
    }
}

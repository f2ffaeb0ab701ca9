use std::{ops::RangeInclusive, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    BOUNDS_SEPARATOR, CalendarError, CalendarSystem, DEFAULT_MAX_NAV_YEAR, DEFAULT_MIN_NAV_YEAR,
    MAX_JALALI_YEAR, MIN_JALALI_YEAR, prelude::*,
};

/// Inclusive window of Solar Hijri years a navigation cursor may visit.
/// The minimum must be less than or equal to the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{min}..{max}")]
pub struct YearBounds {
    min: u16,
    max: u16,
}

/// Error type for year window construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoundsError {
    /// Minimum year is after maximum year.
    #[error("Invalid year bounds: min ({min}) is after max ({max})")]
    InvalidBounds { min: u16, max: u16 },

    /// A bound lies outside the supported Solar Hijri years.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Invalid bounds format.
    #[error("Invalid bounds format: {0}")]
    InvalidFormat(String),
}

impl YearBounds {
    /// Creates a new year window with validation.
    ///
    /// # Errors
    /// Returns `BoundsError::InvalidBounds` if min > max and
    /// `BoundsError::Calendar` if either bound is outside the supported years.
    pub fn new(min: u16, max: u16) -> Result<Self, BoundsError> {
        for year in [min, max] {
            if !(MIN_JALALI_YEAR..=MAX_JALALI_YEAR).contains(&year) {
                return Err(CalendarError::OutOfSupportedRange {
                    system: CalendarSystem::SolarHijri,
                    year:   i64::from(year),
                }
                .into());
            }
        }
        if min > max {
            return Err(BoundsError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the lowest allowed year
    pub const fn min(&self) -> u16 {
        self.min
    }

    /// Returns the highest allowed year
    pub const fn max(&self) -> u16 {
        self.max
    }

    /// Returns the window as a range of years
    pub const fn years(&self) -> RangeInclusive<u16> {
        self.min..=self.max
    }

    /// Checks if the window contains `year`
    pub const fn contains(&self, year: u16) -> bool {
        self.min <= year && year <= self.max
    }

    /// Pins `year` to the nearest bound when it falls outside the window.
    /// Takes a wide integer so callers can clamp after unchecked arithmetic.
    pub fn clamp(&self, year: i64) -> u16 {
        let clamped = year.clamp(i64::from(self.min), i64::from(self.max));
        // in range by construction
        u16::try_from(clamped).unwrap_or(self.min)
    }
}

impl Default for YearBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_NAV_YEAR,
            max: DEFAULT_MAX_NAV_YEAR,
        }
    }
}

impl FromStr for YearBounds {
    type Err = BoundsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(BOUNDS_SEPARATOR).count();

        match separator_count {
            0 => Err(BoundsError::InvalidFormat(format!(
                "No bounds separator found (expected '{BOUNDS_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (min_str, max_str) = trimmed.split_once(BOUNDS_SEPARATOR).ok_or_else(|| {
                    BoundsError::InvalidFormat(format!(
                        "Separator '{BOUNDS_SEPARATOR}' not found despite count == 1"
                    ))
                })?;

                let parse = |part: &str| {
                    part.trim()
                        .parse::<u16>()
                        .map_err(|_| BoundsError::InvalidFormat(format!("Not a year: {part:?}")))
                };

                Self::new(parse(min_str)?, parse(max_str)?)
            },
            _ => Err(BoundsError::InvalidFormat(format!(
                "Too many '{BOUNDS_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for YearBounds {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearBounds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::bounds;

    #[test]
    fn test_new_bounds_cases() {
        struct TestCase {
            min:            u16,
            max:            u16,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                min:            1404,
                max:            1430,
                should_succeed: true,
                description:    "valid window (min < max)",
            },
            TestCase {
                min:            1430,
                max:            1404,
                should_succeed: false,
                description:    "inverted window (min > max)",
            },
            TestCase {
                min:            1404,
                max:            1404,
                should_succeed: true,
                description:    "single-year window",
            },
            TestCase {
                min:            0,
                max:            1404,
                should_succeed: false,
                description:    "year zero",
            },
            TestCase {
                min:            1404,
                max:            4000,
                should_succeed: false,
                description:    "beyond the supported years",
            },
        ];

        for case in &cases {
            let result = YearBounds::new(case.min, case.max);

            if case.should_succeed {
                assert!(result.is_ok(), "Expected success for: {}", case.description);
            } else {
                assert!(result.is_err(), "Expected failure for: {}", case.description);
            }
        }
    }

    #[test]
    fn test_error_kinds() {
        assert!(matches!(
            YearBounds::new(1430, 1404),
            Err(BoundsError::InvalidBounds {
                min: 1430,
                max: 1404
            })
        ));
        assert!(matches!(
            YearBounds::new(1404, 4000),
            Err(BoundsError::Calendar(CalendarError::OutOfSupportedRange { year: 4000, .. }))
        ));
    }

    #[test]
    fn test_accessors() {
        let window = bounds(1404, 1430);
        assert_eq!(window.min(), 1404);
        assert_eq!(window.max(), 1430);
        assert_eq!(window.years(), 1404..=1430);
        assert!(window.contains(1404));
        assert!(window.contains(1430));
        assert!(!window.contains(1403));
        assert!(!window.contains(1431));
    }

    #[test]
    fn test_clamp() {
        let window = bounds(1404, 1430);
        assert_eq!(window.clamp(1410), 1410);
        assert_eq!(window.clamp(1431), 1430);
        assert_eq!(window.clamp(1403), 1404);
        assert_eq!(window.clamp(-5), 1404);
        assert_eq!(window.clamp(i64::MAX), 1430);
    }

    #[test]
    fn test_default_is_observed_window() {
        assert_eq!(YearBounds::default(), bounds(1404, 1430));
    }

    #[test]
    fn test_parse() {
        assert_eq!("1404..1430".parse::<YearBounds>().unwrap(), bounds(1404, 1430));
        assert_eq!(" 1390 .. 1400 ".parse::<YearBounds>().unwrap(), bounds(1390, 1400));

        assert!(matches!(
            "1404".parse::<YearBounds>(),
            Err(BoundsError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1404..1410..1430".parse::<YearBounds>(),
            Err(BoundsError::InvalidFormat(_))
        ));
        assert!(matches!(
            "abc..1430".parse::<YearBounds>(),
            Err(BoundsError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1430..1404".parse::<YearBounds>(),
            Err(BoundsError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(bounds(1404, 1430).to_string(), "1404..1430");
    }

    #[test]
    fn test_serde() {
        let window = bounds(1404, 1430);
        let json = serde_json::to_string(&window).unwrap();
        assert_eq!(json, r#""1404..1430""#);
        let parsed: YearBounds = serde_json::from_str(&json).unwrap();
        assert_eq!(window, parsed);

        let result: Result<YearBounds, _> = serde_json::from_str(r#""1430..1404""#);
        assert!(result.is_err());
    }
}

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// The calendar a set of date components belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarSystem {
    /// Proleptic Gregorian calendar
    #[display(fmt = "gregorian")]
    Gregorian,
    /// Solar Hijri (Jalali / Persian) calendar
    #[display(fmt = "solar_hijri")]
    SolarHijri,
}

impl CalendarSystem {
    /// Returns the other calendar system
    pub const fn other(self) -> Self {
        match self {
            Self::Gregorian => Self::SolarHijri,
            Self::SolarHijri => Self::Gregorian,
        }
    }
}

/// A year value in the range `1..=MAX_YEAR`.
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
///
/// Whether the year is inside the supported conversion range depends on the
/// calendar and is checked by [`crate::math`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, returning `None` if the value is 0 or > `MAX_YEAR`
    pub const fn new(value: u16) -> Option<Self> {
        if value > MAX_YEAR {
            return None;
        }
        match NonZeroU16::new(value) {
            Some(non_zero) => Some(Self(non_zero)),
            None => None,
        }
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value in the range `1..=MAX_MONTH` (1..=12), in either calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, returning `None` if the value is 0 or > `MAX_MONTH`
    pub const fn new(value: u8) -> Option<Self> {
        if value > MAX_MONTH {
            return None;
        }
        match NonZeroU8::new(value) {
            Some(non_zero) => Some(Self(non_zero)),
            None => None,
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day-of-month value. Only non-zero is enforced here; the upper bound
/// depends on year, month and calendar and is checked by [`crate::math`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, returning `None` for 0
    pub const fn new(value: u8) -> Option<Self> {
        match NonZeroU8::new(value) {
            Some(non_zero) => Some(Self(non_zero)),
            None => None,
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Gregorian helpers

pub const fn is_gregorian_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in a Gregorian month, or `None` when the month is not 1-12.
pub const fn days_in_gregorian_month(year: u16, month: u8) -> Option<u8> {
    if month == 0 || month > MAX_MONTH {
        return None;
    }

    if month == FEBRUARY && is_gregorian_leap_year(year) {
        Some(FEBRUARY_DAYS_LEAP)
    } else {
        Some(DAYS_IN_MONTH[month as usize])
    }
}

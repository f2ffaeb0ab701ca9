//! Dual-calendar engine for Gregorian and Solar Hijri (Jalali) dates.
//!
//! - [`math`] converts between the calendars through Julian day numbers.
//! - [`canonical`] classifies ambiguous `YYYY-MM-DD` text by year band.
//! - [`format`] renders display and storage strings.
//! - [`grid`] builds fixed 42-cell month grids.
//! - [`navigation`] steps a caller-owned month cursor inside a [`YearBounds`] window.

mod bounds;
pub mod canonical;
mod consts;
pub mod format;
pub mod grid;
pub mod math;
pub mod navigation;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;

pub use bounds::{BoundsError, YearBounds};
pub use consts::*;
pub use grid::{GridCell, MonthGrid};
pub use navigation::NavigationState;
pub use types::{CalendarSystem, Day, Month, Year, days_in_gregorian_month, is_gregorian_leap_year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// A validated date in one of the two supported calendars.
///
/// Values can only be built through validating constructors, so every
/// `CalendarDate` is a real day inside the supported conversion range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
#[serde(try_from = "DateRecord", into = "DateRecord")]
pub struct CalendarDate {
    year:   Year,
    month:  Month,
    day:    Day,
    system: CalendarSystem,
}

/// Errors produced by every fallible operation of the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Month or day outside the valid range for the (possibly leap) year.
    /// Month and day are carried as written, even when they do not fit a `u8`.
    #[error("Invalid {system} date components: {year:04}-{month:02}-{day:02}")]
    InvalidDateComponents {
        system: CalendarSystem,
        year:   u16,
        month:  u32,
        day:    u32,
    },

    /// Text does not split into three numeric components.
    #[error("Invalid date text: {0:?}")]
    InvalidDateText(String),

    /// Year lies outside both trusted classification bands.
    #[error("Ambiguous year {0}: not in 1300-1500 (solar hijri) or 1900-2100 (gregorian)")]
    AmbiguousYear(u32),

    /// Year lies outside the range the conversion arithmetic is correct for.
    #[error("Year {year} is outside the supported {system} range")]
    OutOfSupportedRange { system: CalendarSystem, year: i64 },
}

impl CalendarDate {
    /// Creates a date, validating the components for `system` and the
    /// supported conversion range.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDateComponents` or
    /// `CalendarError::OutOfSupportedRange`.
    pub fn new(year: u16, month: u8, day: u8, system: CalendarSystem) -> Result<Self, CalendarError> {
        match system {
            CalendarSystem::Gregorian => math::validate_gregorian(year, month, day)?,
            CalendarSystem::SolarHijri => math::validate_jalali(year, month, day)?,
        }

        let invalid = || CalendarError::InvalidDateComponents {
            system,
            year,
            month: u32::from(month),
            day: u32::from(day),
        };
        Ok(Self {
            year: Year::new(year).ok_or_else(invalid)?,
            month: Month::new(month).ok_or_else(invalid)?,
            day: Day::new(day).ok_or_else(invalid)?,
            system,
        })
    }

    /// Creates a Solar Hijri date
    ///
    /// # Errors
    /// See [`CalendarDate::new`].
    pub fn jalali(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::new(year, month, day, CalendarSystem::SolarHijri)
    }

    /// Creates a Gregorian date
    ///
    /// # Errors
    /// See [`CalendarDate::new`].
    pub fn gregorian(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::new(year, month, day, CalendarSystem::Gregorian)
    }

    /// Creates a date from a Julian day number.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfSupportedRange` outside the supported window.
    pub fn from_day_number(jdn: i64, system: CalendarSystem) -> Result<Self, CalendarError> {
        let (year, month, day) = match system {
            CalendarSystem::Gregorian => math::gregorian_from_day_number(jdn)?,
            CalendarSystem::SolarHijri => math::jalali_from_day_number(jdn)?,
        };
        Self::new(year, month, day, system)
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component (1-12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the calendar the components belong to
    pub const fn system(&self) -> CalendarSystem {
        self.system
    }

    /// Returns `(year, month, day)`
    pub const fn to_components(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }

    /// Julian day number of this date.
    ///
    /// # Errors
    /// Only fails if the value was built around the validating constructors.
    pub fn day_number(&self) -> Result<i64, CalendarError> {
        let (year, month, day) = self.to_components();
        match self.system {
            CalendarSystem::Gregorian => math::gregorian_day_number(year, month, day),
            CalendarSystem::SolarHijri => math::jalali_day_number(year, month, day),
        }
    }

    /// Converts the date into `target`, returning it unchanged when it is
    /// already in that calendar.
    ///
    /// # Errors
    /// Propagates conversion errors from [`math`].
    pub fn to_system(&self, target: CalendarSystem) -> Result<Self, CalendarError> {
        if self.system == target {
            return Ok(*self);
        }
        Self::from_day_number(self.day_number()?, target)
    }

    /// Converts the date to Solar Hijri.
    ///
    /// # Errors
    /// Propagates conversion errors from [`math`].
    pub fn to_jalali(&self) -> Result<Self, CalendarError> {
        self.to_system(CalendarSystem::SolarHijri)
    }

    /// Converts the date to Gregorian.
    ///
    /// # Errors
    /// Propagates conversion errors from [`math`].
    pub fn to_gregorian(&self) -> Result<Self, CalendarError> {
        self.to_system(CalendarSystem::Gregorian)
    }

    /// Weekday index, 0 = Saturday through 6 = Friday.
    ///
    /// # Errors
    /// Propagates conversion errors from [`math`].
    pub fn weekday(&self) -> Result<u8, CalendarError> {
        self.day_number().map(math::weekday_of_day_number)
    }

    /// Returns today's local date in Solar Hijri.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfSupportedRange` if the system clock is
    /// outside the supported window.
    pub fn today() -> Result<Self, CalendarError> {
        use chrono::Datelike;

        let today = chrono::Local::now().date_naive();
        let year = u16::try_from(today.year()).map_err(|_| CalendarError::OutOfSupportedRange {
            system: CalendarSystem::Gregorian,
            year: i64::from(today.year()),
        })?;
        // chrono guarantees month 1-12 and day 1-31
        let month = u8::try_from(today.month()).unwrap_or_default();
        let day = u8::try_from(today.day()).unwrap_or_default();
        Self::gregorian(year, month, day)?.to_jalali()
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare the actual day first…
        let a = self.day_number().ok();
        let b = other.day_number().ok();
        match a.cmp(&b) {
            // …then break ties between equivalent dates by calendar.
            Ordering::Equal => self.system.cmp(&other.system),
            ord => ord,
        }
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        canonical::parse(s)
    }
}

/// Serialized shape of a [`CalendarDate`]; deserialization re-validates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct DateRecord {
    year:   u16,
    month:  u8,
    day:    u8,
    system: CalendarSystem,
}

impl TryFrom<DateRecord> for CalendarDate {
    type Error = CalendarError;

    fn try_from(record: DateRecord) -> Result<Self, Self::Error> {
        Self::new(record.year, record.month, record.day, record.system)
    }
}

impl From<CalendarDate> for DateRecord {
    fn from(date: CalendarDate) -> Self {
        Self {
            year:   date.year(),
            month:  date.month(),
            day:    date.day(),
            system: date.system,
        }
    }
}

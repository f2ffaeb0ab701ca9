//! Bounded month cursor for pickers and calendar views.
//!
//! The cursor is a plain value owned by each view; stepping returns a new
//! value. At the edges of the [`YearBounds`] window the month keeps rolling
//! while the year stays pinned, so stepping forward from Esfand of the last
//! year lands on Farvardin of that same year.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CalendarDate, CalendarError, CalendarSystem, MAX_MONTH, Month, YearBounds, prelude::*};

/// Displayed Solar Hijri `(year, month)` of a calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}", "year", "month.get()")]
#[serde(try_from = "StateRecord", into = "StateRecord")]
pub struct NavigationState {
    year:  u16,
    month: Month,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct StateRecord {
    year:  u16,
    month: u8,
}

impl NavigationState {
    /// Creates a cursor, pinning `year` into `bounds`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDateComponents` if `month` is not 1-12.
    pub fn new(year: u16, month: u8, bounds: YearBounds) -> Result<Self, CalendarError> {
        let month = Month::new(month).ok_or(CalendarError::InvalidDateComponents {
            system: CalendarSystem::SolarHijri,
            year,
            month: u32::from(month),
            day: 1,
        })?;
        Ok(Self {
            year: bounds.clamp(i64::from(year)),
            month,
        })
    }

    /// Returns the displayed year
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the displayed month (1-12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// One month forward
    pub fn next(self, bounds: YearBounds) -> Self {
        step(self, 1, bounds)
    }

    /// One month back
    pub fn previous(self, bounds: YearBounds) -> Self {
        step(self, -1, bounds)
    }
}

impl TryFrom<StateRecord> for NavigationState {
    type Error = CalendarError;

    fn try_from(record: StateRecord) -> Result<Self, Self::Error> {
        let month = Month::new(record.month).ok_or(CalendarError::InvalidDateComponents {
            system: CalendarSystem::SolarHijri,
            year:   record.year,
            month:  u32::from(record.month),
            day:    1,
        })?;
        Ok(Self {
            year: record.year,
            month,
        })
    }
}

impl From<NavigationState> for StateRecord {
    fn from(state: NavigationState) -> Self {
        Self {
            year:  state.year,
            month: state.month(),
        }
    }
}

/// Rolls the month by `delta_months`, carrying into the year, then pins the
/// year into `bounds`. The month is not corrected when the year is pinned.
pub fn step(state: NavigationState, delta_months: i32, bounds: YearBounds) -> NavigationState {
    let months = i64::from(MAX_MONTH);
    let total = i64::from(state.month()) - 1 + i64::from(delta_months);
    let year = i64::from(state.year) + total.div_euclid(months);
    let month = u8::try_from(total.rem_euclid(months) + 1).unwrap_or(MAX_MONTH);

    let pinned = bounds.clamp(year);
    if i64::from(pinned) != year {
        debug!(year, pinned, month, %bounds, "navigation year pinned at bound");
    }

    NavigationState {
        year:  pinned,
        month: Month::new(month).unwrap_or(state.month),
    }
}

/// Cursor positioned on the month containing `date`, pinned into `bounds`.
///
/// # Errors
/// Propagates conversion errors for Gregorian input.
pub fn jump_to(date: &CalendarDate, bounds: YearBounds) -> Result<NavigationState, CalendarError> {
    let jalali = date.to_jalali()?;
    NavigationState::new(jalali.year(), jalali.month(), bounds)
}

/// Cursor positioned on the current local month, pinned into `bounds`.
///
/// # Errors
/// Returns `CalendarError::OutOfSupportedRange` if the system clock is
/// outside the supported window.
pub fn jump_to_today(bounds: YearBounds) -> Result<NavigationState, CalendarError> {
    jump_to(&CalendarDate::today()?, bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{bounds, gregorian, jalali, state};

    #[test]
    fn test_step_within_year() {
        let window = bounds(1404, 1430);
        let s = state(1410, 5, window);
        assert_eq!(step(s, 1, window), state(1410, 6, window));
        assert_eq!(step(s, -1, window), state(1410, 4, window));
        assert_eq!(step(s, 0, window), s);
    }

    #[test]
    fn test_step_carries_year() {
        let window = bounds(1404, 1430);
        assert_eq!(step(state(1410, 12, window), 1, window), state(1411, 1, window));
        assert_eq!(step(state(1410, 1, window), -1, window), state(1409, 12, window));
        assert_eq!(step(state(1410, 6, window), 25, window), state(1412, 7, window));
        assert_eq!(step(state(1410, 6, window), -18, window), state(1408, 12, window));
    }

    #[test]
    fn test_step_pins_year_at_upper_bound() {
        let window = bounds(1404, 1430);
        let next = step(state(1430, 12, window), 1, window);
        assert_eq!(next.year(), 1430);
        assert_eq!(next.month(), 1);
    }

    #[test]
    fn test_step_pins_year_at_lower_bound() {
        let window = bounds(1404, 1430);
        let previous = step(state(1404, 1, window), -1, window);
        assert_eq!(previous.year(), 1404);
        assert_eq!(previous.month(), 12);
    }

    #[test]
    fn test_step_far_outside_window() {
        let window = bounds(1404, 1430);
        let s = step(state(1420, 3, window), 10_000, window);
        assert_eq!(s.year(), 1430);
        assert!((1..=12).contains(&s.month()));
        let s = step(state(1420, 3, window), i32::MIN, window);
        assert_eq!(s.year(), 1404);
    }

    #[test]
    fn test_next_and_previous() {
        let window = bounds(1404, 1430);
        let s = state(1404, 12, window);
        assert_eq!(s.next(window), state(1405, 1, window));
        assert_eq!(s.next(window).previous(window), s);
    }

    #[test]
    fn test_new_pins_year() {
        let window = bounds(1404, 1430);
        assert_eq!(state(1390, 7, window).year(), 1404);
        assert_eq!(state(1450, 7, window).year(), 1430);
        assert!(matches!(
            NavigationState::new(1404, 13, window),
            Err(CalendarError::InvalidDateComponents { .. })
        ));
    }

    #[test]
    fn test_jump_to() {
        let window = bounds(1404, 1430);
        assert_eq!(jump_to(&jalali(1410, 8, 3), window).unwrap(), state(1410, 8, window));
        assert_eq!(
            jump_to(&gregorian(2026, 10, 19), window).unwrap(),
            state(1405, 7, window)
        );
        // Before the window: month kept, year pinned
        assert_eq!(jump_to(&jalali(1399, 3, 1), window).unwrap(), state(1404, 3, window));
    }

    #[test]
    fn test_jump_to_today_within_bounds() {
        let window = bounds(1404, 1430);
        let s = jump_to_today(window).unwrap();
        assert!(window.contains(s.year()));
        assert!((1..=12).contains(&s.month()));
    }

    #[test]
    fn test_display_and_serde() {
        let window = YearBounds::default();
        let s = state(1404, 7, window);
        assert_eq!(s.to_string(), "1404-07");

        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"year":1404,"month":7}"#);
        let parsed: NavigationState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, s);

        let result: Result<NavigationState, _> = serde_json::from_str(r#"{"year":1404,"month":0}"#);
        assert!(result.is_err());
    }
}

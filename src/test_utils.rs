//! Shared constructors for unit tests.

use crate::{CalendarDate, NavigationState, YearBounds};

pub fn jalali(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::jalali(year, month, day).expect("valid solar hijri test date")
}

pub fn gregorian(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::gregorian(year, month, day).expect("valid gregorian test date")
}

pub fn bounds(min: u16, max: u16) -> YearBounds {
    YearBounds::new(min, max).expect("valid test bounds")
}

pub fn state(year: u16, month: u8, within: YearBounds) -> NavigationState {
    NavigationState::new(year, month, within).expect("valid navigation state")
}

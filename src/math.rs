//! Gregorian <-> Solar Hijri arithmetic.
//!
//! Every conversion goes through a Julian day number (JDN): the source date
//! is turned into a day count and the day count into the target date. The
//! Solar Hijri side uses the 33-year cycle with re-anchoring break years, and
//! the leap rule is derived from the same routine as the conversions so the
//! two cannot disagree.
//!
//! All functions operate on plain calendar integers, never on zoned instants.

use crate::consts::{
    ESFAND_DAYS_LEAP, FIRST_MONTH, JALALI_BREAKS, JALALI_DAYS_IN_MONTH, JALALI_EPOCH_OFFSET,
    LAST_MONTH, MAX_JALALI_YEAR, MAX_MONTH, MIN_DAY, MIN_JALALI_YEAR,
};
use crate::types::days_in_gregorian_month;
use crate::{CalendarError, CalendarSystem};

/// JDN of 1 Farvardin 1 (Gregorian 622-03-22)
pub const MIN_DAY_NUMBER: i64 = 1_948_321;
/// JDN of the last day of Esfand 3176 (Gregorian 3798-03-19)
pub const MAX_DAY_NUMBER: i64 = 3_108_329;

/// Position of a Solar Hijri year inside its leap cycle.
struct YearInfo {
    /// 0 for a leap year, otherwise years since the last leap year (1-4)
    leap:           i64,
    /// Gregorian year in which the Solar Hijri year begins
    gregorian_year: i64,
    /// Day of March on which 1 Farvardin falls
    march_day:      i64,
}

fn year_info(year: i64) -> Result<YearInfo, CalendarError> {
    let last_break = JALALI_BREAKS[JALALI_BREAKS.len() - 1];
    if year < JALALI_BREAKS[0] || year >= last_break {
        return Err(CalendarError::OutOfSupportedRange {
            system: CalendarSystem::SolarHijri,
            year,
        });
    }

    let gregorian_year = year + JALALI_EPOCH_OFFSET;
    let mut leap_jalali: i64 = -14;
    let mut previous_break = JALALI_BREAKS[0];
    let mut jump = 0;

    for &next_break in &JALALI_BREAKS[1..] {
        jump = next_break - previous_break;
        if year < next_break {
            break;
        }
        leap_jalali += jump / 33 * 8 + (jump % 33) / 4;
        previous_break = next_break;
    }

    let mut n = year - previous_break;
    leap_jalali += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_jalali += 1;
    }

    let leap_gregorian = gregorian_year / 4 - (gregorian_year / 100 + 1) * 3 / 4 - 150;
    let march_day = 20 + leap_jalali - leap_gregorian;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Ok(YearInfo {
        leap,
        gregorian_year,
        march_day,
    })
}

/// Gregorian components to JDN; valid for any proleptic Gregorian date.
const fn gregorian_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    let shift = (month - 8) / 6;
    let d = (year + shift + 100_100) * 1461 / 4 + (153 * ((month + 9) % 12) + 2) / 5 + day
        - 34_840_408;
    d - (year + 100_100 + shift) / 100 * 3 / 4 + 752
}

const fn jdn_to_gregorian(jdn: i64) -> (i64, i64, i64) {
    let mut j = 4 * jdn + 139_361_631;
    j += (4 * jdn + 183_187_720) / 146_097 * 3 / 4 * 4 - 3908;
    let i = (j % 1461) / 4 * 5 + 308;
    let day = (i % 153) / 5 + 1;
    let month = (i / 153) % 12 + 1;
    let year = j / 1461 - 100_100 + (8 - month) / 6;
    (year, month, day)
}

fn jalali_to_jdn(year: i64, month: i64, day: i64) -> Result<i64, CalendarError> {
    let info = year_info(year)?;
    Ok(gregorian_to_jdn(info.gregorian_year, 3, info.march_day)
        + (month - 1) * 31
        - month / 7 * (month - 7)
        + day
        - 1)
}

fn jdn_to_jalali(jdn: i64) -> Result<(i64, i64, i64), CalendarError> {
    let (gregorian_year, _, _) = jdn_to_gregorian(jdn);
    let mut year = gregorian_year - JALALI_EPOCH_OFFSET;
    let info = year_info(year)?;
    let mut k = jdn - gregorian_to_jdn(gregorian_year, 3, info.march_day);

    if k >= 0 {
        if k <= 185 {
            return Ok((year, 1 + k / 31, k % 31 + 1));
        }
        k -= 186;
    } else {
        // still inside the previous Solar Hijri year
        year -= 1;
        k += 179;
        if info.leap == 1 {
            k += 1;
        }
    }
    Ok((year, 7 + k / 30, k % 30 + 1))
}

fn check_jalali_year(year: u16) -> Result<(), CalendarError> {
    if (MIN_JALALI_YEAR..=MAX_JALALI_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::OutOfSupportedRange {
            system: CalendarSystem::SolarHijri,
            year: i64::from(year),
        })
    }
}

fn invalid(system: CalendarSystem, year: u16, month: u8, day: u8) -> CalendarError {
    CalendarError::InvalidDateComponents {
        system,
        year,
        month: u32::from(month),
        day: u32::from(day),
    }
}

fn narrow(
    system: CalendarSystem,
    (year, month, day): (i64, i64, i64),
) -> Result<(u16, u8, u8), CalendarError> {
    let out_of_range = || CalendarError::OutOfSupportedRange { system, year };
    Ok((
        u16::try_from(year).map_err(|_| out_of_range())?,
        u8::try_from(month).map_err(|_| out_of_range())?,
        u8::try_from(day).map_err(|_| out_of_range())?,
    ))
}

fn check_day_number(system: CalendarSystem, jdn: i64) -> Result<(), CalendarError> {
    if (MIN_DAY_NUMBER..=MAX_DAY_NUMBER).contains(&jdn) {
        return Ok(());
    }
    let (gregorian_year, _, _) = jdn_to_gregorian(jdn);
    let year = match system {
        CalendarSystem::Gregorian => gregorian_year,
        CalendarSystem::SolarHijri => gregorian_year - JALALI_EPOCH_OFFSET,
    };
    Err(CalendarError::OutOfSupportedRange { system, year })
}

/// Returns whether the Solar Hijri `year` has a 30-day Esfand.
///
/// # Errors
/// Returns `CalendarError::OutOfSupportedRange` outside `MIN_JALALI_YEAR..=MAX_JALALI_YEAR`.
pub fn is_jalali_leap_year(year: u16) -> Result<bool, CalendarError> {
    check_jalali_year(year)?;
    Ok(year_info(i64::from(year))?.leap == 0)
}

/// Number of days in a Solar Hijri month: 31 for months 1-6, 30 for 7-11,
/// and 29 or 30 for Esfand depending on the leap year.
///
/// # Errors
/// Returns `CalendarError::InvalidDateComponents` if `month` is not 1-12 and
/// `CalendarError::OutOfSupportedRange` for an unsupported year.
pub fn days_in_jalali_month(year: u16, month: u8) -> Result<u8, CalendarError> {
    check_jalali_year(year)?;
    if !(FIRST_MONTH..=MAX_MONTH).contains(&month) {
        return Err(invalid(CalendarSystem::SolarHijri, year, month, MIN_DAY));
    }
    if month == LAST_MONTH && is_jalali_leap_year(year)? {
        Ok(ESFAND_DAYS_LEAP)
    } else {
        Ok(JALALI_DAYS_IN_MONTH[usize::from(month)])
    }
}

/// Validates Solar Hijri components without converting them.
///
/// # Errors
/// Returns `CalendarError::OutOfSupportedRange` or `CalendarError::InvalidDateComponents`.
pub fn validate_jalali(year: u16, month: u8, day: u8) -> Result<(), CalendarError> {
    let max_day = days_in_jalali_month(year, month).map_err(|err| match err {
        CalendarError::InvalidDateComponents { .. } => {
            invalid(CalendarSystem::SolarHijri, year, month, day)
        }
        other => other,
    })?;
    if day < MIN_DAY || day > max_day {
        return Err(invalid(CalendarSystem::SolarHijri, year, month, day));
    }
    Ok(())
}

/// Validates Gregorian components, including the supported day window.
///
/// # Errors
/// Returns `CalendarError::InvalidDateComponents` or `CalendarError::OutOfSupportedRange`.
pub fn validate_gregorian(year: u16, month: u8, day: u8) -> Result<(), CalendarError> {
    gregorian_day_number(year, month, day).map(|_| ())
}

/// JDN of a Solar Hijri date.
///
/// # Errors
/// Returns `CalendarError::OutOfSupportedRange` or `CalendarError::InvalidDateComponents`.
pub fn jalali_day_number(year: u16, month: u8, day: u8) -> Result<i64, CalendarError> {
    validate_jalali(year, month, day)?;
    jalali_to_jdn(i64::from(year), i64::from(month), i64::from(day))
}

/// JDN of a Gregorian date.
///
/// # Errors
/// Returns `CalendarError::InvalidDateComponents` for impossible components and
/// `CalendarError::OutOfSupportedRange` outside the supported window.
pub fn gregorian_day_number(year: u16, month: u8, day: u8) -> Result<i64, CalendarError> {
    let max_day = days_in_gregorian_month(year, month)
        .ok_or_else(|| invalid(CalendarSystem::Gregorian, year, month, day))?;
    if day < MIN_DAY || day > max_day {
        return Err(invalid(CalendarSystem::Gregorian, year, month, day));
    }
    let jdn = gregorian_to_jdn(i64::from(year), i64::from(month), i64::from(day));
    check_day_number(CalendarSystem::Gregorian, jdn)?;
    Ok(jdn)
}

/// Solar Hijri date for a JDN.
///
/// # Errors
/// Returns `CalendarError::OutOfSupportedRange` outside the supported window.
pub fn jalali_from_day_number(jdn: i64) -> Result<(u16, u8, u8), CalendarError> {
    check_day_number(CalendarSystem::SolarHijri, jdn)?;
    narrow(CalendarSystem::SolarHijri, jdn_to_jalali(jdn)?)
}

/// Gregorian date for a JDN.
///
/// # Errors
/// Returns `CalendarError::OutOfSupportedRange` outside the supported window.
pub fn gregorian_from_day_number(jdn: i64) -> Result<(u16, u8, u8), CalendarError> {
    check_day_number(CalendarSystem::Gregorian, jdn)?;
    narrow(CalendarSystem::Gregorian, jdn_to_gregorian(jdn))
}

/// Solar Hijri date for a JDN without the supported-window check.
///
/// Month grids pad with days of the neighbouring months, which for the first
/// and last supported months fall in years 0 and `MAX_JALALI_YEAR + 1`. The
/// break-year table still covers those years.
pub(crate) fn padding_jalali_from_day_number(jdn: i64) -> Result<(u16, u8, u8), CalendarError> {
    narrow(CalendarSystem::SolarHijri, jdn_to_jalali(jdn)?)
}

/// Gregorian counterpart of [`padding_jalali_from_day_number`].
pub(crate) fn padding_gregorian_from_day_number(jdn: i64) -> Result<(u16, u8, u8), CalendarError> {
    narrow(CalendarSystem::Gregorian, jdn_to_gregorian(jdn))
}

/// Converts a Gregorian date to Solar Hijri.
///
/// # Errors
/// Returns `CalendarError::InvalidDateComponents` or `CalendarError::OutOfSupportedRange`.
pub fn gregorian_to_jalali(year: u16, month: u8, day: u8) -> Result<(u16, u8, u8), CalendarError> {
    jalali_from_day_number(gregorian_day_number(year, month, day)?)
}

/// Converts a Solar Hijri date to Gregorian.
///
/// # Errors
/// Returns `CalendarError::InvalidDateComponents` or `CalendarError::OutOfSupportedRange`.
pub fn jalali_to_gregorian(year: u16, month: u8, day: u8) -> Result<(u16, u8, u8), CalendarError> {
    gregorian_from_day_number(jalali_day_number(year, month, day)?)
}

/// Weekday of a JDN, 0 = Saturday through 6 = Friday.
pub const fn weekday_of_day_number(jdn: i64) -> u8 {
    // JDN 0 is a Monday
    (jdn + 2).rem_euclid(7) as u8
}

/// Weekday of a Solar Hijri date, 0 = Saturday through 6 = Friday.
///
/// # Errors
/// Returns `CalendarError::InvalidDateComponents` or `CalendarError::OutOfSupportedRange`.
pub fn day_of_week(year: u16, month: u8, day: u8) -> Result<u8, CalendarError> {
    jalali_day_number(year, month, day).map(weekday_of_day_number)
}

/// Weekday of a Gregorian date, 0 = Saturday through 6 = Friday.
///
/// # Errors
/// Returns `CalendarError::InvalidDateComponents` or `CalendarError::OutOfSupportedRange`.
pub fn gregorian_day_of_week(year: u16, month: u8, day: u8) -> Result<u8, CalendarError> {
    gregorian_day_number(year, month, day).map(weekday_of_day_number)
}

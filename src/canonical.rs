//! Resolution of bare `YYYY-MM-DD` text into a definite calendar.
//!
//! Text does not say which calendar it belongs to, so the year decides:
//! years in [`SOLAR_HIJRI_YEAR_BAND`] are Solar Hijri, years in
//! [`GREGORIAN_YEAR_BAND`] are Gregorian, and anything else is rejected as
//! ambiguous. This is the single place where untyped date text becomes a
//! [`CalendarDate`].

use tracing::{debug, trace};

use crate::{
    ARABIC_INDIC_DIGITS, CalendarDate, CalendarError, CalendarSystem, DATE_SEPARATOR,
    GREGORIAN_YEAR_BAND, PERSIAN_DIGITS, SLASH_SEPARATOR, SOLAR_HIJRI_YEAR_BAND,
};

/// Numeric components of date text, before any calendar is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RawDate {
    year:  u32,
    month: u32,
    day:   u32,
}

/// Rewrites Persian and Arabic-Indic digits as ASCII digits.
pub fn normalize_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            PERSIAN_DIGITS
                .iter()
                .position(|&d| d == c)
                .or_else(|| ARABIC_INDIC_DIGITS.iter().position(|&d| d == c))
                .and_then(|index| char::from_digit(u32::try_from(index).ok()?, 10))
                .unwrap_or(c)
        })
        .collect()
}

fn parse_raw(text: &str) -> Result<RawDate, CalendarError> {
    let invalid = || CalendarError::InvalidDateText(text.to_owned());

    let normalized = normalize_digits(text);
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }

    // Drop a trailing time-of-day: `2025-03-21T10:30:00Z`, `2025-03-21 10:30`
    let day_part = trimmed
        .split(|c: char| c == 'T' || c.is_whitespace())
        .next()
        .unwrap_or(trimmed);

    let has_hyphen = day_part.contains(DATE_SEPARATOR);
    let has_slash = day_part.contains(SLASH_SEPARATOR);
    let separator = match (has_hyphen, has_slash) {
        (true, false) => DATE_SEPARATOR,
        (false, true) => SLASH_SEPARATOR,
        _ => return Err(invalid()),
    };

    let parts: Vec<&str> = day_part.split(separator).collect();
    let &[year, month, day] = parts.as_slice() else {
        return Err(invalid());
    };

    // Digit runs too long for u32 saturate; they still fail classification
    // or component validation.
    let number = |part: &str| -> Result<u32, CalendarError> {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        Ok(part.parse::<u32>().unwrap_or(u32::MAX))
    };

    Ok(RawDate {
        year:  number(year)?,
        month: number(month)?,
        day:   number(day)?,
    })
}

fn classify_year(year: u32) -> Result<CalendarSystem, CalendarError> {
    let in_band = |(low, high): (u32, u32)| (low..=high).contains(&year);
    if in_band(SOLAR_HIJRI_YEAR_BAND) {
        Ok(CalendarSystem::SolarHijri)
    } else if in_band(GREGORIAN_YEAR_BAND) {
        Ok(CalendarSystem::Gregorian)
    } else {
        debug!(year, "year outside both classification bands");
        Err(CalendarError::AmbiguousYear(year))
    }
}

/// Decides which calendar `text` is written in.
///
/// # Errors
/// Returns `CalendarError::InvalidDateText` if the text is not three numeric
/// components and `CalendarError::AmbiguousYear` if the year is in neither band.
pub fn classify(text: &str) -> Result<CalendarSystem, CalendarError> {
    let raw = parse_raw(text)?;
    let system = classify_year(raw.year)?;
    trace!(text, %system, "classified date text");
    Ok(system)
}

/// Classifies `text` and validates it into a tagged [`CalendarDate`].
///
/// # Errors
/// Returns any [`CalendarError`]: text, classification, component or range.
pub fn parse(text: &str) -> Result<CalendarDate, CalendarError> {
    let raw = parse_raw(text)?;
    let system = classify_year(raw.year)?;
    // Both bands fit in u16
    let year = u16::try_from(raw.year).map_err(|_| CalendarError::AmbiguousYear(raw.year))?;
    let components = (u8::try_from(raw.month), u8::try_from(raw.day));
    let (Ok(month), Ok(day)) = components else {
        return Err(CalendarError::InvalidDateComponents {
            system,
            year,
            month: raw.month,
            day: raw.day,
        });
    };
    CalendarDate::new(year, month, day, system)
}

/// Classifies `text` and returns it as a Gregorian `YYYY-MM-DD` string,
/// converting from Solar Hijri when needed. Used before handing a date to a
/// Gregorian-based persistence layer.
///
/// # Errors
/// See [`parse`].
pub fn to_canonical_gregorian_iso(text: &str) -> Result<String, CalendarError> {
    Ok(parse(text)?.to_gregorian()?.to_string())
}

/// Classifies `text` and returns it as a Solar Hijri `YYYY-MM-DD` string,
/// converting from Gregorian when needed. Used for user-facing rendering.
///
/// # Errors
/// See [`parse`].
pub fn to_display_jalali(text: &str) -> Result<String, CalendarError> {
    Ok(parse(text)?.to_jalali()?.to_string())
}

/// Reduces a domain timestamp to the Gregorian calendar-day string used as
/// the match key against [`crate::GridCell::gregorian_iso`].
///
/// Time-of-day and zone suffixes are dropped, not interpreted. The date goes
/// through [`classify`], so Gregorian timestamps outside 1900-2100 are
/// rejected as `CalendarError::AmbiguousYear`.
///
/// # Errors
/// See [`parse`].
pub fn day_key(timestamp: &str) -> Result<String, CalendarError> {
    to_canonical_gregorian_iso(timestamp)
}

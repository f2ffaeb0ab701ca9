//! Display and storage strings for [`CalendarDate`].
//!
//! Display forms are always Solar Hijri and the storage form is always
//! Gregorian, whatever calendar the input date is in.

use crate::{
    CalendarDate, CalendarError, CalendarSystem, JALALI_MONTH_NAMES, PERSIAN_DIGITS, WEEKDAY_NAMES,
};

/// Persian name of a Solar Hijri month, or `None` outside 1-12.
pub fn month_name(month: u8) -> Option<&'static str> {
    JALALI_MONTH_NAMES.get(usize::from(month).checked_sub(1)?).copied()
}

/// Persian name of a weekday index, 0 = Saturday.
pub fn weekday_name(index: u8) -> Option<&'static str> {
    WEEKDAY_NAMES.get(usize::from(index)).copied()
}

/// `DD/MM/YYYY` in Solar Hijri.
///
/// # Errors
/// Propagates conversion errors.
pub fn slash(date: &CalendarDate) -> Result<String, CalendarError> {
    let jalali = date.to_jalali()?;
    Ok(format!(
        "{:02}/{:02}/{:04}",
        jalali.day(),
        jalali.month(),
        jalali.year()
    ))
}

/// `<weekday>، <day> <month-name> <year>` in Solar Hijri,
/// e.g. `جمعه، 1 فروردین 1404`.
///
/// # Errors
/// Propagates conversion errors.
pub fn full(date: &CalendarDate) -> Result<String, CalendarError> {
    let jalali = date.to_jalali()?;
    let weekday = weekday_name(jalali.weekday()?).unwrap_or_default();
    let month = month_name(jalali.month()).unwrap_or_default();
    Ok(format!(
        "{weekday}، {} {month} {}",
        jalali.day(),
        jalali.year()
    ))
}

/// `YYYY-MM-DD` in Gregorian, for the persistence layer.
///
/// # Errors
/// Propagates conversion errors.
pub fn to_storage_iso(date: &CalendarDate) -> Result<String, CalendarError> {
    Ok(date.to_gregorian()?.to_string())
}

/// Header for a month grid: `<month-name> <year>`.
///
/// # Errors
/// Returns `CalendarError::InvalidDateComponents` for a month outside 1-12.
pub fn month_title(year: u16, month: u8) -> Result<String, CalendarError> {
    let name = month_name(month).ok_or(CalendarError::InvalidDateComponents {
        system: CalendarSystem::SolarHijri,
        year,
        month: u32::from(month),
        day: 1,
    })?;
    Ok(format!("{name} {year}"))
}

/// Rewrites ASCII digits as Persian digits, leaving everything else alone.
pub fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            c.to_digit(10)
                .and_then(|d| PERSIAN_DIGITS.get(usize::try_from(d).ok()?))
                .copied()
                .unwrap_or(c)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{gregorian, jalali};

    #[test]
    fn test_slash() {
        assert_eq!(slash(&jalali(1404, 1, 9)).unwrap(), "09/01/1404");
        assert_eq!(slash(&gregorian(2025, 3, 21)).unwrap(), "01/01/1404");
    }

    #[test]
    fn test_full() {
        assert_eq!(full(&jalali(1404, 1, 1)).unwrap(), "جمعه، 1 فروردین 1404");
        assert_eq!(full(&jalali(1404, 1, 2)).unwrap(), "شنبه، 2 فروردین 1404");
        assert_eq!(full(&gregorian(2026, 10, 19)).unwrap(), "دوشنبه، 27 مهر 1405");
    }

    #[test]
    fn test_to_storage_iso() {
        assert_eq!(to_storage_iso(&jalali(1404, 1, 1)).unwrap(), "2025-03-21");
        assert_eq!(to_storage_iso(&jalali(1403, 12, 30)).unwrap(), "2025-03-20");
        assert_eq!(to_storage_iso(&gregorian(2025, 1, 5)).unwrap(), "2025-01-05");
    }

    #[test]
    fn test_names() {
        assert_eq!(month_name(1), Some("فروردین"));
        assert_eq!(month_name(12), Some("اسفند"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
        assert_eq!(weekday_name(0), Some("شنبه"));
        assert_eq!(weekday_name(6), Some("جمعه"));
        assert_eq!(weekday_name(7), None);
    }

    #[test]
    fn test_month_title() {
        assert_eq!(month_title(1404, 7).unwrap(), "مهر 1404");
        assert!(month_title(1404, 13).is_err());
    }

    #[test]
    fn test_to_persian_digits() {
        assert_eq!(to_persian_digits("09/01/1404"), "۰۹/۰۱/۱۴۰۴");
        assert_eq!(to_persian_digits("مهر 1405"), "مهر ۱۴۰۵");
    }
}

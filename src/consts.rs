/// Maximum representable year (inclusive) for the `Year` newtype
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (Esfand / December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for Farvardin / January
pub const FIRST_MONTH: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for Esfand / December
pub const LAST_MONTH: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in each Solar Hijri month; Esfand shows the common-year 29
pub const JALALI_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (30 in leap years)
];

/// Days in Esfand for Solar Hijri leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Earliest Solar Hijri year the conversion arithmetic supports
pub const MIN_JALALI_YEAR: u16 = 1;
/// Latest Solar Hijri year the conversion arithmetic supports
pub const MAX_JALALI_YEAR: u16 = 3176;

/// Offset between a Solar Hijri year and the Gregorian year in which it starts
pub(crate) const JALALI_EPOCH_OFFSET: i64 = 621;

/// Solar Hijri years at which the 33-year leap cycle is re-anchored.
/// The last entry is exclusive and bounds the arithmetic.
pub(crate) const JALALI_BREAKS: [i64; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Year band classified as Solar Hijri when the calendar is not stated
pub const SOLAR_HIJRI_YEAR_BAND: (u32, u32) = (1300, 1500);
/// Year band classified as Gregorian when the calendar is not stated
pub const GREGORIAN_YEAR_BAND: (u32, u32) = (1900, 2100);

/// Lower navigation year observed in the date pickers
pub const DEFAULT_MIN_NAV_YEAR: u16 = 1404;
/// Upper navigation year observed in the date pickers
pub const DEFAULT_MAX_NAV_YEAR: u16 = 1430;

/// Number of cells in a month grid (6 weeks of 7 days)
pub const GRID_CELLS: usize = 42;
/// Days per grid row; weeks start on Saturday
pub const DAYS_PER_WEEK: usize = 7;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Alternate component separator common in Solar Hijri text
pub const SLASH_SEPARATOR: char = '/';
/// Separator between the bounds of a year window, as in `1404..1430`
pub const BOUNDS_SEPARATOR: &str = "..";

/// Solar Hijri month names in Persian, Farvardin first
pub const JALALI_MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Weekday names in Persian, Saturday first
pub const WEEKDAY_NAMES: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنجشنبه",
    "جمعه",
];

/// Persian digits `۰`..`۹`
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];
/// Arabic-Indic digits `٠`..`٩`
pub const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

//! Fixed-size month grids for calendar views.
//!
//! A grid always holds six Saturday-first weeks (42 cells): trailing days of
//! the previous month, the whole target month, then leading days of the next
//! month. Each cell carries its Gregorian day string so Gregorian-stamped
//! events can be matched by plain string equality.

use serde::Serialize;
use tracing::trace;

use crate::{CalendarDate, CalendarError, DAYS_PER_WEEK, GRID_CELLS, canonical, math};

/// One day slot of a [`MonthGrid`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GridCell {
    pub jalali_year:        u16,
    pub jalali_month:       u8,
    pub jalali_day:         u8,
    /// Gregorian `YYYY-MM-DD` of the same day
    pub gregorian_iso:      String,
    /// False for the padding days of the neighbouring months
    pub in_displayed_month: bool,
}

impl GridCell {
    fn at_day_number(jdn: i64, year: u16, month: u8) -> Result<Self, CalendarError> {
        let (jalali_year, jalali_month, jalali_day) = math::padding_jalali_from_day_number(jdn)?;
        let (gy, gm, gd) = math::padding_gregorian_from_day_number(jdn)?;
        Ok(Self {
            jalali_year,
            jalali_month,
            jalali_day,
            gregorian_iso: format!("{gy:04}-{gm:02}-{gd:02}"),
            in_displayed_month: jalali_year == year && jalali_month == month,
        })
    }

    /// The cell's day as a Solar Hijri [`CalendarDate`].
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfSupportedRange` for padding days of the
    /// first and last supported months, which lie in years 0 and
    /// `MAX_JALALI_YEAR + 1`.
    pub fn date(&self) -> Result<CalendarDate, CalendarError> {
        CalendarDate::jalali(self.jalali_year, self.jalali_month, self.jalali_day)
    }
}

/// Six weeks of [`GridCell`]s around a Solar Hijri month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    year:  u16,
    month: u8,
    cells: Vec<GridCell>,
}

impl MonthGrid {
    /// Displayed Solar Hijri year
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Displayed Solar Hijri month
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// All 42 cells, row by row
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// The six rows of seven cells, each starting on Saturday
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// Cell whose Gregorian day string equals `gregorian_iso` exactly.
    pub fn find_gregorian(&self, gregorian_iso: &str) -> Option<&GridCell> {
        self.cells.iter().find(|cell| cell.gregorian_iso == gregorian_iso)
    }

    /// Cell on the calendar day of a domain timestamp such as
    /// `2025-03-21T10:30:00Z`; the time-of-day is dropped first.
    ///
    /// # Errors
    /// Returns an error if the timestamp is not a recognizable date.
    pub fn find_event(&self, timestamp: &str) -> Result<Option<&GridCell>, CalendarError> {
        let key = canonical::day_key(timestamp)?;
        Ok(self.find_gregorian(&key))
    }
}

impl<'a> IntoIterator for &'a MonthGrid {
    type IntoIter = std::slice::Iter<'a, GridCell>;
    type Item = &'a GridCell;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Builds the 42-cell grid for a Solar Hijri month.
///
/// Works for every month of the supported years; padding days may spill into
/// year 0 or `MAX_JALALI_YEAR + 1`.
///
/// # Errors
/// Returns `CalendarError::InvalidDateComponents` for a month outside 1-12
/// and `CalendarError::OutOfSupportedRange` for an unsupported year.
pub fn build_month_grid(year: u16, month: u8) -> Result<MonthGrid, CalendarError> {
    let first = math::jalali_day_number(year, month, 1)?;
    let leading = math::weekday_of_day_number(first);
    let start = first - i64::from(leading);

    let cells = (start..)
        .take(GRID_CELLS)
        .map(|jdn| GridCell::at_day_number(jdn, year, month))
        .collect::<Result<Vec<_>, _>>()?;

    trace!(year, month, leading, "built month grid");
    Ok(MonthGrid { year, month, cells })
}

//! Month grid construction for the calendar view.
//!
//! The grid is a flat run of cells: blank padding up to the weekday of the 1st
//! (Sunday first), then one cell per day of the month. Nothing is appended after
//! the last day; `MonthGrid::weeks` pads the final row when rows are needed.

use super::error::DateRangeError;
use chrono::{Datelike, Months, NaiveDate};

/// Calendar month as displayed by the picker; `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Normalizes a 0-based month index that may over- or underflow the year,
    /// e.g. `(2024, 12)` is January 2025 and `(2024, -1)` is December 2023.
    pub fn from_month_index(year: i32, month_index: i32) -> Self {
        let total = year as i64 * 12 + month_index as i64;
        Self {
            year: total.div_euclid(12) as i32,
            month: total.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> Result<NaiveDate, DateRangeError> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or(DateRangeError::OutOfRange {
            year: self.year,
            month: self.month,
        })
    }

    /// Last day of the month: the day before the 1st of the next month.
    pub fn last_day(&self) -> Result<NaiveDate, DateRangeError> {
        self.first_day()?
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or(DateRangeError::OutOfRange {
                year: self.year,
                month: self.month,
            })
    }

    pub fn days_in_month(&self) -> Result<u32, DateRangeError> {
        Ok(self.last_day()?.day())
    }

    pub fn shift(&self, months: i32) -> Self {
        Self::from_month_index(self.year, self.month as i32 - 1 + months)
    }
}

/// Flat month grid, Sunday-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub cells: Vec<Option<NaiveDate>>,
}

impl MonthGrid {
    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|c| c.is_none()).count()
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Rows of 7 for rendering; the last row is padded with blanks.
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        self.cells
            .chunks(7)
            .map(|chunk| {
                let mut row = [None; 7];
                row[..chunk.len()].copy_from_slice(chunk);
                row
            })
            .collect()
    }
}

/// Builds the grid for `month_index` (0 = January) of `year`.
///
/// Out-of-range month indexes are normalized the same way the calendar does
/// (index 12 is next January), so callers can step months with plain arithmetic.
pub fn build_month_grid(year: i32, month_index: i32) -> Result<MonthGrid, DateRangeError> {
    build_grid_for(YearMonth::from_month_index(year, month_index))
}

pub fn build_grid_for(month: YearMonth) -> Result<MonthGrid, DateRangeError> {
    let first = month.first_day()?;
    let leading = first.weekday().num_days_from_sunday() as usize;
    let days = month.days_in_month()?;

    let mut cells = Vec::with_capacity(leading + days as usize);
    cells.resize(leading, None);
    cells.extend(first.iter_days().take(days as usize).map(Some));

    Ok(MonthGrid { month, cells })
}

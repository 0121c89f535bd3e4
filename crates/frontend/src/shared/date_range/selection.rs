//! Two-click range selection.
//!
//! The first click anchors the start, the second closes the range. A click on
//! a finished (or empty) selection starts over; partial edits are not supported.

use super::error::DateRangeError;
use chrono::NaiveDate;
use contracts::shared::date_range::DateRange;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RangeSelection {
    #[default]
    Empty,
    PendingEnd {
        from: NaiveDate,
    },
    /// Invariant: `from <= to`
    Complete {
        from: NaiveDate,
        to: NaiveDate,
    },
}

impl RangeSelection {
    pub fn from_range(range: &DateRange) -> Self {
        match (range.from, range.to) {
            (None, None) => Self::Empty,
            (Some(from), None) | (None, Some(from)) => Self::PendingEnd { from },
            (Some(a), Some(b)) => Self::Complete {
                from: a.min(b),
                to: a.max(b),
            },
        }
    }

    /// Strict form of [`RangeSelection::from_range`]: an inverted range is an error, not swapped.
    pub fn try_from_range(range: &DateRange) -> Result<Self, DateRangeError> {
        match (range.from, range.to) {
            (Some(from), Some(to)) if from > to => Err(DateRangeError::InvertedRange { from, to }),
            _ => Ok(Self::from_range(range)),
        }
    }

    pub fn to_range(&self) -> DateRange {
        match *self {
            Self::Empty => DateRange::all_data(),
            Self::PendingEnd { from } => DateRange {
                from: Some(from),
                to: None,
            },
            Self::Complete { from, to } => DateRange {
                from: Some(from),
                to: Some(to),
            },
        }
    }

    /// Range to hand back to the caller. A dangling start is committed as a single day.
    pub fn to_committed_range(&self) -> DateRange {
        match *self {
            Self::PendingEnd { from } => DateRange::single(from),
            _ => self.to_range(),
        }
    }

    /// Transition for a click on `clicked`. Disabled dates leave the state as is.
    pub fn on_date_click(
        self,
        clicked: NaiveDate,
        is_disabled: impl Fn(NaiveDate) -> bool,
    ) -> Self {
        if is_disabled(clicked) {
            return self;
        }
        match self {
            Self::Empty | Self::Complete { .. } => Self::PendingEnd { from: clicked },
            Self::PendingEnd { from } if clicked >= from => Self::Complete { from, to: clicked },
            Self::PendingEnd { from } => Self::Complete {
                from: clicked,
                to: from,
            },
        }
    }

    /// Complete: inside `[from, to]`. Pending: the anchor day only.
    pub fn is_selected(&self, date: NaiveDate) -> bool {
        match *self {
            Self::Empty => false,
            Self::PendingEnd { from } => date == from,
            Self::Complete { from, to } => from <= date && date <= to,
        }
    }

    pub fn is_range_start(&self, date: NaiveDate) -> bool {
        match *self {
            Self::Empty => false,
            Self::PendingEnd { from } | Self::Complete { from, .. } => date == from,
        }
    }

    pub fn is_range_end(&self, date: NaiveDate) -> bool {
        match *self {
            Self::Complete { to, .. } => date == to,
            _ => false,
        }
    }

    /// Strictly between the endpoints (flat fill, no rounded corners)
    pub fn is_in_range(&self, date: NaiveDate) -> bool {
        match *self {
            Self::Complete { from, to } => from < date && date < to,
            _ => false,
        }
    }
}

/// Function form of [`RangeSelection::on_date_click`] working on plain ranges.
pub fn on_date_click(
    current: &DateRange,
    clicked: NaiveDate,
    is_disabled: impl Fn(NaiveDate) -> bool,
) -> DateRange {
    RangeSelection::from_range(current)
        .on_date_click(clicked, is_disabled)
        .to_range()
}

pub fn is_selected(date: NaiveDate, range: &DateRange) -> bool {
    RangeSelection::from_range(range).is_selected(date)
}

//! Named quick-pick ranges anchored at the latest data date.
//!
//! Everything here is computed from the `latest` argument; the clock is never read.
//! Options are rebuilt on every call since the latest data date moves when new
//! data is imported.

use super::calendar::YearMonth;
use super::error::DateRangeError;
use super::locale::PickerLocale;
use chrono::{Datelike, Days, NaiveDate};
use contracts::shared::date_range::DateRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetKind {
    AllData,
    Last7Days,
    Last30Days,
    Last90Days,
    ThisMonth,
    LastMonth,
    Last3Months,
    ThisQuarter,
    LastQuarter,
    ThisYear,
    LastYear,
}

impl PresetKind {
    /// Sidebar order: All Data first, then by growing granularity.
    pub const ALL: [PresetKind; 11] = [
        PresetKind::AllData,
        PresetKind::Last7Days,
        PresetKind::Last30Days,
        PresetKind::Last90Days,
        PresetKind::ThisMonth,
        PresetKind::LastMonth,
        PresetKind::Last3Months,
        PresetKind::ThisQuarter,
        PresetKind::LastQuarter,
        PresetKind::ThisYear,
        PresetKind::LastYear,
    ];

    pub fn resolve(self, latest: NaiveDate) -> Result<DateRange, DateRangeError> {
        let current = YearMonth::of(latest);
        let range = match self {
            PresetKind::AllData => DateRange::all_data(),
            PresetKind::Last7Days => last_n_days(latest, 7)?,
            PresetKind::Last30Days => last_n_days(latest, 30)?,
            PresetKind::Last90Days => last_n_days(latest, 90)?,
            PresetKind::ThisMonth => up_to(current.first_day()?, latest),
            PresetKind::LastMonth => full_months(current.shift(-1), 1)?,
            PresetKind::Last3Months => up_to(current.shift(-2).first_day()?, latest),
            PresetKind::ThisQuarter => up_to(quarter_start(current).first_day()?, latest),
            PresetKind::LastQuarter => full_months(quarter_start(current).shift(-3), 3)?,
            PresetKind::ThisYear => {
                let january = YearMonth::from_month_index(latest.year(), 0);
                up_to(january.first_day()?, latest)
            }
            PresetKind::LastYear => {
                full_months(YearMonth::from_month_index(latest.year() - 1, 0), 12)?
            }
        };
        Ok(range)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredefinedRangeOption {
    pub kind: PresetKind,
    pub label: String,
    pub range: DateRange,
}

/// Full catalog in sidebar order, labelled for `locale`.
pub fn resolve_predefined_ranges(
    latest: NaiveDate,
    locale: PickerLocale,
) -> Result<Vec<PredefinedRangeOption>, DateRangeError> {
    resolve_catalog(&PresetKind::ALL, latest, locale)
}

/// Resolves a subset of kinds; output follows the catalog order, not the order of `kinds`.
pub fn resolve_catalog(
    kinds: &[PresetKind],
    latest: NaiveDate,
    locale: PickerLocale,
) -> Result<Vec<PredefinedRangeOption>, DateRangeError> {
    PresetKind::ALL
        .iter()
        .filter(|kind| kinds.contains(*kind))
        .map(|&kind| {
            Ok(PredefinedRangeOption {
                kind,
                label: locale.preset_label(kind).to_string(),
                range: kind.resolve(latest)?,
            })
        })
        .collect()
}

/// Option equal to `range` by calendar day, if any. `None` means a custom range.
pub fn active_preset<'a>(
    range: &DateRange,
    options: &'a [PredefinedRangeOption],
) -> Option<&'a PredefinedRangeOption> {
    options.iter().find(|option| option.range == *range)
}

/// Label of the matching option, or the locale's "custom" label.
pub fn active_label(
    range: &DateRange,
    options: &[PredefinedRangeOption],
    locale: PickerLocale,
) -> String {
    active_preset(range, options)
        .map(|option| option.label.clone())
        .unwrap_or_else(|| locale.custom_label().to_string())
}

fn last_n_days(latest: NaiveDate, n: u64) -> Result<DateRange, DateRangeError> {
    let from = latest
        .checked_sub_days(Days::new(n - 1))
        .ok_or_else(|| out_of_range(latest))?;
    Ok(up_to(from, latest))
}

fn up_to(from: NaiveDate, latest: NaiveDate) -> DateRange {
    DateRange {
        from: Some(from),
        to: Some(latest),
    }
}

fn full_months(first: YearMonth, count: i32) -> Result<DateRange, DateRangeError> {
    Ok(DateRange {
        from: Some(first.first_day()?),
        to: Some(first.shift(count - 1).last_day()?),
    })
}

fn quarter_start(month: YearMonth) -> YearMonth {
    YearMonth {
        year: month.year,
        month: (month.month - 1) / 3 * 3 + 1,
    }
}

fn out_of_range(date: NaiveDate) -> DateRangeError {
    DateRangeError::OutOfRange {
        year: date.year(),
        month: date.month(),
    }
}

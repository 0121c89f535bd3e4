//! Picker controller: owns the draft range while the popover is open.
//!
//! The committed range belongs to the caller. The controller only reads it on
//! `open` and hands a new value back from `apply` (or from a quick-pick/clear in
//! `CommitMode::Immediate`); the caller forwards that value to its change callback.

use super::calendar::{build_grid_for, MonthGrid, YearMonth};
use super::config::{CommitMode, PickerConfig};
use super::error::DateRangeError;
use super::locale::PickerLocale;
use super::presets::{self, PredefinedRangeOption, PresetKind};
use super::selection::RangeSelection;
use chrono::NaiveDate;
use contracts::shared::date_range::DateRange;

/// Render flags of one calendar cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayState {
    pub selected: bool,
    pub range_start: bool,
    pub range_end: bool,
    pub in_range: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone)]
pub struct PickerController {
    config: PickerConfig,
    open: bool,
    draft: RangeSelection,
    view_month: YearMonth,
}

impl PickerController {
    pub fn new(config: PickerConfig) -> Self {
        let view_month = YearMonth::of(config.latest_data_date());
        Self {
            config,
            open: false,
            draft: RangeSelection::Empty,
            view_month,
        }
    }

    pub fn locale(&self) -> PickerLocale {
        self.config.locale()
    }

    pub fn set_latest_data_date(&mut self, date: NaiveDate) {
        self.config.set_latest_data_date(date);
        if !self.open {
            self.view_month = YearMonth::of(date);
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> DateRange {
        self.draft.to_range()
    }

    pub fn selection(&self) -> RangeSelection {
        self.draft
    }

    pub fn view_month(&self) -> YearMonth {
        self.view_month
    }

    /// Starts editing a copy of `committed`.
    pub fn open(&mut self, committed: &DateRange) {
        self.draft = RangeSelection::try_from_range(committed).unwrap_or_else(|err| {
            log::warn!("date range picker: {}, opening with endpoints swapped", err);
            RangeSelection::from_range(committed)
        });
        let anchor = committed
            .to
            .or(committed.from)
            .unwrap_or_else(|| self.config.latest_data_date());
        self.view_month = YearMonth::of(anchor);
        self.open = true;
        log::debug!("date range picker opened with {:?}", committed);
    }

    /// Quick-pick. Returns the range to commit when the picker commits immediately.
    pub fn select_preset(&mut self, option: &PredefinedRangeOption) -> Option<DateRange> {
        log::debug!("date range picker: preset {:?}", option.kind);
        self.stage(RangeSelection::from_range(&option.range))
    }

    pub fn select_preset_kind(&mut self, kind: PresetKind) -> Option<DateRange> {
        match kind.resolve(self.config.latest_data_date()) {
            Ok(range) => {
                log::debug!("date range picker: preset {:?}", kind);
                self.stage(RangeSelection::from_range(&range))
            }
            Err(err) => {
                log::warn!("date range picker: cannot resolve {:?}: {}", kind, err);
                None
            }
        }
    }

    /// Same as picking "All Data"; follows the configured commit mode.
    pub fn clear(&mut self) -> Option<DateRange> {
        log::debug!("date range picker: cleared");
        self.stage(RangeSelection::Empty)
    }

    pub fn click_date(&mut self, date: NaiveDate) {
        if !self.open {
            return;
        }
        let config = &self.config;
        let next = self.draft.on_date_click(date, |d| config.is_disabled(d));
        if next == self.draft {
            log::debug!("date range picker: ignored click on {}", date);
        }
        self.draft = next;
    }

    /// Closes and returns the draft to commit; `None` when nothing is open.
    pub fn apply(&mut self) -> Option<DateRange> {
        if !self.open {
            return None;
        }
        self.open = false;
        let committed = self.draft.to_committed_range();
        log::debug!("date range picker applied {:?}", committed);
        Some(committed)
    }

    /// Drops the draft; the caller's committed value stays as it was.
    pub fn cancel(&mut self) {
        if self.open {
            log::debug!("date range picker cancelled");
        }
        self.open = false;
        self.draft = RangeSelection::Empty;
    }

    pub fn show_previous_month(&mut self) {
        self.view_month = self.view_month.shift(-1);
    }

    pub fn show_next_month(&mut self) {
        self.view_month = self.view_month.shift(1);
    }

    pub fn grid(&self) -> Result<MonthGrid, DateRangeError> {
        build_grid_for(self.view_month)
    }

    pub fn day_state(&self, date: NaiveDate) -> DayState {
        DayState {
            selected: self.draft.is_selected(date),
            range_start: self.draft.is_range_start(date),
            range_end: self.draft.is_range_end(date),
            in_range: self.draft.is_in_range(date),
            disabled: self.config.is_disabled(date),
        }
    }

    /// Quick-pick options for the current latest data date, recomputed on every call.
    pub fn options(&self) -> Vec<PredefinedRangeOption> {
        presets::resolve_catalog(
            self.config.presets(),
            self.config.latest_data_date(),
            self.config.locale(),
        )
        .unwrap_or_else(|err| {
            log::warn!("date range picker: no quick-picks: {}", err);
            Vec::new()
        })
    }

    /// Kind of the quick-pick equal to `range`; `None` for a custom range.
    pub fn active_preset(&self, range: &DateRange) -> Option<PresetKind> {
        presets::active_preset(range, &self.options()).map(|option| option.kind)
    }

    pub fn active_label(&self, range: &DateRange) -> String {
        presets::active_label(range, &self.options(), self.locale())
    }

    pub fn display_label(&self, committed: &DateRange) -> String {
        format_range_label(committed, self.locale())
    }

    fn stage(&mut self, selection: RangeSelection) -> Option<DateRange> {
        self.draft = selection;
        match self.config.commit_mode() {
            CommitMode::Staged => None,
            CommitMode::Immediate => {
                self.open = false;
                let committed = self.draft.to_committed_range();
                log::debug!("date range picker committed {:?}", committed);
                Some(committed)
            }
        }
    }
}

/// Text for the picker trigger: "All Data", a single date, or `from - to`.
pub fn format_range_label(range: &DateRange, locale: PickerLocale) -> String {
    match (range.from, range.to) {
        (None, None) => locale.all_data_label().to_string(),
        (Some(from), Some(to)) if from == to => locale.format_date(from),
        (Some(from), Some(to)) => {
            format!("{} - {}", locale.format_date(from), locale.format_date(to))
        }
        (Some(date), None) | (None, Some(date)) => locale.format_date(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn controller(mode: CommitMode) -> PickerController {
        PickerController::new(
            PickerConfig::builder()
                .latest_data_date(Some(d(2025, 6, 10)))
                .commit_mode(mode)
                .build(),
        )
    }

    #[test]
    fn test_open_copies_committed() {
        let committed = DateRange::between(d(2025, 3, 1), d(2025, 3, 31));
        let mut picker = controller(CommitMode::Staged);
        assert!(!picker.is_open());

        picker.open(&committed);
        assert!(picker.is_open());
        assert_eq!(picker.draft(), committed);
        assert_eq!(picker.view_month(), YearMonth { year: 2025, month: 3 });
    }

    #[test]
    fn test_cancel_leaves_committed_untouched() {
        let committed = DateRange::between(d(2025, 3, 1), d(2025, 3, 31));
        let mut picker = controller(CommitMode::Staged);
        picker.open(&committed);
        picker.click_date(d(2025, 5, 2));
        picker.click_date(d(2025, 5, 9));
        picker.select_preset_kind(PresetKind::LastYear);
        picker.cancel();

        assert!(!picker.is_open());
        assert_eq!(picker.apply(), None);

        // reopening starts from the committed value again
        picker.open(&committed);
        assert_eq!(picker.draft(), committed);
    }

    #[test]
    fn test_open_inverted_committed_swaps() {
        let inverted = DateRange {
            from: Some(d(2025, 3, 31)),
            to: Some(d(2025, 3, 1)),
        };
        let mut picker = controller(CommitMode::Staged);
        picker.open(&inverted);
        assert_eq!(picker.draft(), DateRange::between(d(2025, 3, 1), d(2025, 3, 31)));
    }

    #[test]
    fn test_apply_returns_draft_once() {
        let mut picker = controller(CommitMode::Staged);
        picker.open(&DateRange::all_data());
        picker.click_date(d(2025, 5, 9));
        picker.click_date(d(2025, 5, 2));

        assert_eq!(
            picker.apply(),
            Some(DateRange::between(d(2025, 5, 2), d(2025, 5, 9)))
        );
        assert!(!picker.is_open());
        assert_eq!(picker.apply(), None);
    }

    #[test]
    fn test_apply_with_dangling_start_commits_single_day() {
        let mut picker = controller(CommitMode::Staged);
        picker.open(&DateRange::all_data());
        picker.click_date(d(2025, 5, 9));
        assert_eq!(picker.apply(), Some(DateRange::single(d(2025, 5, 9))));
    }

    #[test]
    fn test_staged_preset_waits_for_apply() {
        let mut picker = controller(CommitMode::Staged);
        picker.open(&DateRange::all_data());
        let options = picker.options();
        let thirty = options
            .iter()
            .find(|o| o.kind == PresetKind::Last30Days)
            .unwrap();

        assert_eq!(picker.select_preset(thirty), None);
        assert!(picker.is_open());
        assert_eq!(
            picker.apply(),
            Some(DateRange::between(d(2025, 5, 12), d(2025, 6, 10)))
        );
    }

    #[test]
    fn test_immediate_preset_and_clear_commit() {
        let mut picker = controller(CommitMode::Immediate);
        picker.open(&DateRange::between(d(2025, 6, 1), d(2025, 6, 5)));
        assert_eq!(
            picker.select_preset_kind(PresetKind::LastMonth),
            Some(DateRange::between(d(2025, 5, 1), d(2025, 5, 31)))
        );
        assert!(!picker.is_open());

        picker.open(&DateRange::between(d(2025, 5, 1), d(2025, 5, 31)));
        assert_eq!(picker.clear(), Some(DateRange::all_data()));
        assert!(!picker.is_open());
    }

    #[test]
    fn test_staged_clear_stages_all_data() {
        let mut picker = controller(CommitMode::Staged);
        picker.open(&DateRange::between(d(2025, 6, 1), d(2025, 6, 5)));
        assert_eq!(picker.clear(), None);
        assert_eq!(picker.draft(), DateRange::all_data());
        assert_eq!(picker.apply(), Some(DateRange::all_data()));
    }

    #[test]
    fn test_clicks_beyond_latest_are_ignored() {
        let mut picker = controller(CommitMode::Staged);
        picker.open(&DateRange::all_data());
        picker.click_date(d(2025, 6, 1));
        picker.click_date(d(2025, 6, 20));
        picker.click_date(d(2025, 7, 1));
        assert_eq!(picker.draft().to, None);

        picker.click_date(d(2025, 6, 10));
        let committed = picker.apply().unwrap();
        assert!(committed.to.unwrap() <= d(2025, 6, 10));
    }

    #[test]
    fn test_clicks_while_closed_do_nothing() {
        let mut picker = controller(CommitMode::Staged);
        picker.click_date(d(2025, 6, 1));
        assert_eq!(picker.selection(), RangeSelection::Empty);
    }

    #[test]
    fn test_month_navigation_and_grid() {
        let mut picker = controller(CommitMode::Staged);
        picker.open(&DateRange::single(d(2025, 1, 15)));
        picker.show_previous_month();
        assert_eq!(picker.view_month(), YearMonth { year: 2024, month: 12 });
        assert_eq!(picker.grid().unwrap().days().count(), 31);
        picker.show_next_month();
        picker.show_next_month();
        assert_eq!(picker.view_month(), YearMonth { year: 2025, month: 2 });
    }

    #[test]
    fn test_day_state() {
        let mut picker = controller(CommitMode::Staged);
        picker.open(&DateRange::between(d(2025, 6, 2), d(2025, 6, 4)));

        let start = picker.day_state(d(2025, 6, 2));
        assert!(start.selected && start.range_start && !start.range_end && !start.in_range);
        let middle = picker.day_state(d(2025, 6, 3));
        assert!(middle.selected && middle.in_range);
        let end = picker.day_state(d(2025, 6, 4));
        assert!(end.range_end);
        assert!(picker.day_state(d(2025, 6, 11)).disabled);
    }

    #[test]
    fn test_active_preset() {
        let picker = controller(CommitMode::Staged);
        assert_eq!(
            picker.active_preset(&DateRange::all_data()),
            Some(PresetKind::AllData)
        );
        assert_eq!(
            picker.active_preset(&DateRange::between(d(2025, 6, 4), d(2025, 6, 10))),
            Some(PresetKind::Last7Days)
        );
        assert_eq!(
            picker.active_label(&DateRange::between(d(2025, 6, 5), d(2025, 6, 10))),
            "Kustom"
        );
    }

    #[test]
    fn test_active_preset_picks_first_of_equal_ranges() {
        // on 31 January "this month", "this quarter" and "this year" are the same range
        let picker = PickerController::new(
            PickerConfig::builder()
                .latest_data_date(Some(d(2025, 1, 31)))
                .build(),
        );
        let january = DateRange::between(d(2025, 1, 1), d(2025, 1, 31));
        let equal: Vec<PresetKind> = picker
            .options()
            .into_iter()
            .filter(|o| o.range == january)
            .map(|o| o.kind)
            .collect();
        assert_eq!(
            equal,
            vec![PresetKind::ThisMonth, PresetKind::ThisQuarter, PresetKind::ThisYear]
        );
        assert_eq!(picker.active_preset(&january), Some(PresetKind::ThisMonth));
    }

    #[test]
    fn test_display_label() {
        let locale = PickerLocale::English;
        assert_eq!(format_range_label(&DateRange::all_data(), locale), "All Data");
        assert_eq!(
            format_range_label(&DateRange::between(d(2025, 5, 12), d(2025, 6, 10)), locale),
            "May 12, 2025 - Jun 10, 2025"
        );
        let only_from = DateRange {
            from: Some(d(2025, 5, 12)),
            to: None,
        };
        assert_eq!(format_range_label(&only_from, locale), "May 12, 2025");
        assert_eq!(
            format_range_label(&DateRange::single(d(2025, 5, 12)), PickerLocale::Indonesian),
            "12 Mei 2025"
        );
    }
}

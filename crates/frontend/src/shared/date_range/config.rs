use super::locale::PickerLocale;
use super::presets::PresetKind;
use chrono::{Datelike, NaiveDate, Utc};
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;

pub type DisabledPredicate = Arc<dyn Fn(NaiveDate) -> bool + Send + Sync>;

/// Whether quick-picks and Clear wait for Apply or commit right away.
///
/// One mode per picker; Staged is the default for every picker in the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommitMode {
    #[default]
    Staged,
    Immediate,
}

/// Настройки одного экземпляра пикера периода
#[derive(Clone)]
pub struct PickerConfig {
    latest_data_date: NaiveDate,
    presets: Vec<PresetKind>,
    disabled: Option<DisabledPredicate>,
    disable_after_latest: bool,
    year_bounds: Option<RangeInclusive<i32>>,
    locale: PickerLocale,
    commit_mode: CommitMode,
}

impl PickerConfig {
    pub fn builder() -> PickerConfigBuilder {
        PickerConfigBuilder::default()
    }

    pub fn latest_data_date(&self) -> NaiveDate {
        self.latest_data_date
    }

    /// New data arrived; presets and the future-date cutoff follow it.
    pub fn set_latest_data_date(&mut self, date: NaiveDate) {
        self.latest_data_date = date;
    }

    pub fn presets(&self) -> &[PresetKind] {
        &self.presets
    }

    pub fn locale(&self) -> PickerLocale {
        self.locale
    }

    pub fn commit_mode(&self) -> CommitMode {
        self.commit_mode
    }

    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        if self.disable_after_latest && date > self.latest_data_date {
            return true;
        }
        if let Some(bounds) = &self.year_bounds {
            if !bounds.contains(&date.year()) {
                return true;
            }
        }
        self.disabled.as_ref().is_some_and(|predicate| predicate(date))
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfigBuilder::default().build()
    }
}

impl fmt::Debug for PickerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerConfig")
            .field("latest_data_date", &self.latest_data_date)
            .field("presets", &self.presets)
            .field("disabled", &self.disabled.is_some())
            .field("disable_after_latest", &self.disable_after_latest)
            .field("year_bounds", &self.year_bounds)
            .field("locale", &self.locale)
            .field("commit_mode", &self.commit_mode)
            .finish()
    }
}

pub struct PickerConfigBuilder {
    latest_data_date: Option<NaiveDate>,
    presets: Vec<PresetKind>,
    disabled: Option<DisabledPredicate>,
    disable_after_latest: bool,
    year_bounds: Option<RangeInclusive<i32>>,
    locale: PickerLocale,
    commit_mode: CommitMode,
}

impl Default for PickerConfigBuilder {
    fn default() -> Self {
        Self {
            latest_data_date: None,
            presets: PresetKind::ALL.to_vec(),
            disabled: None,
            disable_after_latest: true,
            year_bounds: None,
            locale: PickerLocale::default(),
            commit_mode: CommitMode::default(),
        }
    }
}

impl PickerConfigBuilder {
    /// Most recent date in the dataset. `None` falls back to today (UTC).
    pub fn latest_data_date(mut self, date: Option<NaiveDate>) -> Self {
        self.latest_data_date = date;
        self
    }

    pub fn presets(mut self, presets: Vec<PresetKind>) -> Self {
        self.presets = presets;
        self
    }

    /// Extra predicate; combined with the latest-date cutoff and year bounds.
    pub fn disabled(mut self, predicate: impl Fn(NaiveDate) -> bool + Send + Sync + 'static) -> Self {
        self.disabled = Some(Arc::new(predicate));
        self
    }

    pub fn disable_after_latest(mut self, value: bool) -> Self {
        self.disable_after_latest = value;
        self
    }

    pub fn year_bounds(mut self, years: RangeInclusive<i32>) -> Self {
        self.year_bounds = Some(years);
        self
    }

    pub fn locale(mut self, locale: PickerLocale) -> Self {
        self.locale = locale;
        self
    }

    pub fn commit_mode(mut self, mode: CommitMode) -> Self {
        self.commit_mode = mode;
        self
    }

    pub fn build(self) -> PickerConfig {
        let latest_data_date = self.latest_data_date.unwrap_or_else(|| {
            let today = Utc::now().date_naive();
            log::debug!("date range picker: no latest data date, anchoring at {}", today);
            today
        });
        PickerConfig {
            latest_data_date,
            presets: self.presets,
            disabled: self.disabled,
            disable_after_latest: self.disable_after_latest,
            year_bounds: self.year_bounds,
            locale: self.locale,
            commit_mode: self.commit_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_future_dates_disabled_by_default() {
        let config = PickerConfig::builder()
            .latest_data_date(Some(d(2025, 6, 10)))
            .build();
        assert!(!config.is_disabled(d(2025, 6, 10)));
        assert!(config.is_disabled(d(2025, 6, 11)));

        let open = PickerConfig::builder()
            .latest_data_date(Some(d(2025, 6, 10)))
            .disable_after_latest(false)
            .build();
        assert!(!open.is_disabled(d(2030, 1, 1)));
    }

    #[test]
    fn test_year_bounds_and_custom_predicate() {
        let config = PickerConfig::builder()
            .latest_data_date(Some(d(2025, 6, 10)))
            .year_bounds(2020..=2025)
            .disabled(|date| date.weekday() == Weekday::Sun)
            .build();
        assert!(config.is_disabled(d(2019, 12, 31)));
        assert!(!config.is_disabled(d(2020, 1, 1)));
        // 8 June 2025 is a Sunday
        assert!(config.is_disabled(d(2025, 6, 8)));
        assert!(!config.is_disabled(d(2025, 6, 9)));
    }

    #[test]
    fn test_defaults() {
        let config = PickerConfig::builder()
            .latest_data_date(Some(d(2025, 6, 10)))
            .build();
        assert_eq!(config.presets(), &PresetKind::ALL);
        assert_eq!(config.commit_mode(), CommitMode::Staged);
        assert_eq!(config.locale(), PickerLocale::Indonesian);
    }

    #[test]
    fn test_missing_latest_date_uses_today() {
        let config = PickerConfig::default();
        assert_eq!(config.latest_data_date(), Utc::now().date_naive());
    }
}

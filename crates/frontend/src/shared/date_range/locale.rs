//! Labels and date formatting for the picker UI.

use super::presets::PresetKind;
use chrono::{Datelike, NaiveDate};

/// Language of the picker labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PickerLocale {
    #[default]
    Indonesian,
    English,
    Russian,
}

const ID_MONTHS: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];
const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const RU_MONTHS: [&str; 12] = [
    "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь", "Июль", "Август", "Сентябрь",
    "Октябрь", "Ноябрь", "Декабрь",
];

impl PickerLocale {
    /// Picks a locale from a BCP 47 tag such as `navigator.language`.
    pub fn from_language_tag(tag: &str) -> Self {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "id" | "in" => Self::Indonesian,
            "ru" => Self::Russian,
            _ => Self::English,
        }
    }

    pub fn preset_label(&self, kind: PresetKind) -> &'static str {
        use PresetKind::*;
        match self {
            Self::Indonesian => match kind {
                AllData => "Semua Data",
                Last7Days => "7 Hari Terakhir",
                Last30Days => "30 Hari Terakhir",
                Last90Days => "90 Hari Terakhir",
                ThisMonth => "Bulan Ini",
                LastMonth => "Bulan Lalu",
                Last3Months => "3 Bulan Terakhir",
                ThisQuarter => "Kuartal Ini",
                LastQuarter => "Kuartal Lalu",
                ThisYear => "Tahun Ini",
                LastYear => "Tahun Lalu",
            },
            Self::English => match kind {
                AllData => "All Data",
                Last7Days => "Last 7 Days",
                Last30Days => "Last 30 Days",
                Last90Days => "Last 90 Days",
                ThisMonth => "This Month",
                LastMonth => "Last Month",
                Last3Months => "Last 3 Months",
                ThisQuarter => "This Quarter",
                LastQuarter => "Last Quarter",
                ThisYear => "This Year",
                LastYear => "Last Year",
            },
            Self::Russian => match kind {
                AllData => "Все данные",
                Last7Days => "Последние 7 дней",
                Last30Days => "Последние 30 дней",
                Last90Days => "Последние 90 дней",
                ThisMonth => "Текущий месяц",
                LastMonth => "Предыдущий месяц",
                Last3Months => "Последние 3 месяца",
                ThisQuarter => "Текущий квартал",
                LastQuarter => "Предыдущий квартал",
                ThisYear => "Текущий год",
                LastYear => "Предыдущий год",
            },
        }
    }

    pub fn all_data_label(&self) -> &'static str {
        self.preset_label(PresetKind::AllData)
    }

    pub fn custom_label(&self) -> &'static str {
        match self {
            Self::Indonesian => "Kustom",
            Self::English => "Custom",
            Self::Russian => "Произвольный",
        }
    }

    pub fn apply_label(&self) -> &'static str {
        match self {
            Self::Indonesian => "Terapkan",
            Self::English => "Apply",
            Self::Russian => "Применить",
        }
    }

    pub fn cancel_label(&self) -> &'static str {
        match self {
            Self::Indonesian => "Batal",
            Self::English => "Cancel",
            Self::Russian => "Отмена",
        }
    }

    pub fn clear_label(&self) -> &'static str {
        match self {
            Self::Indonesian => "Hapus",
            Self::English => "Clear",
            Self::Russian => "Сбросить",
        }
    }

    /// Sunday-first short weekday names, matching the grid layout.
    pub fn weekday_short(&self) -> [&'static str; 7] {
        match self {
            Self::Indonesian => ["Min", "Sen", "Sel", "Rab", "Kam", "Jum", "Sab"],
            Self::English => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            Self::Russian => ["Вс", "Пн", "Вт", "Ср", "Чт", "Пт", "Сб"],
        }
    }

    /// Full month name, `month` is 1-based.
    pub fn month_name(&self, month: u32) -> &'static str {
        let names = match self {
            Self::Indonesian => &ID_MONTHS,
            Self::English => &EN_MONTHS,
            Self::Russian => &RU_MONTHS,
        };
        names[(month.clamp(1, 12) - 1) as usize]
    }

    /// Short day/month/year form: `10 Jun 2025`, `Jun 10, 2025`, `10.06.2025`.
    pub fn format_date(&self, date: NaiveDate) -> String {
        match self {
            Self::Indonesian => format!(
                "{} {} {}",
                date.day(),
                short_month(ID_MONTHS[date.month0() as usize]),
                date.year()
            ),
            Self::English => format!(
                "{} {}, {}",
                short_month(EN_MONTHS[date.month0() as usize]),
                date.day(),
                date.year()
            ),
            Self::Russian => date.format("%d.%m.%Y").to_string(),
        }
    }
}

fn short_month(name: &str) -> &str {
    match name.char_indices().nth(3) {
        Some((idx, _)) => &name[..idx],
        None => name,
    }
}

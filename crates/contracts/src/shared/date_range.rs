use anyhow::bail;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Период отбора данных по датам (обе границы включительно)
///
/// Both endpoints absent is the "All Data" selection: no date filtering at all.
/// It is a regular value, not an unset placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Unbounded range ("All Data")
    pub const fn all_data() -> Self {
        Self {
            from: None,
            to: None,
        }
    }

    /// Single-day range
    pub const fn single(date: NaiveDate) -> Self {
        Self {
            from: Some(date),
            to: Some(date),
        }
    }

    /// Closed range; endpoints are swapped when given out of order
    pub fn between(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            from: Some(a.min(b)),
            to: Some(a.max(b)),
        }
    }

    /// Validating constructor for values coming from untrusted input (query string, saved filters)
    pub fn try_new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> anyhow::Result<Self> {
        if let (Some(f), Some(t)) = (from, to) {
            if f > t {
                bail!("date range start {} is after its end {}", f, t);
            }
        }
        Ok(Self { from, to })
    }

    pub fn is_all_data(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Inclusive membership test; an absent endpoint does not bound that side
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |f| f <= date) && self.to.map_or(true, |t| date <= t)
    }

    /// Number of calendar days covered, counting both endpoints
    pub fn day_count(&self) -> Option<i64> {
        match (self.from, self.to) {
            (Some(f), Some(t)) => Some((t - f).num_days() + 1),
            _ => None,
        }
    }
}

/// Параметры запроса `date_from` / `date_to` (yyyy-mm-dd) для API с отбором по периоду
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl From<&DateRange> for DateRangeQuery {
    fn from(range: &DateRange) -> Self {
        Self {
            date_from: range.from.map(|d| d.format("%Y-%m-%d").to_string()),
            date_to: range.to.map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}

impl DateRangeQuery {
    /// Parse back into a validated range
    ///
    /// A single bound (`date_from` or `date_to` alone) is read as that one day,
    /// so the filter sent to the API matches what the picker shows.
    pub fn to_range(&self) -> anyhow::Result<DateRange> {
        let parse = |value: &Option<String>| -> anyhow::Result<Option<NaiveDate>> {
            match value.as_deref() {
                None | Some("") => Ok(None),
                Some(s) => Ok(Some(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)),
            }
        };
        match (parse(&self.date_from)?, parse(&self.date_to)?) {
            (Some(day), None) | (None, Some(day)) => Ok(DateRange::single(day)),
            (from, to) => DateRange::try_new(from, to),
        }
    }
}

/// Ответ сервера: дата самой свежей записи в данных
///
/// `latest_date` is either `YYYY-MM-DD` or an RFC3339 timestamp; `None` when the dataset is empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatestDataDateResponse {
    pub latest_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_between_normalizes_order() {
        let range = DateRange::between(d(2025, 3, 10), d(2025, 3, 1));
        assert_eq!(range.from, Some(d(2025, 3, 1)));
        assert_eq!(range.to, Some(d(2025, 3, 10)));
    }

    #[test]
    fn test_try_new_rejects_inverted() {
        assert!(DateRange::try_new(Some(d(2025, 3, 10)), Some(d(2025, 3, 1))).is_err());
        assert!(DateRange::try_new(Some(d(2025, 3, 1)), Some(d(2025, 3, 1))).is_ok());
        assert!(DateRange::try_new(None, None).unwrap().is_all_data());
    }

    #[test]
    fn test_contains_and_day_count() {
        let range = DateRange::between(d(2025, 1, 25), d(2025, 1, 31));
        assert!(range.contains(d(2025, 1, 25)));
        assert!(range.contains(d(2025, 1, 31)));
        assert!(!range.contains(d(2025, 2, 1)));
        assert_eq!(range.day_count(), Some(7));
        assert_eq!(DateRange::single(d(2025, 1, 1)).day_count(), Some(1));

        let all = DateRange::all_data();
        assert!(all.contains(d(1999, 12, 31)));
        assert_eq!(all.day_count(), None);
    }

    #[test]
    fn test_serialization() {
        let range = DateRange::between(d(2025, 5, 12), d(2025, 6, 10));
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"from":"2025-05-12","to":"2025-06-10"}"#);

        let all: DateRange = serde_json::from_str(r#"{"from":null,"to":null}"#).unwrap();
        assert!(all.is_all_data());
    }

    #[test]
    fn test_query_omits_absent_endpoints() {
        let query = DateRangeQuery::from(&DateRange::all_data());
        assert_eq!(serde_json::to_string(&query).unwrap(), "{}");

        let query = DateRangeQuery::from(&DateRange::between(d(2025, 2, 1), d(2025, 2, 28)));
        assert_eq!(query.date_from.as_deref(), Some("2025-02-01"));
        assert_eq!(query.to_range().unwrap(), DateRange::between(d(2025, 2, 1), d(2025, 2, 28)));
    }

    #[test]
    fn test_query_single_bound_is_one_day() {
        let only_from = DateRangeQuery {
            date_from: Some("2025-06-01".into()),
            date_to: None,
        };
        assert_eq!(only_from.to_range().unwrap(), DateRange::single(d(2025, 6, 1)));

        let only_to = DateRangeQuery {
            date_from: Some(String::new()),
            date_to: Some("2025-06-30".into()),
        };
        assert_eq!(only_to.to_range().unwrap(), DateRange::single(d(2025, 6, 30)));
    }

    #[test]
    fn test_query_rejects_garbage() {
        let query = DateRangeQuery {
            date_from: Some("2025-13-01".into()),
            date_to: None,
        };
        assert!(query.to_range().is_err());
    }
}

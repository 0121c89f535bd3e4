/// Utilities for date parsing and formatting
///
/// Provides consistent handling of the dates the backend sends
use crate::shared::date_range::{DateRangeError, PickerLocale};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse the backend's "latest data date" into a calendar day
///
/// Accepts `2025-06-10`, `2025-06-10T14:02:26Z` (RFC3339) and `2025-06-10T14:02:26`.
/// Time of day is dropped; offsets are not applied, the date as written is the data date.
pub fn parse_latest_data_date(value: &str) -> Result<NaiveDate, DateRangeError> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.date())
        .map_err(|_| DateRangeError::InvalidDate(value.to_string()))
}

/// Picker locale from the browser language, Indonesian when the browser does not say
pub fn browser_locale() -> PickerLocale {
    web_sys::window()
        .and_then(|w| w.navigator().language())
        .map(|tag| PickerLocale::from_language_tag(&tag))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(
            parse_latest_data_date("2025-06-10"),
            Ok(NaiveDate::from_ymd_opt(2025, 6, 10).unwrap())
        );
    }

    #[test]
    fn test_parse_timestamp_drops_time() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(parse_latest_data_date("2024-03-15T14:02:26.123Z"), Ok(expected));
        assert_eq!(parse_latest_data_date("2024-03-15T23:59:59+07:00"), Ok(expected));
        assert_eq!(parse_latest_data_date("2024-03-15T14:02:26"), Ok(expected));
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(
            parse_latest_data_date("invalid"),
            Err(DateRangeError::InvalidDate("invalid".into()))
        );
        assert!(parse_latest_data_date("2025-02-30").is_err());
    }
}

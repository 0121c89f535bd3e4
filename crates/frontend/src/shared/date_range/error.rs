use chrono::NaiveDate;
use thiserror::Error;

/// Ошибки движка выбора периода
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateRangeError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Date out of supported range: {year}-{month:02}")]
    OutOfRange { year: i32, month: u32 },

    #[error("Range start {from} is after its end {to}")]
    InvertedRange { from: NaiveDate, to: NaiveDate },
}

//! OHLCV bar representation.

use chrono::NaiveDate;

/// One daily bar as delivered by a data port. The core only reads
/// `date` and `close`; the remaining fields ride along for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct OhlcvBar {
    pub ticker: String,
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

//! Market data access port trait.

use crate::domain::error::TrendtraderError;
use crate::domain::ohlcv::OhlcvBar;
use chrono::NaiveDate;

/// Supplies ordered, deduplicated daily bars for a ticker. Implementations
/// fail with a `Data` error when the source is unavailable; all fetching is
/// fully materialized before the core runs.
pub trait DataPort {
    fn fetch_ohlcv(
        &self,
        ticker: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<OhlcvBar>, TrendtraderError>;

    fn list_symbols(&self) -> Result<Vec<String>, TrendtraderError>;

    fn get_data_range(
        &self,
        ticker: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, TrendtraderError>;
}

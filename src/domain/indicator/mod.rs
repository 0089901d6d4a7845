//! Trend indicator implementations.
//!
//! Each indicator is a pure transform: price series + window in, a series of
//! the same length out, aligned date-for-date with the input. Points inside
//! the warm-up prefix carry `valid: false`: explicitly undefined rather than
//! zero, so downstream signal generation cannot act on them.

pub mod ema;
pub mod sma;

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorPoint {
    pub date: NaiveDate,
    pub valid: bool,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSeries {
    pub values: Vec<IndicatorPoint>,
}

impl IndicatorSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at index `i`, or `None` inside the warm-up prefix.
    pub fn value_at(&self, i: usize) -> Option<f64> {
        self.values.get(i).filter(|p| p.valid).map(|p| p.value)
    }
}

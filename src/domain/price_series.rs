//! Validated (date, close) price series.

use chrono::NaiveDate;

use super::error::TrendtraderError;
use super::ohlcv::OhlcvBar;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Ordered series of daily closes. Dates are strictly increasing with no
/// duplicates and every close is finite; both are checked at construction,
/// after which the series is immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn from_bars(bars: &[OhlcvBar]) -> Result<Self, TrendtraderError> {
        if bars.is_empty() {
            return Err(TrendtraderError::EmptyInput);
        }

        let mut points = Vec::with_capacity(bars.len());
        let mut prev_date: Option<NaiveDate> = None;

        for bar in bars {
            if let Some(prev) = prev_date {
                if bar.date <= prev {
                    return Err(TrendtraderError::UnorderedDates { date: bar.date });
                }
            }
            if !bar.close.is_finite() {
                return Err(TrendtraderError::MissingClose { date: bar.date });
            }
            points.push(PricePoint {
                date: bar.date,
                close: bar.close,
            });
            prev_date = Some(bar.date);
        }

        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn closes(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.close)
    }

    pub fn first_date(&self) -> NaiveDate {
        self.points[0].date
    }

    pub fn last_date(&self) -> NaiveDate {
        self.points[self.points.len() - 1].date
    }
}

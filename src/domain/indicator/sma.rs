//! Simple Moving Average indicator.
//!
//! Arithmetic mean of the last `period` closes, computed with a running sum.
//! Warmup: first (period-1) points are invalid.

use crate::domain::indicator::{IndicatorPoint, IndicatorSeries};
use crate::domain::price_series::PriceSeries;

pub fn calculate_sma(prices: &PriceSeries, period: usize) -> IndicatorSeries {
    if period == 0 || prices.is_empty() {
        return IndicatorSeries { values: Vec::new() };
    }

    let points = prices.points();
    let mut values = Vec::with_capacity(points.len());
    let mut sum = 0.0;

    for (i, point) in points.iter().enumerate() {
        sum += point.close;
        if i >= period {
            sum -= points[i - period].close;
        }

        if i < period - 1 {
            values.push(IndicatorPoint {
                date: point.date,
                valid: false,
                value: 0.0,
            });
        } else {
            values.push(IndicatorPoint {
                date: point.date,
                valid: true,
                value: sum / period as f64,
            });
        }
    }

    IndicatorSeries { values }
}

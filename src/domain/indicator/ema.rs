//! Exponential Moving Average indicator.
//!
//! k = 2/(n+1), seed with first SMA, then EMA[i] = C[i]*k + EMA[i-1]*(1-k).
//! Warmup: first (n-1) points are invalid.

use crate::domain::indicator::{IndicatorPoint, IndicatorSeries};
use crate::domain::price_series::PriceSeries;

pub fn calculate_ema(prices: &PriceSeries, period: usize) -> IndicatorSeries {
    if period == 0 || prices.is_empty() {
        return IndicatorSeries { values: Vec::new() };
    }

    let mut values = Vec::with_capacity(prices.len());
    let k = 2.0 / (period as f64 + 1.0);
    let mut ema = 0.0;
    let mut sum = 0.0;

    for (i, point) in prices.points().iter().enumerate() {
        if i < period - 1 {
            sum += point.close;
            values.push(IndicatorPoint {
                date: point.date,
                valid: false,
                value: 0.0,
            });
        } else if i == period - 1 {
            sum += point.close;
            ema = sum / period as f64;
            values.push(IndicatorPoint {
                date: point.date,
                valid: true,
                value: ema,
            });
        } else {
            ema = point.close * k + ema * (1.0 - k);
            values.push(IndicatorPoint {
                date: point.date,
                valid: true,
                value: ema,
            });
        }
    }

    IndicatorSeries { values }
}

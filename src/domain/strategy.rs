//! Signal-generation strategies.
//!
//! Two variants behind one interface:
//! - `Threshold`: close vs. one moving average. Long above, Short below.
//! - `Crossover`: fast moving average vs. slow moving average, same
//!   comparison. A signal exists only where *both* averages are defined,
//!   so the warm-up region is the slow window.
//!
//! Generation is a pure single pass; the same input always produces the
//! same signal series.

use crate::domain::error::TrendtraderError;
use crate::domain::indicator::ema::calculate_ema;
use crate::domain::indicator::sma::calculate_sma;
use crate::domain::indicator::IndicatorSeries;
use crate::domain::price_series::PriceSeries;
use crate::domain::signal::{Signal, SignalPoint, SignalSeries};

/// Which moving average the strategy is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaKind {
    Simple,
    Exponential,
}

impl MaKind {
    pub fn calculate(&self, prices: &PriceSeries, period: usize) -> IndicatorSeries {
        match self {
            MaKind::Simple => calculate_sma(prices, period),
            MaKind::Exponential => calculate_ema(prices, period),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Threshold { period: usize },
    Crossover { short_period: usize, long_period: usize },
}

#[derive(Debug, Clone)]
pub struct Strategy {
    pub name: String,
    pub description: String,
    pub kind: StrategyKind,
    pub ma: MaKind,
}

impl Strategy {
    /// Derive the per-date signal series. Output length always equals the
    /// input length; warm-up dates carry `signal: None`.
    pub fn generate(&self, prices: &PriceSeries) -> Result<SignalSeries, TrendtraderError> {
        match self.kind {
            StrategyKind::Threshold { period } => {
                let ma = self.ma.calculate(prices, period);
                if ma.is_empty() {
                    return Err(TrendtraderError::EmptyInput);
                }

                let points = prices
                    .points()
                    .iter()
                    .enumerate()
                    .map(|(i, p)| SignalPoint {
                        date: p.date,
                        price: p.close,
                        signal: ma
                            .value_at(i)
                            .map(|value| Signal::from_comparison(p.close, value)),
                    })
                    .collect();
                Ok(SignalSeries { points })
            }
            StrategyKind::Crossover {
                short_period,
                long_period,
            } => {
                let short = self.ma.calculate(prices, short_period);
                let long = self.ma.calculate(prices, long_period);
                if short.is_empty() || long.is_empty() {
                    return Err(TrendtraderError::EmptyInput);
                }

                let points = prices
                    .points()
                    .iter()
                    .enumerate()
                    .map(|(i, p)| {
                        let signal = match (short.value_at(i), long.value_at(i)) {
                            (Some(s), Some(l)) => Some(Signal::from_comparison(s, l)),
                            _ => None,
                        };
                        SignalPoint {
                            date: p.date,
                            price: p.close,
                            signal,
                        }
                    })
                    .collect();
                Ok(SignalSeries { points })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ohlcv::OhlcvBar;
    use chrono::NaiveDate;

    fn make_series(closes: &[f64]) -> PriceSeries {
        let bars: Vec<OhlcvBar> = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| OhlcvBar {
                ticker: "TEST".into(),
                date: NaiveDate::from_ymd_opt(2024, 1, (i + 1) as u32).unwrap(),
                open: close,
                high: close,
                low: close,
                close,
                volume: 1000,
            })
            .collect();
        PriceSeries::from_bars(&bars).unwrap()
    }

    fn threshold(period: usize) -> Strategy {
        Strategy {
            name: "MA Threshold".into(),
            description: "Buy above the moving average, sell below".into(),
            kind: StrategyKind::Threshold { period },
            ma: MaKind::Simple,
        }
    }

    fn crossover(short: usize, long: usize) -> Strategy {
        Strategy {
            name: "MA Crossover".into(),
            description: "Fast average over slow average".into(),
            kind: StrategyKind::Crossover {
                short_period: short,
                long_period: long,
            },
            ma: MaKind::Simple,
        }
    }

    #[test]
    fn threshold_warmup_has_no_signal() {
        let prices = make_series(&[10.0, 11.0, 9.0, 12.0]);
        let signals = threshold(2).generate(&prices).unwrap();

        assert_eq!(signals.len(), 4);
        assert_eq!(signals.points[0].signal, None);
        assert!(signals.points[1..].iter().all(|p| p.signal.is_some()));
    }

    #[test]
    fn threshold_maps_price_vs_ma() {
        // SMA(2): [-, 10.5, 10.0, 10.5]
        let prices = make_series(&[10.0, 11.0, 9.0, 12.0]);
        let signals = threshold(2).generate(&prices).unwrap();

        assert_eq!(signals.points[1].signal, Some(Signal::Long));
        assert_eq!(signals.points[2].signal, Some(Signal::Short));
        assert_eq!(signals.points[3].signal, Some(Signal::Long));
    }

    #[test]
    fn threshold_flat_on_exact_equality() {
        // SMA(1) equals the close itself.
        let prices = make_series(&[10.0, 11.0]);
        let signals = threshold(1).generate(&prices).unwrap();
        assert!(signals
            .points
            .iter()
            .all(|p| p.signal == Some(Signal::Flat)));
    }

    #[test]
    fn crossover_defined_where_both_mas_defined() {
        let prices = make_series(&[10.0, 11.0, 12.0, 13.0, 14.0]);
        let signals = crossover(2, 4).generate(&prices).unwrap();

        assert!(signals.points[..3].iter().all(|p| p.signal.is_none()));
        assert!(signals.points[3].signal.is_some());
        assert!(signals.points[4].signal.is_some());
    }

    #[test]
    fn crossover_rising_prices_signal_long() {
        // Fast average sits above slow average in a steady uptrend.
        let prices = make_series(&[10.0, 11.0, 12.0, 13.0, 14.0, 15.0]);
        let signals = crossover(2, 4).generate(&prices).unwrap();

        for p in &signals.points[3..] {
            assert_eq!(p.signal, Some(Signal::Long));
        }
    }

    #[test]
    fn crossover_falling_prices_signal_short() {
        let prices = make_series(&[15.0, 14.0, 13.0, 12.0, 11.0, 10.0]);
        let signals = crossover(2, 4).generate(&prices).unwrap();

        for p in &signals.points[3..] {
            assert_eq!(p.signal, Some(Signal::Short));
        }
    }

    #[test]
    fn exponential_kind_changes_values_not_shape() {
        let prices = make_series(&[10.0, 12.0, 9.0, 14.0, 11.0]);
        let mut strategy = threshold(3);
        strategy.ma = MaKind::Exponential;
        let signals = strategy.generate(&prices).unwrap();

        assert_eq!(signals.len(), 5);
        assert!(signals.points[..2].iter().all(|p| p.signal.is_none()));
        assert!(signals.points[2..].iter().all(|p| p.signal.is_some()));
    }

    #[test]
    fn zero_period_is_rejected() {
        let prices = make_series(&[10.0, 11.0]);
        let err = threshold(0).generate(&prices).unwrap_err();
        assert!(matches!(err, TrendtraderError::EmptyInput));
    }

    #[test]
    fn generate_is_deterministic() {
        let prices = make_series(&[10.0, 11.0, 9.0, 12.0, 8.0]);
        let strategy = threshold(2);
        assert_eq!(
            strategy.generate(&prices).unwrap(),
            strategy.generate(&prices).unwrap()
        );
    }
}

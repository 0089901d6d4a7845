//! Performance metrics versus the buy-and-hold baseline.

use super::error::TrendtraderError;
use super::portfolio::{EquityPoint, Portfolio};

const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Summary statistics for one completed run. Computed once from the full
/// equity curve and trade log, never updated incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceReport {
    pub initial_cash: f64,
    pub final_value: f64,
    pub total_return_pct: f64,
    pub buy_hold_return_pct: f64,
    pub excess_return_pct: f64,
    pub volatility_pct: f64,
    pub sharpe_ratio: f64,
    pub trade_count: usize,
}

impl PerformanceReport {
    /// Compute all metrics from a simulated portfolio.
    ///
    /// The buy-and-hold baseline uses the first and last prices of the
    /// equity curve (warm-up dates included), not the trade log. Volatility
    /// and Sharpe degrade to 0 when the daily-return standard deviation is
    /// zero or the sample is too small; that is documented numeric policy,
    /// not an error.
    pub fn compute(portfolio: &Portfolio) -> Result<Self, TrendtraderError> {
        let curve = &portfolio.equity_curve;
        if curve.is_empty() {
            return Err(TrendtraderError::InsufficientData);
        }

        let initial_cash = portfolio.initial_cash;
        let final_value = curve[curve.len() - 1].value;
        let total_return_pct = (final_value - initial_cash) / initial_cash * 100.0;

        let first_price = curve[0].price;
        let last_price = curve[curve.len() - 1].price;
        let buy_hold_return_pct = (last_price - first_price) / first_price * 100.0;

        let returns = daily_returns(curve);
        let sd = sample_stddev(&returns);

        let volatility_pct = sd * TRADING_DAYS_PER_YEAR.sqrt() * 100.0;
        let sharpe_ratio = if sd > 0.0 {
            mean(&returns) / sd * TRADING_DAYS_PER_YEAR.sqrt()
        } else {
            0.0
        };

        Ok(PerformanceReport {
            initial_cash,
            final_value,
            total_return_pct,
            buy_hold_return_pct,
            excess_return_pct: total_return_pct - buy_hold_return_pct,
            volatility_pct,
            sharpe_ratio,
            trade_count: portfolio.trades.len(),
        })
    }

    /// Ordered (name, formatted value) rows for presentation layers.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Initial Cash", format!("${:.2}", self.initial_cash)),
            ("Final Portfolio Value", format!("${:.2}", self.final_value)),
            ("Total Return", format!("{:.2}%", self.total_return_pct)),
            (
                "Buy & Hold Return",
                format!("{:.2}%", self.buy_hold_return_pct),
            ),
            (
                "Strategy vs Buy & Hold",
                format!("{:.2}%", self.excess_return_pct),
            ),
            ("Volatility", format!("{:.2}%", self.volatility_pct)),
            ("Sharpe Ratio", format!("{:.2}", self.sharpe_ratio)),
            ("Number of Trades", self.trade_count.to_string()),
        ]
    }
}

/// Pairwise percentage change of consecutive equity values. The first
/// (undefined) element is dropped; fewer than 2 points yields an empty list.
fn daily_returns(curve: &[EquityPoint]) -> Vec<f64> {
    curve
        .windows(2)
        .map(|w| {
            let prev = w[0].value;
            if prev > 0.0 {
                (w[1].value - prev) / prev
            } else {
                0.0
            }
        })
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (N-1 denominator), matching the pandas default
/// the metric definitions were calibrated against. Fewer than 2 samples
/// has no defined deviation and returns 0.
fn sample_stddev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

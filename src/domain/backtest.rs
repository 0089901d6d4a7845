//! Backtest engine: drives the portfolio over a signal series.

use chrono::NaiveDate;

use super::error::TrendtraderError;
use super::portfolio::Portfolio;
use super::price_series::PriceSeries;
use super::signal::{position_changes, PositionChangeEvent, Signal, SignalSeries};

#[derive(Debug, Clone)]
pub struct BacktestConfig {
    pub ticker: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub initial_cash: f64,
}

#[derive(Debug, Clone)]
pub struct BacktestResult {
    pub portfolio: Portfolio,
    pub events: Vec<PositionChangeEvent>,
}

/// Run the simulation: one ascending pass over the signal series, which must
/// have been generated from `prices` (one point per input date).
///
/// Position-change events are the only moments a conversion can happen. An
/// event that cannot execute (Long while fully invested, Short while fully
/// in cash, any transition to Flat) changes nothing and logs no trade.
/// Equity is recorded for every date, warm-up included, after any trade for
/// that date has settled.
pub fn run_backtest(
    prices: &PriceSeries,
    signals: &SignalSeries,
    config: &BacktestConfig,
) -> Result<BacktestResult, TrendtraderError> {
    if prices.is_empty() || signals.is_empty() {
        return Err(TrendtraderError::EmptyInput);
    }
    if signals.len() != prices.len() {
        return Err(TrendtraderError::Data {
            reason: format!(
                "signal series has {} points for {} price bars",
                signals.len(),
                prices.len()
            ),
        });
    }

    let events = position_changes(signals);
    let mut portfolio = Portfolio::new(config.initial_cash);
    let mut pending = events.iter().peekable();

    for point in &signals.points {
        if let Some(event) = pending.peek() {
            if event.date == point.date {
                match event.to {
                    Signal::Long => {
                        portfolio.buy_all(event.date, event.price);
                    }
                    Signal::Short => {
                        portfolio.sell_all(event.date, event.price);
                    }
                    Signal::Flat => {}
                }
                pending.next();
            }
        }
        portfolio.record_equity(point.date, point.price);
    }

    Ok(BacktestResult { portfolio, events })
}

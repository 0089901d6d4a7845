//! Portfolio state, trade log and equity tracking.
//!
//! Single-instrument, fully-in-or-fully-out allocation: at any point the
//! portfolio is either all cash or all shares. Buys convert every dollar,
//! sells liquidate every share, always at the day's close.

use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeAction {
    Buy,
    Sell,
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeAction::Buy => write!(f, "BUY"),
            TradeAction::Sell => write!(f, "SELL"),
        }
    }
}

/// One executed conversion. `value` is the position value immediately after
/// execution: shares × price for a buy, the cash received for a sell.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeRecord {
    pub date: NaiveDate,
    pub action: TradeAction,
    pub shares: f64,
    pub price: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EquityPoint {
    pub date: NaiveDate,
    pub value: f64,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    pub cash: f64,
    pub shares: f64,
    pub initial_cash: f64,
    pub trades: Vec<TradeRecord>,
    pub equity_curve: Vec<EquityPoint>,
}

impl Portfolio {
    pub fn new(initial_cash: f64) -> Self {
        Portfolio {
            cash: initial_cash,
            shares: 0.0,
            initial_cash,
            trades: Vec::new(),
            equity_curve: Vec::new(),
        }
    }

    pub fn is_invested(&self) -> bool {
        self.shares > 0.0
    }

    /// Total value at the given price: cash + shares × price.
    pub fn value_at(&self, price: f64) -> f64 {
        self.cash + self.shares * price
    }

    /// Convert all cash to shares at `price`. A no-op (returns false) when
    /// already fully invested; the caller records no trade in that case.
    pub fn buy_all(&mut self, date: NaiveDate, price: f64) -> bool {
        if self.cash <= 0.0 {
            return false;
        }
        self.shares = self.cash / price;
        self.cash = 0.0;
        self.trades.push(TradeRecord {
            date,
            action: TradeAction::Buy,
            shares: self.shares,
            price,
            value: self.shares * price,
        });
        true
    }

    /// Convert all shares to cash at `price`. A no-op (returns false) when
    /// already fully in cash.
    pub fn sell_all(&mut self, date: NaiveDate, price: f64) -> bool {
        if self.shares <= 0.0 {
            return false;
        }
        let shares_sold = self.shares;
        self.cash = self.shares * price;
        self.shares = 0.0;
        self.trades.push(TradeRecord {
            date,
            action: TradeAction::Sell,
            shares: shares_sold,
            price,
            value: self.cash,
        });
        true
    }

    /// Append today's equity point. Must be called after any trade for the
    /// date so the value never mixes stale cash/shares with today's price.
    pub fn record_equity(&mut self, date: NaiveDate, price: f64) {
        self.equity_curve.push(EquityPoint {
            date,
            value: self.value_at(price),
            price,
        });
    }
}

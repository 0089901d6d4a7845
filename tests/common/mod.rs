#![allow(dead_code)]

use chrono::NaiveDate;
use std::collections::HashMap;
use trendtrader::domain::backtest::BacktestConfig;
use trendtrader::domain::error::TrendtraderError;
pub use trendtrader::domain::ohlcv::OhlcvBar;
use trendtrader::domain::price_series::PriceSeries;
use trendtrader::domain::strategy::{MaKind, Strategy, StrategyKind};
use trendtrader::ports::data_port::DataPort;

pub struct MockDataPort {
    pub data: HashMap<String, Vec<OhlcvBar>>,
    pub errors: HashMap<String, String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_bars(mut self, ticker: &str, bars: Vec<OhlcvBar>) -> Self {
        self.data.insert(ticker.to_string(), bars);
        self
    }

    pub fn with_error(mut self, ticker: &str, reason: &str) -> Self {
        self.errors.insert(ticker.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_ohlcv(
        &self,
        ticker: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<OhlcvBar>, TrendtraderError> {
        if let Some(reason) = self.errors.get(ticker) {
            return Err(TrendtraderError::Data {
                reason: reason.clone(),
            });
        }
        let mut bars = self.data.get(ticker).cloned().unwrap_or_default();
        bars.retain(|b| b.date >= start_date && b.date <= end_date);
        Ok(bars)
    }

    fn list_symbols(&self) -> Result<Vec<String>, TrendtraderError> {
        let mut symbols: Vec<String> = self.data.keys().cloned().collect();
        symbols.sort();
        Ok(symbols)
    }

    fn get_data_range(
        &self,
        ticker: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, TrendtraderError> {
        if let Some(reason) = self.errors.get(ticker) {
            return Err(TrendtraderError::Data {
                reason: reason.clone(),
            });
        }
        match self.data.get(ticker) {
            Some(bars) if !bars.is_empty() => {
                let min = bars.iter().map(|b| b.date).min().unwrap();
                let max = bars.iter().map(|b| b.date).max().unwrap();
                Ok(Some((min, max, bars.len())))
            }
            _ => Ok(None),
        }
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_bar(ticker: &str, date_str: &str, close: f64) -> OhlcvBar {
    OhlcvBar {
        ticker: ticker.to_string(),
        date: NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap(),
        open: close,
        high: close + 1.0,
        low: close - 1.0,
        close,
        volume: 1000,
    }
}

/// Bars on consecutive days starting 2024-01-01, one per close.
pub fn make_bars(ticker: &str, closes: &[f64]) -> Vec<OhlcvBar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| OhlcvBar {
            ticker: ticker.to_string(),
            date: date(2024, 1, 1) + chrono::Duration::days(i as i64),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 1000,
        })
        .collect()
}

pub fn make_prices(closes: &[f64]) -> PriceSeries {
    PriceSeries::from_bars(&make_bars("TEST", closes)).unwrap()
}

pub fn make_threshold_strategy(period: usize) -> Strategy {
    Strategy {
        name: "MA Threshold".into(),
        description: "Buy above the moving average, sell below".into(),
        kind: StrategyKind::Threshold { period },
        ma: MaKind::Simple,
    }
}

pub fn make_crossover_strategy(short: usize, long: usize) -> Strategy {
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

pub fn sample_config(ticker: &str, initial_cash: f64) -> BacktestConfig {
    BacktestConfig {
        ticker: ticker.to_string(),
        start_date: date(2024, 1, 1),
        end_date: date(2024, 12, 31),
        initial_cash,
    }
}

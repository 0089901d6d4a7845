//! Configuration validation.
//!
//! Validates all config fields before a backtest runs.

use crate::domain::error::TrendtraderError;
use crate::ports::config_port::ConfigPort;
use chrono::NaiveDate;

pub fn validate_backtest_config(config: &dyn ConfigPort) -> Result<(), TrendtraderError> {
    validate_data_directory(config)?;
    validate_initial_cash(config)?;
    validate_dates(config)?;
    validate_ticker(config)?;
    Ok(())
}

pub fn validate_strategy_config(config: &dyn ConfigPort) -> Result<(), TrendtraderError> {
    let kind = config
        .get_string("strategy", "kind")
        .unwrap_or_else(|| "threshold".to_string());

    match kind.to_lowercase().as_str() {
        "threshold" => validate_threshold_period(config)?,
        "crossover" => validate_crossover_periods(config)?,
        other => {
            return Err(TrendtraderError::ConfigInvalid {
                section: "strategy".to_string(),
                key: "kind".to_string(),
                reason: format!("unknown strategy kind '{}' (threshold | crossover)", other),
            })
        }
    }

    validate_ma_kind(config)?;
    Ok(())
}

fn validate_data_directory(config: &dyn ConfigPort) -> Result<(), TrendtraderError> {
    match config.get_string("data", "directory") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(TrendtraderError::ConfigMissing {
            section: "data".to_string(),
            key: "directory".to_string(),
        }),
    }
}

fn validate_initial_cash(config: &dyn ConfigPort) -> Result<(), TrendtraderError> {
    let value = config.get_double("backtest", "initial_cash", 0.0);
    if value <= 0.0 {
        return Err(TrendtraderError::ConfigInvalid {
            section: "backtest".to_string(),
            key: "initial_cash".to_string(),
            reason: "initial_cash must be positive".to_string(),
        });
    }
    Ok(())
}

fn validate_dates(config: &dyn ConfigPort) -> Result<(), TrendtraderError> {
    let start_str = config.get_string("backtest", "start_date");
    let end_str = config.get_string("backtest", "end_date");

    let start_date = parse_date(start_str.as_deref(), "start_date")?;
    let end_date = parse_date(end_str.as_deref(), "end_date")?;

    if start_date >= end_date {
        return Err(TrendtraderError::ConfigInvalid {
            section: "backtest".to_string(),
            key: "start_date".to_string(),
            reason: "start_date must be before end_date".to_string(),
        });
    }
    Ok(())
}

fn parse_date(value: Option<&str>, field: &str) -> Result<NaiveDate, TrendtraderError> {
    match value {
        None => Err(TrendtraderError::ConfigMissing {
            section: "backtest".to_string(),
            key: field.to_string(),
        }),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            TrendtraderError::ConfigInvalid {
                section: "backtest".to_string(),
                key: field.to_string(),
                reason: format!("invalid {} format, expected YYYY-MM-DD", field),
            }
        }),
    }
}

fn validate_ticker(config: &dyn ConfigPort) -> Result<(), TrendtraderError> {
    match config.get_string("backtest", "ticker") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(TrendtraderError::ConfigMissing {
            section: "backtest".to_string(),
            key: "ticker".to_string(),
        }),
    }
}

fn validate_threshold_period(config: &dyn ConfigPort) -> Result<(), TrendtraderError> {
    let period = config.get_int("strategy", "period", 20);
    if period < 1 {
        return Err(TrendtraderError::ConfigInvalid {
            section: "strategy".to_string(),
            key: "period".to_string(),
            reason: "period must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn validate_crossover_periods(config: &dyn ConfigPort) -> Result<(), TrendtraderError> {
    let short = config.get_int("strategy", "short_period", 20);
    let long = config.get_int("strategy", "long_period", 50);

    if short < 1 {
        return Err(TrendtraderError::ConfigInvalid {
            section: "strategy".to_string(),
            key: "short_period".to_string(),
            reason: "short_period must be at least 1".to_string(),
        });
    }
    if long < 1 {
        return Err(TrendtraderError::ConfigInvalid {
            section: "strategy".to_string(),
            key: "long_period".to_string(),
            reason: "long_period must be at least 1".to_string(),
        });
    }
    if short >= long {
        return Err(TrendtraderError::ConfigInvalid {
            section: "strategy".to_string(),
            key: "short_period".to_string(),
            reason: "short_period must be less than long_period".to_string(),
        });
    }
    Ok(())
}

fn validate_ma_kind(config: &dyn ConfigPort) -> Result<(), TrendtraderError> {
    let ma = config
        .get_string("strategy", "ma")
        .unwrap_or_else(|| "simple".to_string());
    match ma.to_lowercase().as_str() {
        "simple" | "exponential" => Ok(()),
        other => Err(TrendtraderError::ConfigInvalid {
            section: "strategy".to_string(),
            key: "ma".to_string(),
            reason: format!("unknown moving average '{}' (simple | exponential)", other),
        }),
    }
}

//! Domain error types.

use chrono::NaiveDate;

/// Top-level error type for trendtrader.
///
/// Every error is terminal for the run: the backtest is a deterministic
/// offline computation over fixed input, so there is nothing to retry.
#[derive(Debug, thiserror::Error)]
pub enum TrendtraderError {
    #[error("empty input: price series has no bars")]
    EmptyInput,

    #[error("missing close price for {date}")]
    MissingClose { date: NaiveDate },

    #[error("dates out of order at {date}: dates must be strictly increasing")]
    UnorderedDates { date: NaiveDate },

    #[error("no equity curve: run the backtest before computing performance")]
    InsufficientData,

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&TrendtraderError> for std::process::ExitCode {
    fn from(err: &TrendtraderError) -> Self {
        let code: u8 = match err {
            TrendtraderError::Io(_) => 1,
            TrendtraderError::ConfigParse { .. }
            | TrendtraderError::ConfigMissing { .. }
            | TrendtraderError::ConfigInvalid { .. } => 2,
            TrendtraderError::Data { .. } => 3,
            TrendtraderError::EmptyInput
            | TrendtraderError::MissingClose { .. }
            | TrendtraderError::UnorderedDates { .. } => 4,
            TrendtraderError::InsufficientData => 5,
        };
        std::process::ExitCode::from(code)
    }
}

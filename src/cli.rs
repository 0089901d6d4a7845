//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::backtest::{run_backtest, BacktestConfig};
use crate::domain::config_validation::{validate_backtest_config, validate_strategy_config};
use crate::domain::error::TrendtraderError;
use crate::domain::metrics::PerformanceReport;
use crate::domain::price_series::PriceSeries;
use crate::domain::strategy::{MaKind, Strategy, StrategyKind};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "trendtrader", about = "Single-asset trend-signal backtester")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a backtest
    Backtest {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        ticker: Option<String>,
        #[arg(long)]
        dry_run: bool,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Show the data range for a ticker
    Info {
        #[arg(long)]
        ticker: Option<String>,
        #[arg(short, long)]
        config: PathBuf,
    },
    /// List tickers available in the data directory
    ListSymbols {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Backtest {
            config,
            output,
            ticker,
            dry_run,
        } => {
            if dry_run {
                run_dry_run(&config)
            } else {
                run_backtest_command(&config, output.as_ref(), ticker.as_deref())
            }
        }
        Command::Validate { config } => run_validate(&config),
        Command::Info { ticker, config } => run_info(ticker.as_deref(), &config),
        Command::ListSymbols { config } => run_list_symbols(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = TrendtraderError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

pub fn build_backtest_config(
    config: &dyn ConfigPort,
    ticker_override: Option<&str>,
) -> Result<BacktestConfig, TrendtraderError> {
    let ticker = match ticker_override {
        Some(t) => t.to_uppercase(),
        None => config
            .get_string("backtest", "ticker")
            .map(|t| t.trim().to_uppercase())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| TrendtraderError::ConfigMissing {
                section: "backtest".into(),
                key: "ticker".into(),
            })?,
    };

    let start_date = parse_config_date(config, "start_date")?;
    let end_date = parse_config_date(config, "end_date")?;

    Ok(BacktestConfig {
        ticker,
        start_date,
        end_date,
        initial_cash: config.get_double("backtest", "initial_cash", 10_000.0),
    })
}

fn parse_config_date(
    config: &dyn ConfigPort,
    key: &str,
) -> Result<chrono::NaiveDate, TrendtraderError> {
    let value = config.get_string("backtest", key).ok_or_else(|| {
        TrendtraderError::ConfigMissing {
            section: "backtest".into(),
            key: key.into(),
        }
    })?;
    chrono::NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| {
        TrendtraderError::ConfigInvalid {
            section: "backtest".into(),
            key: key.into(),
            reason: "invalid date format (expected YYYY-MM-DD)".into(),
        }
    })
}

pub fn build_strategy(config: &dyn ConfigPort) -> Result<Strategy, TrendtraderError> {
    let kind_str = config
        .get_string("strategy", "kind")
        .unwrap_or_else(|| "threshold".to_string());

    let kind = match kind_str.to_lowercase().as_str() {
        "threshold" => StrategyKind::Threshold {
            period: config.get_int("strategy", "period", 20) as usize,
        },
        "crossover" => StrategyKind::Crossover {
            short_period: config.get_int("strategy", "short_period", 20) as usize,
            long_period: config.get_int("strategy", "long_period", 50) as usize,
        },
        other => {
            return Err(TrendtraderError::ConfigInvalid {
                section: "strategy".into(),
                key: "kind".into(),
                reason: format!("unknown strategy kind '{}' (threshold | crossover)", other),
            })
        }
    };

    let ma_str = config
        .get_string("strategy", "ma")
        .unwrap_or_else(|| "simple".to_string());
    let ma = match ma_str.to_lowercase().as_str() {
        "simple" => MaKind::Simple,
        "exponential" => MaKind::Exponential,
        other => {
            return Err(TrendtraderError::ConfigInvalid {
                section: "strategy".into(),
                key: "ma".into(),
                reason: format!("unknown moving average '{}' (simple | exponential)", other),
            })
        }
    };

    Ok(Strategy {
        name: config
            .get_string("strategy", "name")
            .unwrap_or_else(|| "Unnamed".to_string()),
        description: config
            .get_string("strategy", "description")
            .unwrap_or_default(),
        kind,
        ma,
    })
}

fn run_backtest_command(
    config_path: &PathBuf,
    output_path: Option<&PathBuf>,
    ticker_override: Option<&str>,
) -> ExitCode {
    // Stage 1: Load and validate config
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_backtest_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }
    if let Err(e) = validate_strategy_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    // Stage 2: Build strategy and backtest config
    let strategy = match build_strategy(&adapter) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!("Loading strategy: {}", strategy.name);

    let bt_config = match build_backtest_config(&adapter, ticker_override) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 3: Resolve data port
    let data_dir = adapter
        .get_string("data", "directory")
        .unwrap_or_else(|| ".".to_string());
    let data_port = CsvAdapter::new(PathBuf::from(data_dir));

    let report_output = output_path
        .map(|p| p.display().to_string())
        .or_else(|| adapter.get_string("report", "output"));

    run_backtest_pipeline(&data_port, &strategy, &bt_config, report_output.as_deref())
}

pub fn run_backtest_pipeline(
    data_port: &dyn DataPort,
    strategy: &Strategy,
    bt_config: &BacktestConfig,
    report_output: Option<&str>,
) -> ExitCode {
    // Stage 4: Fetch bars and construct the price series
    eprintln!(
        "Fetching {}: {} to {}",
        bt_config.ticker, bt_config.start_date, bt_config.end_date,
    );
    let bars = match data_port.fetch_ohlcv(&bt_config.ticker, bt_config.start_date, bt_config.end_date)
    {
        Ok(bars) => bars,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!("  {} trading days", bars.len());

    let prices = match PriceSeries::from_bars(&bars) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 5: Generate signals
    let signals = match strategy.generate(&prices) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 6: Simulate
    let result = match run_backtest(&prices, &signals, bt_config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!(
        "  {} position changes, {} trades",
        result.events.len(),
        result.portfolio.trades.len(),
    );

    // Stage 7: Compute metrics
    let report = match PerformanceReport::compute(&result.portfolio) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 8: Console summary to stderr
    eprintln!("\n=== Trade Log ===");
    if result.portfolio.trades.is_empty() {
        eprintln!("No trades executed during this period");
    } else {
        for trade in &result.portfolio.trades {
            eprintln!(
                "{}: {:.2} shares at ${:.2} on {}",
                trade.action, trade.shares, trade.price, trade.date,
            );
        }
    }

    eprintln!("\n=== Performance ===");
    for (name, value) in report.rows() {
        eprintln!("{:<24}{}", name, value);
    }

    // Stage 9: Write report
    let output = report_output.unwrap_or("report.txt");
    match TextReportAdapter.write(&result, strategy, &report, output) {
        Ok(()) => {
            eprintln!("\nReport written to: {output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to write report: {e}");
            ExitCode::from(1)
        }
    }
}

pub fn run_dry_run(config_path: &PathBuf) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_backtest_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }
    if let Err(e) = validate_strategy_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let strategy = match build_strategy(&adapter) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let bt_config = match build_backtest_config(&adapter, None) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("\nStrategy: {}", strategy.name);
    match strategy.kind {
        StrategyKind::Threshold { period } => {
            eprintln!("  kind: threshold, period {period}");
        }
        StrategyKind::Crossover {
            short_period,
            long_period,
        } => {
            eprintln!("  kind: crossover, periods {short_period}/{long_period}");
        }
    }
    eprintln!(
        "  ticker: {}, {} to {}, initial cash ${:.2}",
        bt_config.ticker, bt_config.start_date, bt_config.end_date, bt_config.initial_cash,
    );

    eprintln!("\nDry run complete: configuration is valid");
    ExitCode::SUCCESS
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_backtest_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }
    if let Err(e) = validate_strategy_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    eprintln!("Configuration is valid.");
    ExitCode::SUCCESS
}

fn run_info(ticker_override: Option<&str>, config_path: &PathBuf) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let ticker = match ticker_override
        .map(|t| t.to_uppercase())
        .or_else(|| adapter.get_string("backtest", "ticker"))
    {
        Some(t) => t,
        None => {
            eprintln!("error: ticker is required (use --ticker or set in config)");
            return ExitCode::from(1);
        }
    };

    let data_dir = adapter
        .get_string("data", "directory")
        .unwrap_or_else(|| ".".to_string());
    let data_port = CsvAdapter::new(PathBuf::from(data_dir));

    match data_port.get_data_range(&ticker) {
        Ok(Some((min_date, max_date, count))) => {
            println!("{}: {} bars, {} to {}", ticker, count, min_date, max_date);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("{}: no data found", ticker);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error querying {}: {}", ticker, e);
            (&e).into()
        }
    }
}

fn run_list_symbols(config_path: &PathBuf) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let data_dir = adapter
        .get_string("data", "directory")
        .unwrap_or_else(|| ".".to_string());
    let data_port = CsvAdapter::new(PathBuf::from(data_dir.clone()));

    match data_port.list_symbols() {
        Ok(symbols) if symbols.is_empty() => {
            eprintln!("No symbols found in {data_dir}");
            ExitCode::SUCCESS
        }
        Ok(symbols) => {
            for symbol in &symbols {
                println!("{}", symbol);
            }
            eprintln!("{} symbols found", symbols.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

//! Plain-text report adapter.
//!
//! Renders the run summary, performance metrics and trade log to a text
//! file. Consumes core outputs only.

use std::fs;

use crate::domain::backtest::BacktestResult;
use crate::domain::error::TrendtraderError;
use crate::domain::metrics::PerformanceReport;
use crate::domain::strategy::Strategy;
use crate::ports::report_port::ReportPort;

pub struct TextReportAdapter;

impl TextReportAdapter {
    pub fn render(
        result: &BacktestResult,
        strategy: &Strategy,
        report: &PerformanceReport,
    ) -> String {
        let mut out = String::new();

        out.push_str(&"=".repeat(50));
        out.push('\n');
        out.push_str(&format!("Strategy: {}\n", strategy.name));
        if !strategy.description.is_empty() {
            out.push_str(&format!("{}\n", strategy.description));
        }
        let curve = &result.portfolio.equity_curve;
        if let (Some(first), Some(last)) = (curve.first(), curve.last()) {
            out.push_str(&format!(
                "Period: {} to {} ({} trading days)\n",
                first.date,
                last.date,
                curve.len(),
            ));
        }
        out.push_str(&"=".repeat(50));
        out.push('\n');

        out.push_str("\nPERFORMANCE\n");
        out.push_str(&"-".repeat(50));
        out.push('\n');
        for (name, value) in report.rows() {
            out.push_str(&format!("{:<24}{:>26}\n", name, value));
        }

        out.push_str("\nTRADE LOG\n");
        out.push_str(&"-".repeat(50));
        out.push('\n');
        if result.portfolio.trades.is_empty() {
            out.push_str("No trades executed during this period\n");
        } else {
            for trade in &result.portfolio.trades {
                out.push_str(&format!(
                    "{}  {:<4} {:>12.2} shares @ {:>10.2}  value {:>12.2}\n",
                    trade.date, trade.action, trade.shares, trade.price, trade.value,
                ));
            }
        }

        out
    }
}

impl ReportPort for TextReportAdapter {
    fn write(
        &self,
        result: &BacktestResult,
        strategy: &Strategy,
        report: &PerformanceReport,
        output_path: &str,
    ) -> Result<(), TrendtraderError> {
        let content = Self::render(result, strategy, report);
        fs::write(output_path, content)?;
        Ok(())
    }
}

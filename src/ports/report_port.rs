//! Report generation port trait.

use crate::domain::backtest::BacktestResult;
use crate::domain::error::TrendtraderError;
use crate::domain::metrics::PerformanceReport;
use crate::domain::strategy::Strategy;

/// Port for writing backtest reports. Consumes the core's outputs only;
/// nothing here feeds back into the simulation.
pub trait ReportPort {
    fn write(
        &self,
        result: &BacktestResult,
        strategy: &Strategy,
        report: &PerformanceReport,
        output_path: &str,
    ) -> Result<(), TrendtraderError>;
}

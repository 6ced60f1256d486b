use crate::domain::model::DigitReport;
use crate::utils::error::Result;

pub trait NumberSource {
    /// One blocking read-and-parse step. No retries.
    fn read_number(&mut self) -> Result<i32>;

    /// Whether a prompt should be shown before reading.
    fn is_interactive(&self) -> bool {
        true
    }
}

pub trait ReportSink {
    fn prompt(&mut self, text: &str) -> Result<()>;
    fn emit(&mut self, report: &DigitReport) -> Result<()>;
}

pub mod runner;

pub use crate::domain::model::{DigitOperation, DigitReport, OverflowPolicy};
pub use crate::domain::ports::{NumberSource, ReportSink};
pub use crate::utils::error::Result;

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::console::{ConsoleSink, FixedSource, LineSource, OutputFormat};
pub use config::LabelConfig;
pub use core::runner::DigitRunner;
pub use domain::digits::{checked_reverse, digit_sum, reverse};
pub use domain::model::{DigitOperation, DigitReport, OverflowPolicy};
pub use utils::error::{DigitError, Result};

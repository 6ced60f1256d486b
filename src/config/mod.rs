pub mod labels;

pub use labels::LabelConfig;

#[cfg(feature = "cli")]
mod cli {
    use crate::adapters::console::OutputFormat;
    use crate::domain::model::{DigitOperation, OverflowPolicy};
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "digit-kit")]
    #[command(about = "Reverse or sum the decimal digits of a 32-bit integer")]
    pub struct CliConfig {
        /// Operation to run on the number
        #[arg(value_enum)]
        pub operation: DigitOperation,

        /// Use this number instead of reading one line from stdin
        #[arg(long, allow_hyphen_values = true)]
        pub value: Option<i32>,

        /// TOML file overriding the console labels
        #[arg(long)]
        pub labels: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        pub format: OutputFormat,

        /// Fail instead of wrapping when the result overflows
        #[arg(long)]
        pub checked: bool,

        /// Wait for Enter before exiting
        #[arg(long)]
        pub pause: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        pub fn overflow_policy(&self) -> OverflowPolicy {
            if self.checked {
                OverflowPolicy::Checked
            } else {
                OverflowPolicy::Wrapping
            }
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(path) = &self.labels {
                validate_path("labels", path)?;
            }
            Ok(())
        }
    }

}

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::domain::model::DigitOperation;
use crate::utils::error::{DigitError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_single_line, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_PROMPT: &str = "Enter a Number : ";
pub const DEFAULT_REVERSE_LABEL: &str = "Reverse of Entered Number is : ";
pub const DEFAULT_SUM_LABEL: &str = "Sum of Digits of the Number : ";

/// Console wording. Every key is optional in the TOML file:
///
/// ```toml
/// prompt = "Number? "
/// reverse = "Reversed: "
/// sum = "Digit sum: "
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelConfig {
    pub prompt: String,
    pub reverse: String,
    pub sum: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            reverse: DEFAULT_REVERSE_LABEL.to_string(),
            sum: DEFAULT_SUM_LABEL.to_string(),
        }
    }
}

impl LabelConfig {
    /// 從 TOML 檔案載入標籤
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| DigitError::ConfigError {
            message: format!(
                "Cannot read labels file '{}': {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let labels: Self = toml::from_str(content).map_err(|e| DigitError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;
        labels.validate()?;
        Ok(labels)
    }

    pub fn label_for(&self, operation: DigitOperation) -> &str {
        match operation {
            DigitOperation::Reverse => &self.reverse,
            DigitOperation::Sum => &self.sum,
        }
    }
}

impl Validate for LabelConfig {
    fn validate(&self) -> Result<()> {
        validate_single_line("labels.prompt", &self.prompt)?;
        validate_non_empty_string("labels.reverse", &self.reverse)?;
        validate_single_line("labels.reverse", &self.reverse)?;
        validate_non_empty_string("labels.sum", &self.sum)?;
        validate_single_line("labels.sum", &self.sum)?;
        Ok(())
    }
}

use crate::domain::model::DigitOperation;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigitError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Input '{input}' is not a valid integer: {source}")]
    ParseError {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("No input was provided")]
    EmptyInput,

    #[error("Result of {operation} on {input} does not fit in a 32-bit integer")]
    OverflowError { operation: DigitOperation, input: i32 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DigitError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DigitError::ParseError { .. }
            | DigitError::EmptyInput
            | DigitError::OverflowError { .. } => ErrorSeverity::Medium,
            DigitError::ConfigError { .. } | DigitError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            DigitError::IoError(_) | DigitError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// 依錯誤嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DigitError::ParseError { input, .. } => {
                format!("'{}' is not a whole number", input.trim())
            }
            DigitError::EmptyInput => "No number was entered".to_string(),
            DigitError::OverflowError { operation, input } => {
                format!("The {} of {} is too large to represent", operation, input)
            }
            DigitError::ConfigError { message } => format!("Configuration problem: {}", message),
            DigitError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            DigitError::IoError(e) => format!("Could not read or write the console: {}", e),
            DigitError::SerializationError(e) => format!("Could not format the result: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DigitError::ParseError { .. } => {
                "Enter a base-10 integer between -2147483648 and 2147483647"
            }
            DigitError::EmptyInput => "Type a number and press Enter, or pass --value",
            DigitError::OverflowError { .. } => {
                "Drop --checked to get the wrapped 32-bit result instead"
            }
            DigitError::ConfigError { .. } | DigitError::InvalidConfigValueError { .. } => {
                "Check the command-line flags and the labels file"
            }
            DigitError::IoError(_) | DigitError::SerializationError(_) => {
                "Make sure stdin and stdout are open and writable"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DigitError>;

use crate::domain::digits;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DigitOperation {
    /// Reverse the decimal digits
    Reverse,
    /// Sum the decimal digits
    Sum,
}

impl DigitOperation {
    pub fn apply(self, n: i32) -> i32 {
        match self {
            DigitOperation::Reverse => digits::reverse(n),
            DigitOperation::Sum => digits::digit_sum(n),
        }
    }

    /// `None` when the result does not fit in an `i32`. A digit sum always fits.
    pub fn checked_apply(self, n: i32) -> Option<i32> {
        match self {
            DigitOperation::Reverse => digits::checked_reverse(n),
            DigitOperation::Sum => Some(digits::digit_sum(n)),
        }
    }
}

impl fmt::Display for DigitOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigitOperation::Reverse => write!(f, "reverse"),
            DigitOperation::Sum => write!(f, "sum"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    #[default]
    Wrapping,
    Checked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitReport {
    pub operation: DigitOperation,
    pub input: i32,
    pub result: i32,
}

use crate::core::{DigitOperation, DigitReport, NumberSource, OverflowPolicy, ReportSink, Result};
use crate::utils::error::DigitError;

/// One prompt, one read, one result.
pub struct DigitRunner<S: NumberSource, K: ReportSink> {
    source: S,
    sink: K,
    operation: DigitOperation,
    policy: OverflowPolicy,
    prompt: String,
}

impl<S: NumberSource, K: ReportSink> DigitRunner<S, K> {
    pub fn new(source: S, sink: K, operation: DigitOperation) -> Self {
        Self {
            source,
            sink,
            operation,
            policy: OverflowPolicy::default(),
            prompt: crate::config::labels::DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn with_policy(mut self, policy: OverflowPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn run(&mut self) -> Result<DigitReport> {
        tracing::debug!("Running {} ({:?})", self.operation, self.policy);

        if self.source.is_interactive() {
            self.sink.prompt(&self.prompt)?;
        }

        let input = self.source.read_number()?;
        tracing::debug!("Input: {}", input);

        let result = match self.policy {
            OverflowPolicy::Wrapping => self.operation.apply(input),
            OverflowPolicy::Checked => {
                self.operation
                    .checked_apply(input)
                    .ok_or(DigitError::OverflowError {
                        operation: self.operation,
                        input,
                    })?
            }
        };

        let report = DigitReport {
            operation: self.operation,
            input,
            result,
        };
        tracing::info!("{} of {} is {}", report.operation, report.input, report.result);

        self.sink.emit(&report)?;
        Ok(report)
    }

    pub fn into_parts(self) -> (S, K) {
        (self.source, self.sink)
    }
}

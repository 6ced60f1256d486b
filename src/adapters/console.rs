use crate::config::LabelConfig;
use crate::domain::model::DigitReport;
use crate::domain::ports::{NumberSource, ReportSink};
use crate::utils::error::{DigitError, Result};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Prompt and labelled result lines
    #[default]
    Text,
    /// One JSON object per run, no prompt
    Json,
}

/// Parses one line the way a console number prompt does: surrounding
/// whitespace is ignored and a leading `+` or `-` is accepted.
pub fn parse_number(line: &str) -> Result<i32> {
    line.trim()
        .parse::<i32>()
        .map_err(|source| DigitError::ParseError {
            input: line.trim_end_matches(['\r', '\n']).to_string(),
            source,
        })
}

/// Reads exactly one line from `reader`.
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> NumberSource for LineSource<R> {
    fn read_number(&mut self) -> Result<i32> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(DigitError::EmptyInput);
        }
        tracing::debug!("Read line: {:?}", line);
        parse_number(&line)
    }
}

/// A number known before the run starts.
pub struct FixedSource(pub i32);

impl NumberSource for FixedSource {
    fn read_number(&mut self) -> Result<i32> {
        Ok(self.0)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

pub struct ConsoleSink<W> {
    writer: W,
    format: OutputFormat,
    labels: LabelConfig,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W, format: OutputFormat, labels: LabelConfig) -> Self {
        Self {
            writer,
            format,
            labels,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for ConsoleSink<W> {
    fn prompt(&mut self, text: &str) -> Result<()> {
        if self.format == OutputFormat::Text {
            writeln!(self.writer, "{}", text)?;
            self.writer.flush()?;
        }
        Ok(())
    }

    fn emit(&mut self, report: &DigitReport) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(
                self.writer,
                "{}{}",
                self.labels.label_for(report.operation),
                report.result
            )?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.writer, report)?;
                writeln!(self.writer)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Blocks until a line (or end of input) arrives.
pub fn wait_for_enter<R: BufRead>(reader: &mut R) -> Result<()> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(())
}

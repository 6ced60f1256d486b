use anyhow::Result;
use digit_kit::adapters::console::wait_for_enter;
use digit_kit::{
    ConsoleSink, DigitError, DigitOperation, DigitRunner, FixedSource, LabelConfig, LineSource,
    OutputFormat, OverflowPolicy,
};
use std::io::Cursor;
use tempfile::TempDir;

/// 模擬一次完整的主控台執行，回傳 stdout 內容
fn run_console(
    operation: DigitOperation,
    stdin: &str,
    format: OutputFormat,
    labels: LabelConfig,
) -> (digit_kit::Result<i32>, String) {
    let prompt = labels.prompt.clone();
    let sink = ConsoleSink::new(Vec::new(), format, labels);
    let mut runner = DigitRunner::new(LineSource::new(Cursor::new(stdin)), sink, operation)
        .with_prompt(prompt);
    let result = runner.run().map(|report| report.result);
    let (_, sink) = runner.into_parts();
    let out = String::from_utf8(sink.into_inner()).expect("utf-8 output");
    (result, out)
}

#[test]
fn test_reverse_session_matches_console_program() -> Result<()> {
    let (result, out) = run_console(
        DigitOperation::Reverse,
        "12345\n",
        OutputFormat::Text,
        LabelConfig::default(),
    );
    assert_eq!(result?, 54321);
    assert_eq!(
        out,
        "Enter a Number : \nReverse of Entered Number is : 54321\n"
    );
    Ok(())
}

#[test]
fn test_sum_session_with_negative_input() -> Result<()> {
    let (result, out) = run_console(
        DigitOperation::Sum,
        "-123\n",
        OutputFormat::Text,
        LabelConfig::default(),
    );
    assert_eq!(result?, -6);
    assert!(out.ends_with("Sum of Digits of the Number : -6\n"));
    Ok(())
}

#[test]
fn test_non_numeric_input_stops_after_prompt() {
    let (result, out) = run_console(
        DigitOperation::Reverse,
        "twelve\n",
        OutputFormat::Text,
        LabelConfig::default(),
    );

    let err = result.unwrap_err();
    assert!(matches!(err, DigitError::ParseError { ref input, .. } if input == "twelve"));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(out, "Enter a Number : \n");
}

#[test]
fn test_closed_stdin_is_empty_input() {
    let (result, _) = run_console(
        DigitOperation::Sum,
        "",
        OutputFormat::Json,
        LabelConfig::default(),
    );
    assert!(matches!(result.unwrap_err(), DigitError::EmptyInput));
}

#[test]
fn test_json_output_for_fixed_value() -> Result<()> {
    let sink = ConsoleSink::new(Vec::new(), OutputFormat::Json, LabelConfig::default());
    let mut runner = DigitRunner::new(FixedSource(120), sink, DigitOperation::Reverse);
    runner.run()?;

    let (_, sink) = runner.into_parts();
    let out = String::from_utf8(sink.into_inner())?;
    let value: serde_json::Value = serde_json::from_str(out.trim())?;
    assert_eq!(
        value,
        serde_json::json!({"operation": "reverse", "input": 120, "result": 21})
    );
    Ok(())
}

#[test]
fn test_checked_overflow_reports_nothing() {
    let sink = ConsoleSink::new(Vec::new(), OutputFormat::Text, LabelConfig::default());
    let mut runner = DigitRunner::new(FixedSource(i32::MIN), sink, DigitOperation::Reverse)
        .with_policy(OverflowPolicy::Checked);

    let err = runner.run().unwrap_err();
    assert!(matches!(err, DigitError::OverflowError { input: i32::MIN, .. }));

    let (_, sink) = runner.into_parts();
    assert!(sink.into_inner().is_empty());
}

#[test]
fn test_wrapping_overflow_is_reported() -> Result<()> {
    let (result, out) = run_console(
        DigitOperation::Reverse,
        "1000000009\n",
        OutputFormat::Text,
        LabelConfig::default(),
    );
    assert_eq!(result?, 410_065_409);
    assert!(out.ends_with(": 410065409\n"));
    Ok(())
}

#[test]
fn test_labels_file_overrides_wording() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let labels_path = temp_dir.path().join("labels.toml");
    std::fs::write(
        &labels_path,
        r#"
prompt = "Number? "
sum = "Digit sum: "
"#,
    )?;

    let labels = LabelConfig::from_file(&labels_path)?;
    let (result, out) = run_console(DigitOperation::Sum, " 9999 \n", OutputFormat::Text, labels);
    assert_eq!(result?, 36);
    assert_eq!(out, "Number? \nDigit sum: 36\n");
    Ok(())
}

#[test]
fn test_invalid_labels_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let labels_path = temp_dir.path().join("labels.toml");
    std::fs::write(&labels_path, "prompt = [1, 2]\n")?;

    let err = LabelConfig::from_file(&labels_path).unwrap_err();
    assert!(matches!(err, DigitError::ConfigError { .. }));
    assert_eq!(err.exit_code(), 1);
    Ok(())
}

#[test]
fn test_pause_consumes_line_after_input() -> Result<()> {
    let sink = ConsoleSink::new(Vec::new(), OutputFormat::Text, LabelConfig::default());
    let mut runner = DigitRunner::new(
        LineSource::new(Cursor::new("7\n\nleftover\n")),
        sink,
        DigitOperation::Reverse,
    );
    assert_eq!(runner.run()?.result, 7);

    let (source, _) = runner.into_parts();
    let mut reader = source.into_inner();
    wait_for_enter(&mut reader)?;

    let mut rest = String::new();
    std::io::BufRead::read_line(&mut reader, &mut rest)?;
    assert_eq!(rest, "leftover\n");
    Ok(())
}

use clap::Parser;
use digit_kit::adapters::console::wait_for_enter;
use digit_kit::core::{NumberSource, ReportSink};
use digit_kit::utils::{logger, validation::Validate};
use digit_kit::{
    CliConfig, ConsoleSink, DigitError, DigitRunner, FixedSource, LabelConfig, LineSource,
};
use std::io;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ {} failed: {} (Severity: {:?})",
            config.operation,
            e,
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), DigitError> {
    config.validate()?;

    let labels = match &config.labels {
        Some(path) => {
            tracing::info!("📁 Loading labels from: {}", path);
            LabelConfig::from_file(path)?
        }
        None => LabelConfig::default(),
    };

    let stdin = io::stdin();
    let sink = ConsoleSink::new(io::stdout().lock(), config.format, labels.clone());

    match config.value {
        Some(value) => execute(FixedSource(value), sink, config, &labels)?,
        None => execute(LineSource::new(stdin.lock()), sink, config, &labels)?,
    }

    // 對應原本主控台程式結尾的 ReadLine
    if config.pause {
        wait_for_enter(&mut stdin.lock())?;
    }

    Ok(())
}

fn execute<S: NumberSource, K: ReportSink>(
    source: S,
    sink: K,
    config: &CliConfig,
    labels: &LabelConfig,
) -> Result<(), DigitError> {
    DigitRunner::new(source, sink, config.operation)
        .with_policy(config.overflow_policy())
        .with_prompt(labels.prompt.clone())
        .run()?;
    Ok(())
}

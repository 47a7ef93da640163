use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wcag_contrast_report::checker::meets;
use wcag_contrast_report::palette::RECORDS;
use wcag_contrast_report::report::{write_json_report, write_text_report};
use wcag_contrast_report::Conformance;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Check the brand palette against WCAG AA/AAA contrast thresholds.
#[derive(Debug, Parser)]
#[command(name = "wcag-contrast-report", version)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Exit with status 1 if any pair fails this level for normal text
    #[arg(long, value_enum)]
    level: Option<Conformance>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Log every evaluated pair to stderr
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let filter_layer = if cli.debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::new("info")
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    // stdout carries the report, logs go to stderr
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .init();

    info!(records = RECORDS.len(), "wcag-contrast-report v{}", env!("CARGO_PKG_VERSION"));

    let mut stdout = io::stdout().lock();
    // violations are kept in record order for both formats
    let violations = match cli.format {
        Format::Text => {
            let results = write_text_report(&mut stdout, &RECORDS)?;
            match cli.level {
                Some(level) => results.into_iter().filter(|r| !meets(r, level)).collect::<Vec<_>>(),
                None => Vec::new(),
            }
        }
        Format::Json => {
            write_json_report(&mut stdout, &RECORDS, cli.level.unwrap_or(Conformance::Aa))?.violations
        }
    };

    let Some(level) = cli.level else {
        return Ok(ExitCode::SUCCESS);
    };

    for result in &violations {
        warn!(label = %result.label, ratio = result.ratio, %level, "pair fails contrast level");
    }

    if !violations.is_empty() {
        info!(violations = violations.len(), %level, "contrast check failed");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

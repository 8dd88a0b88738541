//! CLI tool to validate a video prompt JSON document.
//!
//! Usage:
//!   veo-validate --input prompt.json [--format text|json] [--tabs] [--summary-only]
//!   cat prompt.json | veo-validate --input -
//!
//! Exit status: 0 when the document is valid, 1 when it has errors, 2 when it
//! could not be read or parsed.

mod report;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use report::{OutputFormat, Report};
use veoprompt::{tab_status, validate_value, PromptDocument};

#[derive(Parser, Debug)]
#[command(
    name = "veo-validate",
    about = "Validate a structured video prompt document",
    version
)]
struct Args {
    /// Input JSON file path, or `-` for stdin
    #[arg(short, long)]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, env = "VEO_VALIDATE_FORMAT", default_value = "text")]
    format: OutputFormat,

    /// Also print the per-section status projection
    #[arg(long, default_value = "false")]
    tabs: bool,

    /// Print only the summary line
    #[arg(long, default_value = "false")]
    summary_only: bool,
}

fn init_tracing() {
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(true)
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }

    if !path.exists() {
        anyhow::bail!("Input file does not exist: {}", path.display());
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))
}

/// Validates the input and prints the report. Returns whether it was valid.
fn run(args: &Args) -> Result<bool> {
    let json_content = read_input(&args.input)?;
    debug!(bytes = json_content.len(), "read input");

    let candidate: Value = serde_json::from_str(&json_content).context("Failed to parse JSON")?;
    let result = validate_value(&candidate);

    // Tabs only make sense for a document the typed model can read.
    let tabs = if args.tabs {
        PromptDocument::deserialize(&candidate)
            .ok()
            .map(|document| tab_status(&document, &result.findings))
    } else {
        None
    };

    let report = Report {
        source: args.input.display().to_string(),
        result: &result,
        tabs: tabs.as_ref(),
    };
    let rendered = report
        .render(args.format, args.summary_only)
        .context("Failed to render report")?;
    println!("{rendered}");

    info!(
        is_valid = result.is_valid,
        errors = result.error_count(),
        warnings = result.warning_count(),
        "validation finished"
    );
    Ok(result.is_valid)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            error!(error = %err, "validation aborted");
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

mod cli;
mod render;

use anyhow::{Context, Result, bail};
use clap::Parser;
use daysout_core::{Config, ErrorPolicy, SystemClock, build_report, parse_date_ranges_with};
use render::{RenderOptions, Renderer, use_color};
use std::{fs, process::ExitCode};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> ExitCode {
    init_logging();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("daysout: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so the report on stdout stays clean. `RUST_LOG` overrides the level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    debug!(?config, "loaded configuration");

    let path = cli.file.display().to_string();
    let content = fs::read_to_string(&cli.file).with_context(|| format!("reading {path}"))?;

    let mut parsed = parse_date_ranges_with(content.lines(), config.error_policy);
    if !parsed.is_ok() {
        if config.error_policy == ErrorPolicy::FailFast {
            if let Some(error) = parsed.errors.pop() {
                return Err(anyhow::Error::new(error).context(format!("parsing {path}")));
            }
        }
        for error in &parsed.errors {
            eprintln!("  {error}");
        }
        bail!(
            "parsing {path}: {} invalid line(s), no report printed",
            parsed.errors.len()
        );
    }

    let report = build_report(&parsed.intervals, &SystemClock, config.window_days);
    let renderer = Renderer::new(Some(RenderOptions {
        date_format: config.date_format.clone(),
        home: config.home.clone(),
        use_color: use_color(config.color),
    }));
    renderer.print_report(&report);

    Ok(())
}

//! jpeg-header - print JPEG dimensions and EXIF orientation.

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jpeg_header::{
    check_path,
    config::{Config, OutputFormat},
    probe_path, ProbeReport,
};

fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let mut reports = Vec::with_capacity(config.paths.len());
    let mut failed = false;

    for path in &config.paths {
        let result = if config.check_only {
            check_path(path)
        } else {
            probe_path(path)
        };

        match result {
            Ok(report) => {
                failed |= if config.check_only {
                    !report.valid
                } else {
                    !report.is_ok()
                };
                reports.push(report);
            }
            Err(e) => {
                error!("{}", e);
                failed = true;
            }
        }
    }

    debug!("Probed {} file(s)", reports.len());

    match config.format {
        OutputFormat::Text => {
            for report in &reports {
                println!("{}", format_text(report, config.check_only));
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize reports: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "jpeg_header=debug"
    } else {
        "jpeg_header=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Render one report as a single line.
fn format_text(report: &ProbeReport, check_only: bool) -> String {
    if check_only {
        let verdict = if report.valid { "valid" } else { "invalid" };
        return format!("{}: {}", report.path, verdict);
    }

    match (&report.header, &report.error) {
        (Some(header), _) => match header.orientation() {
            Some(orientation) => format!(
                "{}: {}x{} (orientation {})",
                report.path,
                header.width(),
                header.height(),
                orientation
            ),
            None => format!("{}: {}x{}", report.path, header.width(), header.height()),
        },
        (None, Some(error)) => format!("{}: error: {}", report.path, error),
        (None, None) => format!("{}: no header", report.path),
    }
}

#![forbid(unsafe_code)]

mod check;
mod config;
mod render;

use crate::render::{TextReport, TomlEntry};
use anyhow::Context;
use std::io::Write;

pub use check::{check_file, CheckError, CheckOutcome};
pub use config::{AppConfig, OutputFormat, RunConfig};
pub use render::{RunSummary, TIPS};

/// Check every candidate ROM file in order, writing rendered reports to `out`.
///
/// Unreadable files are reported and counted but do not stop the run.
///
/// # Errors
///
/// Returns an error if writing to `out` fails or if the TOML output cannot be serialized.
pub fn run<W>(run_config: &RunConfig, out: &mut W) -> Result<RunSummary, anyhow::Error>
where
    W: Write,
{
    let mut summary = RunSummary::default();
    let mut toml_entries = Vec::new();

    for file_path in &run_config.rom_files {
        let report = match check_file(file_path) {
            Ok(CheckOutcome::Checked(report)) => report,
            Ok(CheckOutcome::Missing) => {
                if !run_config.rom_files_explicit {
                    log::debug!("Skipping missing ROM file {file_path}");
                    continue;
                }

                log::warn!("ROM file not found: {file_path}");
                summary.missing += 1;
                if run_config.output_format == OutputFormat::Text {
                    writeln!(out, "{}", render::render_missing(file_path))?;
                }
                continue;
            }
            Err(err) => {
                log::error!("{err}");
                summary.unreadable += 1;
                if run_config.output_format == OutputFormat::Text {
                    writeln!(out, "{}", render::render_unreadable(file_path, &err))?;
                }
                continue;
            }
        };

        let findings = report.findings();
        log::debug!("Checked {file_path}: status={}, findings={findings:?}", report.status());

        summary.checked += 1;
        if !findings.is_empty() {
            summary.with_findings += 1;
        }

        match run_config.output_format {
            OutputFormat::Text => {
                let text_report = TextReport {
                    file_path,
                    report: &report,
                    show_preview: run_config.show_preview,
                };
                writeln!(out, "{text_report}")?;
            }
            OutputFormat::Toml => {
                toml_entries.push(TomlEntry { path: file_path.clone(), findings, report });
            }
        }
    }

    match run_config.output_format {
        OutputFormat::Text => {
            write!(out, "{summary}")?;
            if run_config.show_tips {
                write!(out, "\n{TIPS}")?;
            }
        }
        OutputFormat::Toml => {
            let toml_str = render::render_toml(&toml_entries)
                .context("error serializing header reports into TOML")?;
            write!(out, "{toml_str}")?;
        }
    }

    log::info!(
        "Checked {} ROM file(s), {} with findings",
        summary.checked,
        summary.with_findings
    );

    Ok(summary)
}

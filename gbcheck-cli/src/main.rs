use clap::Parser;
use env_logger::Env;
use gbcheck_cli::{AppConfig, OutputFormat, RunConfig};
use std::io;

/// Validate Game Boy ROM headers: Nintendo logo, header checksum and basic cartridge metadata.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// ROM files to check; replaces the configured candidate list
    roms: Vec<String>,
    /// Path to a TOML config file
    #[arg(short = 'c', long = "config")]
    config_path: Option<String>,
    /// Output format (text or toml)
    #[arg(short = 'f', long = "format")]
    output_format: Option<OutputFormat>,
    #[arg(long = "no-preview")]
    no_preview: bool,
    #[arg(long = "no-tips")]
    no_tips: bool,
    /// Exit with an error if any ROM has findings or could not be checked
    #[arg(long = "strict")]
    strict: bool,
    /// Write the effective config to the given path as TOML and exit
    #[arg(long = "write-config")]
    write_config_path: Option<String>,
}

impl Cli {
    fn apply_overrides(&self, mut app_config: AppConfig) -> AppConfig {
        if let Some(output_format) = self.output_format {
            app_config.output_format = output_format;
        }
        app_config.show_preview &= !self.no_preview;
        app_config.show_tips &= !self.no_tips;
        app_config.strict |= self.strict;
        app_config
    }
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Cli::parse();

    let app_config = match &args.config_path {
        Some(config_path) => AppConfig::from_toml_file(config_path)?,
        None => AppConfig::default(),
    };
    let app_config = args.apply_overrides(app_config);

    if let Some(write_config_path) = &args.write_config_path {
        app_config.save_to_file(write_config_path)?;
        log::info!("Wrote config to '{write_config_path}'");
        return Ok(());
    }

    let run_config = RunConfig::new(&app_config, args.roms);
    log::debug!("Running with config:\n{run_config}");

    let summary = gbcheck_cli::run(&run_config, &mut io::stdout().lock())?;

    if app_config.strict && summary.has_failures() {
        anyhow::bail!(
            "{} of {} ROM file(s) failed validation",
            summary.with_findings + summary.missing + summary.unreadable,
            summary.checked + summary.missing + summary.unreadable
        );
    }

    Ok(())
}

use anyhow::Context;
use gbcheck_proc_macros::{EnumDisplay, EnumFromStr, StrDeserialize, StrSerialize};
use serde::{Deserialize, Serialize};
use std::fmt::Formatter;
use std::fs;
use std::path::Path;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumDisplay,
    EnumFromStr,
    StrSerialize,
    StrDeserialize,
)]
pub enum OutputFormat {
    Text,
    Toml,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_rom_files")]
    pub rom_files: Vec<String>,

    #[serde(default)]
    pub output_format: OutputFormat,

    #[serde(default = "default_show_preview")]
    pub show_preview: bool,

    #[serde(default = "default_show_tips")]
    pub show_tips: bool,

    #[serde(default)]
    pub strict: bool,
}

fn default_rom_files() -> Vec<String> {
    vec![
        "sweet_life_game.gb".into(),
        "advanced_demo.gb".into(),
        "life_game.gb".into(),
    ]
}

fn default_show_preview() -> bool {
    true
}

fn default_show_tips() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rom_files: default_rom_files(),
            output_format: OutputFormat::default(),
            show_preview: default_show_preview(),
            show_tips: default_show_tips(),
            strict: bool::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_file<P>(path: P) -> Result<Self, anyhow::Error>
    where
        P: AsRef<Path> + std::fmt::Debug,
    {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("error reading TOML config file from '{path:?}'"))?;
        let config: Self = toml::from_str(&config_str)
            .with_context(|| format!("error parsing app config from TOML file at '{path:?}'"))?;

        Ok(config)
    }

    pub fn save_to_file<P>(&self, path: P) -> Result<(), anyhow::Error>
    where
        P: AsRef<Path> + std::fmt::Debug,
    {
        let config_str =
            toml::to_string_pretty(self).context("error serializing config into TOML")?;
        fs::write(path.as_ref(), config_str)
            .with_context(|| format!("error writing app config to '{path:?}'"))?;

        Ok(())
    }
}

/// Settings for a single run, after command-line overrides have been applied.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub rom_files: Vec<String>,
    // Explicitly requested files are reported when missing; configured candidates are skipped
    pub rom_files_explicit: bool,
    pub output_format: OutputFormat,
    pub show_preview: bool,
    pub show_tips: bool,
}

impl RunConfig {
    /// Build a run config from the app config. A non-empty `explicit_rom_files` replaces the
    /// configured candidate list.
    pub fn new(app_config: &AppConfig, explicit_rom_files: Vec<String>) -> Self {
        let rom_files_explicit = !explicit_rom_files.is_empty();
        let rom_files =
            if rom_files_explicit { explicit_rom_files } else { app_config.rom_files.clone() };

        Self {
            rom_files,
            rom_files_explicit,
            output_format: app_config.output_format,
            show_preview: app_config.show_preview,
            show_tips: app_config.show_tips,
        }
    }
}

impl std::fmt::Display for RunConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "rom_files: {}", self.rom_files.join(", "))?;
        writeln!(f, "rom_files_explicit: {}", self.rom_files_explicit)?;
        writeln!(f, "output_format: {}", self.output_format)?;
        writeln!(f, "show_preview: {}", self.show_preview)?;
        writeln!(f, "show_tips: {}", self.show_tips)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(AppConfig::default(), config);
        assert_eq!(
            vec!["sweet_life_game.gb", "advanced_demo.gb", "life_game.gb"],
            config.rom_files
        );
        assert_eq!(OutputFormat::Text, config.output_format);
        assert!(config.show_preview);
        assert!(config.show_tips);
        assert!(!config.strict);
    }

    #[test]
    fn partial_config() {
        let config: AppConfig = toml::from_str(
            r#"
            rom_files = ["tetris.gb"]
            output_format = "toml"
            strict = true
            "#,
        )
        .unwrap();

        assert_eq!(vec!["tetris.gb"], config.rom_files);
        assert_eq!(OutputFormat::Toml, config.output_format);
        assert!(config.show_preview);
        assert!(config.strict);
    }

    #[test]
    fn invalid_output_format() {
        let result: Result<AppConfig, _> = toml::from_str(r#"output_format = "json""#);
        assert!(result.is_err());
    }

    #[test]
    fn output_format_from_str() {
        assert_eq!(Ok(OutputFormat::Text), "text".parse());
        assert_eq!(Ok(OutputFormat::Toml), "TOML".parse());
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!("toml", OutputFormat::Toml.to_string());
    }

    #[test]
    fn save_and_reload() {
        let path = std::env::temp_dir().join(format!("gbcheck-config-{}.toml", std::process::id()));
        let config = AppConfig {
            rom_files: vec!["a.gb".into(), "b.gbc".into()],
            output_format: OutputFormat::Toml,
            show_preview: false,
            show_tips: false,
            strict: true,
        };

        config.save_to_file(&path).unwrap();
        let reloaded = AppConfig::from_toml_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config, reloaded);
    }

    #[test]
    fn explicit_files_replace_configured_list() {
        let app_config = AppConfig::default();

        let run_config = RunConfig::new(&app_config, Vec::new());
        assert_eq!(app_config.rom_files, run_config.rom_files);
        assert!(!run_config.rom_files_explicit);

        let run_config = RunConfig::new(&app_config, vec!["pokemon.gb".into()]);
        assert_eq!(vec!["pokemon.gb"], run_config.rom_files);
        assert!(run_config.rom_files_explicit);
    }
}

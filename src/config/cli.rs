use crate::config::toml_config::TomlConfig;
use crate::config::StripConfig;
use crate::utils::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "i18n-strip")]
#[command(about = "Remove stale language blocks from a translation table after checking anchor lines")]
pub struct CliArgs {
    /// TOML file with target path, anchors and ranges (defaults to the built-in i18n preset)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the target file path
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Validate and report what would be removed without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Resolves the config file or preset, then applies `--file`.
    pub fn strip_config(&self) -> Result<StripConfig> {
        let config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)?.into_strip_config()
            }
            None => StripConfig::default(),
        };

        Ok(match &self.file {
            Some(file) => {
                tracing::info!("🔧 Target path overridden to: {}", file.display());
                config.with_path(file)
            }
            None => config,
        })
    }
}

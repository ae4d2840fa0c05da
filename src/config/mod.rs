pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::{error::Result, logger, validation::Validate};
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use toml_config::AppConfig;

/// Flags shared by the `school` and `bank` binaries.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CliConfig {
    /// Path to an optional TOML file with seed data and account rules
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn init_logging(&self) {
        if self.log_json {
            logger::init_json_logger(self.verbose);
        } else {
            logger::init_cli_logger(self.verbose);
        }
    }

    /// Loads and validates `--config`, or returns the built-in defaults.
    pub fn load(&self) -> Result<AppConfig> {
        let config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                AppConfig::from_file(path)?
            }
            None => AppConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }
}

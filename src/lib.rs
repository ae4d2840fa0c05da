pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::console::{ScriptedConsole, StdConsole};
pub use config::toml_config::AppConfig;
pub use crate::core::{bank::Bank, registry::Registry};
pub use utils::error::{AppError, Result};

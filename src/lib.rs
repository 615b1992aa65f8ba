pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use config::{storage::LocalStorage, toml_config::TomlConfig, StripConfig};
pub use core::engine::StripEngine;
pub use utils::error::{Result, StripError};

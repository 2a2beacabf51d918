//! CLI command implementations

pub mod config;
pub mod session;

use std::path::PathBuf;

use anyhow::{Context, Result};
use teller_core::config::Config;

/// Get the teller directory from environment or default
pub fn get_teller_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TELLER_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".teller")
    }
}

/// Load the effective configuration (settings file + environment)
pub fn load_config() -> Result<Config> {
    let teller_dir = get_teller_dir();
    Config::load(&teller_dir)
        .with_context(|| format!("Failed to load configuration from {:?}", teller_dir))
}

//! Configuration management
//!
//! Settings live in `settings.json` inside the teller directory:
//! ```json
//! {
//!   "session": { "accountId": "123456", "errorPolicy": "abort", "currencySymbol": "$" }
//! }
//! ```
//! Any field may be omitted. Environment variables override the file, and
//! command line flags (applied by the CLI) override both.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Account identifier used when nothing else is configured
pub const DEFAULT_ACCOUNT_ID: &str = "123456";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    session: SessionSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionSettings {
    #[serde(default)]
    account_id: Option<String>,
    #[serde(default)]
    error_policy: Option<ErrorPolicy>,
    #[serde(default)]
    currency_symbol: Option<String>,
}

fn read_settings(teller_dir: &Path) -> Result<SettingsFile> {
    let settings_path = teller_dir.join("settings.json");
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }

    let content = std::fs::read_to_string(&settings_path)
        .with_context(|| format!("Failed to read {:?}", settings_path))?;
    Ok(serde_json::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!("ignoring malformed settings file: {}", e);
        SettingsFile::default()
    }))
}

/// What the console does after an account operation fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Report the error and end the session
    #[default]
    Abort,
    /// Report the error and keep reading commands
    Continue,
}

impl ErrorPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorPolicy::Abort => "abort",
            ErrorPolicy::Continue => "continue",
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "abort" => Ok(ErrorPolicy::Abort),
            "continue" => Ok(ErrorPolicy::Continue),
            other => anyhow::bail!("Unknown error policy '{}' (expected abort or continue)", other),
        }
    }
}

/// Teller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub account_id: String,
    pub error_policy: ErrorPolicy,
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account_id: DEFAULT_ACCOUNT_ID.to_string(),
            error_policy: ErrorPolicy::Abort,
            currency_symbol: "$".to_string(),
        }
    }
}

impl Config {
    /// Load config from the teller directory
    ///
    /// A missing or malformed settings file falls back to defaults.
    /// `TELLER_ACCOUNT_ID` and `TELLER_ERROR_POLICY` override the file.
    pub fn load(teller_dir: &Path) -> Result<Self> {
        let raw = read_settings(teller_dir)?;
        Self::from_settings(raw).with_env(|key| std::env::var(key).ok())
    }

    fn from_settings(raw: SettingsFile) -> Self {
        let defaults = Self::default();
        Self {
            account_id: raw
                .session
                .account_id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or(defaults.account_id),
            error_policy: raw.session.error_policy.unwrap_or(defaults.error_policy),
            currency_symbol: raw
                .session
                .currency_symbol
                .unwrap_or(defaults.currency_symbol),
        }
    }

    /// Apply environment overrides using the given lookup
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(id) = lookup("TELLER_ACCOUNT_ID").filter(|id| !id.trim().is_empty()) {
            self.account_id = id;
        }
        if let Some(policy) = lookup("TELLER_ERROR_POLICY") {
            self.error_policy = policy
                .parse()
                .context("Invalid TELLER_ERROR_POLICY")?;
        }
        Ok(self)
    }
}

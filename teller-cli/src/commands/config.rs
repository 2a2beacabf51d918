//! Config command - show the effective configuration

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use teller_core::config::Config;

use super::{get_teller_dir, load_config};
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let config = load_config()?;

    let settings_path = get_teller_dir().join("settings.json");
    let source = if settings_path.exists() {
        settings_path.display().to_string()
    } else {
        "defaults (no settings file)".to_string()
    };

    render(&mut io::stdout(), &config, &source, json)
}

fn render(out: &mut impl Write, config: &Config, source: &str, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
        return Ok(());
    }

    writeln!(out, "{}", "Teller Configuration".bold())?;
    writeln!(out)?;

    let mut table = output::create_table();
    table.add_row(vec!["Account ID", config.account_id.as_str()]);
    table.add_row(vec!["Error policy", config.error_policy.as_str()]);
    table.add_row(vec!["Currency symbol", config.currency_symbol.as_str()]);
    table.add_row(vec!["Source", source]);
    writeln!(out, "{}", table)?;

    Ok(())
}

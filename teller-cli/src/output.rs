//! Output formatting utilities
//!
//! Helpers take the writer explicitly so the session can be driven against
//! in-memory buffers in tests.

use std::io::{self, Write};

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use rust_decimal::Decimal;

/// Print a success message
pub fn success(out: &mut impl Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{}", msg.green())
}

/// Print an error message
pub fn error(err: &mut impl Write, msg: &str) -> io::Result<()> {
    writeln!(err, "{}", msg.red())
}

/// Print a warning message
pub fn warning(out: &mut impl Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{}", msg.yellow())
}

/// Print an info message
pub fn info(out: &mut impl Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{}", msg.cyan())
}

/// Format an amount with the configured currency symbol
pub fn money(symbol: &str, amount: Decimal) -> String {
    format!("{}{}", symbol, amount)
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

//! Terminal output: banner, section headings, result lists and errors.

use colored::Colorize;
use serde::Serialize;
use std::error::Error;
use std::fmt::Display;
use std::io::Write;

/// How results are rendered on stdout.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Banner, headings and one `a.b.c.d/p` per line
    #[default]
    Text,
    /// A single JSON object holding every result and error of the run
    Json,
}

const BANNER_WIDTH: usize = 44;

/// Print the boxed tool banner.
pub fn write_banner<W: Write>(out: &mut W) -> std::io::Result<()> {
    let border = "=".repeat(BANNER_WIDTH);
    let title = format!(
        "{} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    let subtitle = "IPv4 range -> CIDR | subnet split";

    writeln!(out, "{border}")?;
    writeln!(out, "{}", format!("{title:^BANNER_WIDTH$}").bold().cyan())?;
    writeln!(out, "{subtitle:^BANNER_WIDTH$}")?;
    writeln!(out, "{border}")
}

pub fn write_heading<W: Write>(out: &mut W, heading: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", heading.green())
}

/// Print a result list, one item per line.
pub fn write_items<W: Write, T: Display>(out: &mut W, items: &[T]) -> std::io::Result<()> {
    for item in items {
        writeln!(out, "{item}")?;
    }
    Ok(())
}

/// Print `value` as one pretty-printed JSON document.
pub fn write_json<W, T>(out: &mut W, value: &T) -> Result<(), Box<dyn Error>>
where
    W: Write,
    T: Serialize,
{
    let json =
        serde_json::to_string_pretty(value).map_err(|e| format!("Error serializing JSON: {e}"))?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// Report a failed operation; the run carries on with the next one.
pub fn write_error<W: Write>(
    out: &mut W,
    operation: &str,
    err: &dyn Display,
) -> std::io::Result<()> {
    writeln!(out, "{} {operation}: {err}", "Error".on_red())
}

//! Command line arguments and the driver that runs the requested operations.

use crate::models::Cidr;
use crate::output::{
    write_banner, write_error, write_heading, write_items, write_json, write_lines, OutputFormat,
};
use crate::processing::{range_to_cidr, split_subnet};
use clap::{CommandFactory, Parser};
use serde::Serialize;
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

/// Default cap on the number of subnets listed by one `--subnet` request.
pub const DEFAULT_MAX_SUBNETS: u64 = 65_536;

/// Convert IPv4 ranges to CIDR blocks and split networks into subnets.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Split NETWORK (e.g. 192.168.0.0/16) into subnets of length NEW_PREFIX (e.g. 17)
    #[arg(long, num_args = 2, value_names = ["NETWORK", "NEW_PREFIX"], allow_hyphen_values = true)]
    pub subnet: Option<Vec<String>>,

    /// Convert the inclusive range START..END to CIDR blocks
    #[arg(long, num_args = 2, value_names = ["START", "END"])]
    pub range: Option<Vec<String>>,

    /// Also write the results to this file, one per line. With both --subnet
    /// and --range the file holds both lists, subnets first
    #[arg(long, value_name = "PATH")]
    pub saveas: Option<PathBuf>,

    /// Output format on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Refuse subnet splits producing more than this many subnets
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_SUBNETS)]
    pub max_subnets: u64,

    /// Do not print the banner and section headings (always off with --format json)
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configure logging from a log4rs YAML file instead
    #[arg(long, value_name = "PATH")]
    pub log_config: Option<PathBuf>,
}

impl Cli {
    /// True when at least one of `--subnet` / `--range` was given.
    pub fn has_operation(&self) -> bool {
        self.subnet.is_some() || self.range.is_some()
    }
}

/// Print the usage help, for runs that ask for no operation.
pub fn write_usage<W: Write>(out: &mut W) -> std::io::Result<()> {
    Cli::command().write_help(out)
}

/// Everything one run produced, printed as a whole with `--format json`.
#[derive(Serialize, Default, Debug)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<Cidr>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidrs: Option<Vec<Cidr>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl Report {
    /// Every result in run order: subnets first, then CIDR blocks.
    fn lines(&self) -> Vec<Cidr> {
        self.subnets
            .iter()
            .chain(self.cidrs.iter())
            .flatten()
            .copied()
            .collect()
    }
}

/// Run the subnet split, then the range conversion, writing results to `out`.
///
/// A failing operation is reported and does not stop the other one. With
/// `--format json` nothing is written until the end, and then only the
/// [`Report`], so stdout stays a single JSON document.
///
/// # Returns
/// * `Ok(true)` - every requested operation (and the save) succeeded
/// * `Ok(false)` - at least one of them failed and was reported
/// * `Err` - `out` could not be written
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<bool, Box<dyn Error>> {
    if cli.no_color {
        colored::control::set_override(false);
    }
    let text = cli.format == OutputFormat::Text;
    let headings = text && !cli.quiet;
    if headings {
        write_banner(out)?;
    }

    let mut report = Report::default();

    if let Some([network, new_prefix]) = cli.subnet.as_deref() {
        match subnets(network, new_prefix, cli.max_subnets) {
            Ok(subnets) => {
                if headings {
                    let heading = format!("Subnets of {network} at /{}:", new_prefix.trim());
                    write_heading(out, &heading)?;
                }
                if text {
                    write_items(out, &subnets)?;
                }
                report.subnets = Some(subnets);
            }
            Err(e) => {
                log::warn!("subnet {network} {new_prefix} failed: {e}");
                if text {
                    write_error(out, "subnet", &e)?;
                }
                report.errors.push(format!("subnet: {e}"));
            }
        }
    }

    if let Some([start, end]) = cli.range.as_deref() {
        match range_to_cidr(start, end) {
            Ok(cidrs) => {
                if headings {
                    write_heading(out, &format!("CIDR blocks for {start} - {end}:"))?;
                }
                if text {
                    write_items(out, &cidrs)?;
                }
                report.cidrs = Some(cidrs);
            }
            Err(e) => {
                log::warn!("range {start} {end} failed: {e}");
                if text {
                    write_error(out, "range", &e)?;
                }
                report.errors.push(format!("range: {e}"));
            }
        }
    }

    if let Some(path) = &cli.saveas {
        if report.subnets.is_some() || report.cidrs.is_some() {
            if let Err(e) = write_lines(path, &report.lines()) {
                log::error!("{e}");
                if text {
                    write_error(out, "saveas", &e)?;
                }
                report.errors.push(format!("saveas: {e}"));
            }
        } else {
            log::warn!("Nothing to write to {}", path.display());
        }
    }

    if !text {
        write_json(out, &report)?;
    }
    Ok(report.errors.is_empty())
}

/// Collect the subnets of `network`, unless there are more than `max`.
fn subnets(network: &str, new_prefix: &str, max: u64) -> Result<Vec<Cidr>, Box<dyn Error>> {
    let subnets = split_subnet(network, new_prefix)?;
    if subnets.total() > max {
        return Err(format!(
            "{} subnets of {} is more than the limit of {max}; raise --max-subnets to list them",
            subnets.total(),
            subnets.parent()
        )
        .into());
    }
    Ok(subnets.collect())
}

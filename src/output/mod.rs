//! Output of results:
//! - [`terminal`] - banner, headings and result lists on stdout
//! - [`file`] - line-oriented result files

mod file;
mod terminal;

pub use file::write_lines;
pub use terminal::{
    write_banner, write_error, write_heading, write_items, write_json, OutputFormat,
};

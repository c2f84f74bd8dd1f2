//! Convert inclusive IPv4 address ranges into the fewest exact CIDR blocks,
//! and split IPv4 networks into equal subnets of a longer prefix.
//!
//! - [`processing::range_to_cidr`] - range to CIDR blocks
//! - [`processing::split_subnet`] - network to subnets

pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::CidrError;
pub use models::{AddressRange, Cidr};
pub use processing::{range_to_cidr, split_subnet, Subnets};

//! The two address operations:
//! - [`range_to_cidr`] - exact CIDR cover of an address range
//! - [`split_subnet`] - equal-size subnets of a network

mod range_to_cidr;
mod subnet_split;

pub use range_to_cidr::{range_to_cidr, MIN_BLOCK_MASK};
pub use subnet_split::{split_subnet, Subnets};

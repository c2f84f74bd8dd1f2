//! Value types shared by the range and subnet operations:
//! - [`Cidr`] - IPv4 network in CIDR notation
//! - [`AddressRange`] - inclusive address range

mod ipv4;
mod range;

pub use ipv4::{cut_addr, get_cidr_mask, lo_mask, Cidr, MAX_LENGTH};
pub use range::AddressRange;

//! Errors returned by the range and subnet operations.

use std::net::Ipv4Addr;

/// Everything that can go wrong while converting a range or splitting a network.
///
/// Each variant carries the input that was rejected so the caller can report it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CidrError {
    /// The text is not a dotted-quad IPv4 address.
    #[error("invalid IPv4 address '{0}'")]
    InvalidAddress(String),
    /// The start of a range lies above its end.
    #[error("start address {start} must be less than or equal to end address {end}")]
    InvalidRange { start: Ipv4Addr, end: Ipv4Addr },
    /// The text is not an `a.b.c.d/p` network.
    #[error("invalid IPv4 network '{0}'")]
    InvalidNetwork(String),
    /// The new prefix is not an integer, or does not subdivide the network.
    #[error("new prefix '{prefix}' must be an integer longer than /{current} and at most /32")]
    InvalidPrefix { prefix: String, current: u8 },
}

//! Inclusive IPv4 address range.

use crate::error::CidrError;
use std::net::Ipv4Addr;

/// An inclusive range of IPv4 addresses, `start <= end`.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct AddressRange {
    start: Ipv4Addr,
    end: Ipv4Addr,
}

impl AddressRange {
    pub fn new(start: Ipv4Addr, end: Ipv4Addr) -> Result<AddressRange, CidrError> {
        if start > end {
            return Err(CidrError::InvalidRange { start, end });
        }
        Ok(AddressRange { start, end })
    }

    /// Parse two dotted-quad addresses and build the range between them.
    ///
    /// Addresses are parsed strictly: no surrounding whitespace and no
    /// leading zeros in an octet.
    pub fn parse(start: &str, end: &str) -> Result<AddressRange, CidrError> {
        let start = parse_addr(start)?;
        let end = parse_addr(end)?;
        AddressRange::new(start, end)
    }

    pub fn start(&self) -> Ipv4Addr {
        self.start
    }

    pub fn end(&self) -> Ipv4Addr {
        self.end
    }

    /// Number of addresses in the range (at least 1, at most 2^32).
    pub fn len(&self) -> u64 {
        u64::from(u32::from(self.end)) - u64::from(u32::from(self.start)) + 1
    }

    /// Always false; a range holds at least one address.
    pub fn is_empty(&self) -> bool {
        false
    }
}

fn parse_addr(addr: &str) -> Result<Ipv4Addr, CidrError> {
    addr.parse()
        .map_err(|_| CidrError::InvalidAddress(addr.to_string()))
}

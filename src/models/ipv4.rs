//! IPv4 CIDR block type and mask arithmetic.
//!
//! Provides [`Cidr`] for representing an IPv4 network in CIDR notation,
//! along with the bit helpers the range and subnet operations are built on.

use crate::error::CidrError;
use ipnet::{Ipv4Net, PrefixLenError};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

// Caller guarantees `len <= MAX_LENGTH`.
fn mask_bits(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_cidr_tools::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, PrefixLenError> {
    if len > MAX_LENGTH {
        Err(PrefixLenError)
    } else {
        Ok(mask_bits(len))
    }
}

/// Get the network address for a given IP and prefix length (host bits cleared).
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, PrefixLenError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Smallest prefix length for which `ip` is still the network address.
///
/// `0.0.0.0` is aligned to every block, so it yields 0.
pub fn lo_mask(ip: Ipv4Addr) -> u8 {
    let trailing_zeros = u32::from(ip).trailing_zeros() as u8;
    MAX_LENGTH - trailing_zeros
}

/// An IPv4 network in CIDR notation.
///
/// The stored address is always the network (base) address of the block.
/// Construction is non-strict: host bits in the supplied address are masked
/// off rather than rejected, so `10.1.2.3/8` becomes `10.0.0.0/8`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    addr: Ipv4Addr,
    mask: u8,
}

impl Cidr {
    /// Build the block of length `mask` that contains `addr`.
    pub fn new(addr: Ipv4Addr, mask: u8) -> Result<Cidr, PrefixLenError> {
        let addr = cut_addr(addr, mask)?;
        Ok(Cidr { addr, mask })
    }

    /// The network (first) address.
    pub fn network(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix_len(&self) -> u8 {
        self.mask
    }

    /// The broadcast (last) address.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !mask_bits(self.mask))
    }

    /// Number of addresses in the block; 2^32 for `/0`.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.addr <= ip && ip <= self.broadcast()
    }
}

impl FromStr for Cidr {
    type Err = CidrError;

    /// Parse `a.b.c.d/p`, `a.b.c.d/m.m.m.m` or a bare address (taken as `/32`).
    fn from_str(s: &str) -> Result<Cidr, CidrError> {
        let invalid = || CidrError::InvalidNetwork(s.to_string());
        let trimmed = s.trim();
        let (addr, mask) = match trimmed.split_once('/') {
            Some((addr, mask)) => (addr, Some(mask)),
            None => (trimmed, None),
        };
        let addr: Ipv4Addr = addr.parse().map_err(|_| invalid())?;
        let mask = match mask {
            None => MAX_LENGTH,
            Some(mask) if mask.contains('.') => {
                let netmask: Ipv4Addr = mask.parse().map_err(|_| invalid())?;
                ipnet::ipv4_mask_to_prefix(netmask).map_err(|_| invalid())?
            }
            Some(mask) => mask.parse::<u8>().map_err(|_| invalid())?,
        };
        Cidr::new(addr, mask).map_err(|_| invalid())
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::from_str(&s).map_err(de::Error::custom)
    }
}

impl From<Ipv4Net> for Cidr {
    fn from(net: Ipv4Net) -> Cidr {
        Cidr {
            addr: net.network(),
            mask: net.prefix_len(),
        }
    }
}

impl From<Cidr> for Ipv4Net {
    fn from(cidr: Cidr) -> Ipv4Net {
        Ipv4Net::new_assert(cidr.addr, cidr.mask)
    }
}

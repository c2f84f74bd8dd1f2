//! Exact CIDR decomposition of an address range.
//!
//! Walks the range from its start address, each time taking the biggest
//! block that is aligned on the current address and does not run past the
//! end of the range.

use crate::error::CidrError;
use crate::models::{lo_mask, AddressRange, Cidr, MAX_LENGTH};
use ipnet::Ipv4Net;
use std::net::Ipv4Addr;

/// Largest block considered is a `/1`; `/0` is never emitted.
pub const MIN_BLOCK_MASK: u8 = 1;

/// Convert an inclusive range given as two dotted-quad strings into CIDR blocks.
///
/// # Errors
/// * [`CidrError::InvalidAddress`] if either address does not parse
/// * [`CidrError::InvalidRange`] if `start` is above `end`
///
/// # Examples
/// ```
/// use ipv4_cidr_tools::processing::range_to_cidr;
/// let cidrs = range_to_cidr("10.0.0.0", "10.0.0.7").unwrap();
/// assert_eq!(cidrs[0].to_string(), "10.0.0.0/29");
/// ```
pub fn range_to_cidr(start: &str, end: &str) -> Result<Vec<Cidr>, CidrError> {
    let range = AddressRange::parse(start, end)?;
    Ok(range.to_cidrs())
}

impl AddressRange {
    /// The fewest CIDR blocks whose union is exactly this range, in address order.
    pub fn to_cidrs(&self) -> Vec<Cidr> {
        log::info!(
            "#Start to_cidrs() {} - {} ({} addresses)",
            self.start(),
            self.end(),
            self.len()
        );

        let end = u64::from(u32::from(self.end()));
        // Held in 64 bits so the step past 255.255.255.255 ends the loop instead of wrapping.
        let mut next_ip = u64::from(u32::from(self.start()));
        let mut cidrs = Vec::new();

        while next_ip <= end {
            let block = find_biggest_block(Ipv4Addr::from(next_ip as u32), self.end());
            log::debug!("block {block} covers {} addresses", block.size());
            next_ip = u64::from(u32::from(block.broadcast())) + 1;
            cidrs.push(block);
        }

        log::info!("# Got {} CIDR blocks", cidrs.len());
        cidrs
    }
}

/// Find the biggest block starting at `start_ip` that ends at or before `end`.
///
/// The returned mask is constrained by:
/// 1. [`MIN_BLOCK_MASK`]
/// 2. The IP alignment - `start_ip` must be the network address for the mask
/// 3. The block's broadcast address must not pass `end`
fn find_biggest_block(start_ip: Ipv4Addr, end: Ipv4Addr) -> Cidr {
    debug_assert!(start_ip <= end, "start_ip[{start_ip}] > end[{end}]");

    let mut next_mask = lo_mask(start_ip).max(MIN_BLOCK_MASK);
    let mut block = Cidr::from(Ipv4Net::new_assert(start_ip, next_mask));

    // A /32 always fits, so this stops at MAX_LENGTH at the latest.
    while block.broadcast() > end && next_mask < MAX_LENGTH {
        next_mask += 1;
        block = Cidr::from(Ipv4Net::new_assert(start_ip, next_mask));
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn as_strings(cidrs: &[Cidr]) -> Vec<String> {
        cidrs.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_find_biggest_block() {
        let start_ip = Ipv4Addr::new(10, 0, 0, 0);
        assert_eq!(
            find_biggest_block(start_ip, Ipv4Addr::new(10, 0, 0, 255)).to_string(),
            "10.0.0.0/24"
        );
        assert_eq!(
            find_biggest_block(start_ip, Ipv4Addr::new(10, 0, 1, 254)).to_string(),
            "10.0.0.0/24"
        );

        // 10.6.2.80 has 4 trailing zeros, so nothing bigger than a /28 is aligned on it
        let start_ip = Ipv4Addr::new(10, 6, 2, 80);
        assert_eq!(
            find_biggest_block(start_ip, Ipv4Addr::new(10, 6, 8, 0)).to_string(),
            "10.6.2.80/28"
        );

        let start_ip = Ipv4Addr::new(10, 0, 0, 1);
        assert_eq!(
            find_biggest_block(start_ip, Ipv4Addr::new(10, 0, 0, 255)).to_string(),
            "10.0.0.1/32"
        );
    }

    #[test]
    fn test_find_biggest_block_never_zero_prefix() {
        let block = find_biggest_block(Ipv4Addr::UNSPECIFIED, Ipv4Addr::BROADCAST);
        assert_eq!(block.to_string(), "0.0.0.0/1");
    }

    #[test]
    fn test_whole_subnet() {
        let cidrs = range_to_cidr("192.168.1.0", "192.168.1.255").unwrap();
        assert_eq!(as_strings(&cidrs), vec!["192.168.1.0/24"]);

        let cidrs = range_to_cidr("10.0.0.0", "10.0.0.7").unwrap();
        assert_eq!(as_strings(&cidrs), vec!["10.0.0.0/29"]);
    }

    #[test]
    fn test_unaligned_pair() {
        let cidrs = range_to_cidr("192.168.1.1", "192.168.1.2").unwrap();
        assert_eq!(as_strings(&cidrs), vec!["192.168.1.1/32", "192.168.1.2/32"]);
    }

    #[test]
    fn test_single_address() {
        let cidrs = range_to_cidr("172.16.3.9", "172.16.3.9").unwrap();
        assert_eq!(as_strings(&cidrs), vec!["172.16.3.9/32"]);
    }

    #[test]
    fn test_mixed_range() {
        let cidrs = range_to_cidr("10.0.0.5", "10.0.1.10").unwrap();
        assert_eq!(
            as_strings(&cidrs),
            vec![
                "10.0.0.5/32",
                "10.0.0.6/31",
                "10.0.0.8/29",
                "10.0.0.16/28",
                "10.0.0.32/27",
                "10.0.0.64/26",
                "10.0.0.128/25",
                "10.0.1.0/29",
                "10.0.1.8/31",
                "10.0.1.10/32",
            ]
        );
    }

    #[test]
    fn test_top_of_address_space() {
        let cidrs = range_to_cidr("255.255.255.255", "255.255.255.255").unwrap();
        assert_eq!(as_strings(&cidrs), vec!["255.255.255.255/32"]);

        let cidrs = range_to_cidr("255.255.255.0", "255.255.255.255").unwrap();
        assert_eq!(as_strings(&cidrs), vec!["255.255.255.0/24"]);

        let cidrs = range_to_cidr("255.255.255.253", "255.255.255.255").unwrap();
        assert_eq!(
            as_strings(&cidrs),
            vec!["255.255.255.253/32", "255.255.255.254/31"]
        );
    }

    #[test]
    fn test_whole_address_space() {
        let cidrs = range_to_cidr("0.0.0.0", "255.255.255.255").unwrap();
        assert_eq!(as_strings(&cidrs), vec!["0.0.0.0/1", "128.0.0.0/1"]);
    }

    #[test]
    fn test_worst_case_block_count() {
        // 0.0.0.1 .. 255.255.255.254 needs one block of every size from /2 to /32 on each side
        let cidrs = range_to_cidr("0.0.0.1", "255.255.255.254").unwrap();
        assert_eq!(cidrs.len(), 62);
        assert_eq!(cidrs.first().unwrap().to_string(), "0.0.0.1/32");
        assert_eq!(cidrs.last().unwrap().to_string(), "255.255.255.254/32");
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            range_to_cidr("10.0.0.5", "10.0.0.1"),
            Err(CidrError::InvalidRange {
                start: Ipv4Addr::new(10, 0, 0, 5),
                end: Ipv4Addr::new(10, 0, 0, 1),
            })
        );
        assert_eq!(
            range_to_cidr("10.0.0.300", "10.0.0.1"),
            Err(CidrError::InvalidAddress("10.0.0.300".to_string()))
        );
        assert_eq!(
            range_to_cidr("10.0.0.1", "nope"),
            Err(CidrError::InvalidAddress("nope".to_string()))
        );
    }
}

//! Splitting a network into equal, longer-prefix subnets.

use crate::error::CidrError;
use crate::models::{Cidr, MAX_LENGTH};
use ipnet::{Ipv4Net, Ipv4Subnets};

/// Lazy, ascending sequence of the subnets of a network.
///
/// Nothing is allocated up front, so even a `/0` split into `/32`s is cheap to
/// create. Clone it to walk the sequence again from the start.
#[derive(Clone, Debug)]
pub struct Subnets {
    parent: Cidr,
    new_prefix: u8,
    inner: Ipv4Subnets,
}

impl Subnets {
    /// The network being split, normalised to its base address.
    pub fn parent(&self) -> Cidr {
        self.parent
    }

    pub fn new_prefix(&self) -> u8 {
        self.new_prefix
    }

    /// Total number of subnets, 2^(new_prefix - parent prefix).
    pub fn total(&self) -> u64 {
        1u64 << (self.new_prefix - self.parent.prefix_len())
    }
}

impl Iterator for Subnets {
    type Item = Cidr;

    fn next(&mut self) -> Option<Cidr> {
        self.inner.next().map(Cidr::from)
    }
}

/// Split `network` into all subnets of length `new_prefix`.
///
/// `network` is parsed non-strictly: host bits are masked off, so
/// `192.168.1.77/23` is treated as `192.168.0.0/23`.
///
/// # Errors
/// * [`CidrError::InvalidNetwork`] if `network` does not parse
/// * [`CidrError::InvalidPrefix`] if `new_prefix` is not an integer, is not
///   longer than the network's prefix, or is longer than 32
///
/// # Examples
/// ```
/// use ipv4_cidr_tools::processing::split_subnet;
/// let subnets: Vec<String> = split_subnet("192.168.0.0/23", "24")
///     .unwrap()
///     .map(|s| s.to_string())
///     .collect();
/// assert_eq!(subnets, vec!["192.168.0.0/24", "192.168.1.0/24"]);
/// ```
pub fn split_subnet(network: &str, new_prefix: &str) -> Result<Subnets, CidrError> {
    let parent: Cidr = network.parse()?;
    let current = parent.prefix_len();
    let invalid_prefix = || CidrError::InvalidPrefix {
        prefix: new_prefix.to_string(),
        current,
    };

    let prefix: i64 = new_prefix.trim().parse().map_err(|_| invalid_prefix())?;
    if prefix <= i64::from(current) || prefix > i64::from(MAX_LENGTH) {
        return Err(invalid_prefix());
    }
    let prefix = prefix as u8;

    let inner = Ipv4Net::from(parent)
        .subnets(prefix)
        .map_err(|_| invalid_prefix())?;
    log::info!(
        "#Start split_subnet() {parent} into {} x /{prefix}",
        1u64 << (prefix - current)
    );

    Ok(Subnets {
        parent,
        new_prefix: prefix,
        inner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn split(network: &str, new_prefix: &str) -> Vec<String> {
        split_subnet(network, new_prefix)
            .unwrap()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_split_in_two() {
        assert_eq!(
            split("192.168.0.0/23", "24"),
            vec!["192.168.0.0/24", "192.168.1.0/24"]
        );
    }

    #[test]
    fn test_split_non_strict_network() {
        assert_eq!(
            split("192.168.1.77/23", "25"),
            vec![
                "192.168.0.0/25",
                "192.168.0.128/25",
                "192.168.1.0/25",
                "192.168.1.128/25",
            ]
        );
    }

    #[test]
    fn test_split_to_hosts() {
        assert_eq!(
            split("10.0.0.0/30", "32"),
            vec!["10.0.0.0/32", "10.0.0.1/32", "10.0.0.2/32", "10.0.0.3/32"]
        );
    }

    #[test]
    fn test_split_top_of_address_space() {
        assert_eq!(
            split("255.255.255.0/24", "26"),
            vec![
                "255.255.255.0/26",
                "255.255.255.64/26",
                "255.255.255.128/26",
                "255.255.255.192/26",
            ]
        );
    }

    #[test]
    fn test_prefix_whitespace_accepted() {
        assert_eq!(split("10.0.0.0/8", " 9 "), vec!["10.0.0.0/9", "10.128.0.0/9"]);
    }

    #[test]
    fn test_total_and_laziness() {
        let subnets = split_subnet("0.0.0.0/0", "32").unwrap();
        assert_eq!(subnets.total(), 1 << 32);
        assert_eq!(subnets.parent().to_string(), "0.0.0.0/0");
        assert_eq!(subnets.new_prefix(), 32);

        let first: Vec<String> = subnets.clone().take(2).map(|s| s.to_string()).collect();
        assert_eq!(first, vec!["0.0.0.0/32", "0.0.0.1/32"]);

        // a clone restarts from the beginning
        let again = subnets.clone().next().unwrap();
        assert_eq!(again.to_string(), "0.0.0.0/32");
    }

    #[test]
    fn test_prefix_not_longer() {
        assert_eq!(
            split_subnet("10.0.0.0/30", "30").unwrap_err(),
            CidrError::InvalidPrefix {
                prefix: "30".to_string(),
                current: 30,
            }
        );
        assert_eq!(
            split_subnet("10.0.0.0/24", "16").unwrap_err(),
            CidrError::InvalidPrefix {
                prefix: "16".to_string(),
                current: 24,
            }
        );
    }

    #[test]
    fn test_prefix_invalid() {
        for bad in ["33", "-1", "x", "", "24.5"] {
            assert_eq!(
                split_subnet("10.0.0.0/8", bad).unwrap_err(),
                CidrError::InvalidPrefix {
                    prefix: bad.to_string(),
                    current: 8,
                },
                "prefix {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_network_invalid() {
        assert_eq!(
            split_subnet("10.0.0/8", "16").unwrap_err(),
            CidrError::InvalidNetwork("10.0.0/8".to_string())
        );
        // network is checked before the prefix
        assert_eq!(
            split_subnet("bogus", "x").unwrap_err(),
            CidrError::InvalidNetwork("bogus".to_string())
        );
    }
}

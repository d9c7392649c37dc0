//! Subnet arithmetic.
//!
//! Everything here works on the u32 form of addresses. Inputs are validated
//! before they reach [`subnet_info`], so the arithmetic has no error paths.

use crate::error::{Result, SubnetError};
use crate::models::{parse_address, MaskSpec, SubnetInfo, SubnetMask, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Network ID: the address with all host bits cleared.
pub fn network_id(addr: u32, mask: u32) -> u32 {
    addr & mask
}

/// Broadcast address: the network ID with all host bits set.
pub fn broadcast_addr(network_id: u32, mask: u32) -> u32 {
    network_id | !mask
}

/// First and last assignable address plus the number of assignable hosts.
///
/// A /32 is a single host and a /31 is a point-to-point pair, so neither
/// reserves a network or broadcast address.
pub fn usable_range(network_id: u32, broadcast: u32, prefix_len: u8) -> (u32, u32, u64) {
    debug_assert!(prefix_len <= MAX_LENGTH);
    match prefix_len {
        32 => (network_id, network_id, 1),
        31 => (network_id, broadcast, 2),
        // /30 and wider: network + 1 and broadcast - 1 cannot wrap
        _ => (
            network_id + 1,
            broadcast - 1,
            (1u64 << (MAX_LENGTH - prefix_len)) - 2,
        ),
    }
}

/// Derive every subnet fact for an already parsed address and mask.
pub fn subnet_info(addr: Ipv4Addr, mask: SubnetMask) -> SubnetInfo {
    let network = network_id(u32::from(addr), mask.bits());
    let broadcast = broadcast_addr(network, mask.bits());
    let (first, last, usable_hosts) = usable_range(network, broadcast, mask.prefix_len());

    SubnetInfo {
        address: addr,
        network_id: Ipv4Addr::from(network),
        broadcast: Ipv4Addr::from(broadcast),
        first_usable: Ipv4Addr::from(first),
        last_usable: Ipv4Addr::from(last),
        usable_hosts,
        total_addresses: 1u64 << (MAX_LENGTH - mask.prefix_len()),
        prefix_len: mask.prefix_len(),
        mask: mask.as_addr(),
        wildcard: Ipv4Addr::from(mask.wildcard()),
    }
}

/// Calculate subnet facts for an address and exactly one mask syntax.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::calculate;
/// let info = calculate("10.0.0.5", None, Some(24)).unwrap();
/// assert_eq!(info.broadcast.to_string(), "10.0.0.255");
/// assert_eq!(info.usable_hosts, 254);
/// ```
pub fn calculate(
    address_text: &str,
    mask_text: Option<&str>,
    prefix_len: Option<i64>,
) -> Result<SubnetInfo> {
    let spec = match (mask_text, prefix_len) {
        (Some(text), None) => MaskSpec::Dotted(text.to_string()),
        (None, Some(n)) => MaskSpec::Prefix(n),
        (Some(text), Some(n)) => {
            return Err(SubnetError::InvalidFormat(format!(
                "{address_text} {text} /{n}"
            )))
        }
        (None, None) => return Err(SubnetError::InvalidFormat(address_text.to_string())),
    };
    calculate_spec(address_text, &spec)
}

/// Same as [`calculate`] with the mask syntax already chosen.
pub fn calculate_spec(address_text: &str, spec: &MaskSpec) -> Result<SubnetInfo> {
    let addr = parse_address(address_text)?;
    let mask = SubnetMask::resolve(spec)?;
    Ok(subnet_info(addr, mask))
}

//! Result of a subnet calculation.

use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything derived from one address and mask.
///
/// Built fresh for every calculation and never partially populated.
/// Addresses serialize as dotted strings.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubnetInfo {
    /// The address the calculation was made for.
    pub address: Ipv4Addr,
    /// Address with every host bit cleared.
    pub network_id: Ipv4Addr,
    /// Address with every host bit set.
    pub broadcast: Ipv4Addr,
    pub first_usable: Ipv4Addr,
    pub last_usable: Ipv4Addr,
    /// Assignable hosts. A /0 needs more than 32 bits minus two.
    pub usable_hosts: u64,
    /// All addresses in the subnet, network and broadcast included.
    pub total_addresses: u64,
    pub prefix_len: u8,
    pub mask: Ipv4Addr,
    pub wildcard: Ipv4Addr,
}

impl SubnetInfo {
    /// Check if an address lies between the network ID and broadcast.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.network_id && ip <= self.broadcast
    }
}

impl std::fmt::Display for SubnetInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.network_id, self.prefix_len)
    }
}

//! Domain models for IPv4 subnet calculation.
//!
//! - [`ipv4`] - dotted address <-> u32 codec
//! - [`SubnetMask`] - canonical mask from a prefix length or dotted mask
//! - [`SubnetInfo`] - the derived facts returned to callers

mod ipv4;
mod mask;
mod subnet_info;

// Re-export public types
pub use ipv4::{format_address, from_octets, parse_address, to_octets, MAX_LENGTH};
pub use mask::{get_cidr_mask, MaskSpec, SubnetMask};
pub use subnet_info::SubnetInfo;

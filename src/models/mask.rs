//! Subnet mask resolution.
//!
//! A mask can be given as a CIDR prefix length or as a dotted mask. Both
//! resolve to the same [`SubnetMask`], so nothing downstream needs to know
//! which syntax was used.

use super::ipv4::{format_address, parse_address, MAX_LENGTH};
use crate::error::{Result, SubnetError};
use crate::processing::validate_prefix_len;
use std::net::Ipv4Addr;

/// The two ways a caller can describe a mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskSpec {
    /// Dotted mask text, e.g. `255.255.255.192`.
    Dotted(String),
    /// CIDR prefix length, e.g. `26`. Not yet range checked.
    Prefix(i64),
}

/// Convert a validated prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> u32 {
    debug_assert!(len <= MAX_LENGTH);
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;
    // Shifting in u64 keeps /0 (a 32-bit shift) well defined.
    ((all_bits >> right_len) << right_len) as u32
}

/// Canonical subnet mask: a run of 1-bits from the top followed by 0-bits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubnetMask {
    bits: u32,
    prefix_len: u8,
}

impl SubnetMask {
    /// Build a mask from a CIDR prefix length.
    pub fn from_prefix_len(n: i64) -> Result<SubnetMask> {
        let prefix_len = validate_prefix_len(n)?;
        Ok(SubnetMask {
            bits: get_cidr_mask(prefix_len),
            prefix_len,
        })
    }

    /// Build a mask from dotted text, rejecting non-contiguous bit patterns.
    pub fn from_dotted(text: &str) -> Result<SubnetMask> {
        let bits = u32::from(parse_address(text)?);
        let prefix_len = bits.count_ones() as u8;
        if bits != get_cidr_mask(prefix_len) {
            return Err(SubnetError::NonContiguousMask(text.to_string()));
        }
        Ok(SubnetMask { bits, prefix_len })
    }

    pub fn resolve(spec: &MaskSpec) -> Result<SubnetMask> {
        match spec {
            MaskSpec::Dotted(text) => SubnetMask::from_dotted(text),
            MaskSpec::Prefix(n) => SubnetMask::from_prefix_len(*n),
        }
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Host bits, i.e. the inverted mask.
    pub fn wildcard(&self) -> u32 {
        !self.bits
    }

    pub fn as_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.bits)
    }
}

impl std::fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", format_address(self.bits))
    }
}

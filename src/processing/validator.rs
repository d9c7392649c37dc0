//! Input guards run before any arithmetic.

use crate::error::{Result, SubnetError};
use crate::models::MAX_LENGTH;
use itertools::Itertools;

/// Check for exactly four values, each in `0..=255`.
pub fn validate_octets(octets: &[u32]) -> Result<()> {
    if octets.len() != 4 || octets.iter().any(|&o| o > 255) {
        return Err(SubnetError::InvalidFormat(octets.iter().join(".")));
    }
    Ok(())
}

/// Check a CIDR prefix length is in `0..=32` and narrow it to `u8`.
pub fn validate_prefix_len(n: i64) -> Result<u8> {
    if !(0..=MAX_LENGTH as i64).contains(&n) {
        return Err(SubnetError::OutOfRange(n.to_string()));
    }
    Ok(n as u8)
}

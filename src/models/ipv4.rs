//! IPv4 address codec.
//!
//! Converts between the dotted four-octet text form, the octet array and the
//! 32-bit integer form all subnet arithmetic is done in.

use crate::error::{Result, SubnetError};
use crate::processing::validate_octets;
use itertools::Itertools;
use std::net::Ipv4Addr;

/// Number of bits in an IPv4 address.
pub const MAX_LENGTH: u8 = 32;

/// Parse a dotted-decimal address such as `192.168.1.70`.
///
/// Each of the four tokens must be a plain decimal literal: no sign, no
/// whitespace, no empty token. Octets above 255 are rejected as
/// [`SubnetError::InvalidFormat`].
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::parse_address;
/// assert_eq!(u32::from(parse_address("10.0.0.5").unwrap()), 0x0A000005);
/// assert!(parse_address("256.1.1.1").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Ipv4Addr> {
    let tokens: Vec<&str> = text.split('.').collect();
    if tokens.len() != 4 {
        return Err(SubnetError::InvalidFormat(text.to_string()));
    }

    let mut octets = Vec::with_capacity(4);
    for token in tokens {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SubnetError::InvalidFormat(text.to_string()));
        }
        // A digit run too long for u32 is certainly not an octet.
        let value: u32 = token
            .parse()
            .map_err(|_| SubnetError::InvalidFormat(text.to_string()))?;
        octets.push(value);
    }
    validate_octets(&octets).map_err(|_| SubnetError::InvalidFormat(text.to_string()))?;

    Ok(Ipv4Addr::new(
        octets[0] as u8,
        octets[1] as u8,
        octets[2] as u8,
        octets[3] as u8,
    ))
}

/// Split a 32-bit address into its four octets, most significant first.
pub fn to_octets(addr: u32) -> [u8; 4] {
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = ((addr >> (24 - 8 * i)) & 0xFF) as u8;
    }
    octets
}

/// Join four octets into the 32-bit address form.
pub fn from_octets(o0: u8, o1: u8, o2: u8, o3: u8) -> u32 {
    (o0 as u32) << 24 | (o1 as u32) << 16 | (o2 as u32) << 8 | o3 as u32
}

/// Render a 32-bit address as dotted decimal.
pub fn format_address(addr: u32) -> String {
    to_octets(addr).iter().join(".")
}

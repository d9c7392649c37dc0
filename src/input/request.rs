//! Turning raw front-end input into a calculation request.
//!
//! Both front ends receive either a combined `address/prefix` token or an
//! address with a separate dotted mask. This is where the two are told apart.

use crate::error::{Result, SubnetError};
use crate::models::{MaskSpec, SubnetInfo};
use crate::processing::calculate_spec;
use regex::Regex;
use std::sync::OnceLock;

/// Regex for `address/prefix`. The address part is checked later by the codec.
static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| Regex::new(r"^([^/]*)/(-?[0-9]+)$").expect("Invalid Regex"))
}

/// A parsed request, ready for the calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcRequest {
    pub address: String,
    pub spec: MaskSpec,
}

impl CalcRequest {
    pub fn calculate(&self) -> Result<SubnetInfo> {
        calculate_spec(&self.address, &self.spec)
    }
}

/// Split `address/prefix` into its parts.
///
/// Returns `Ok(None)` when the token has no `/` at all.
pub fn split_cidr(token: &str) -> Result<Option<(&str, i64)>> {
    if !token.contains('/') {
        return Ok(None);
    }
    let caps = get_cidr_regex()
        .captures(token)
        .ok_or_else(|| SubnetError::InvalidFormat(token.to_string()))?;

    let address = caps.get(1).map_or("", |m| m.as_str());
    let prefix_text = caps.get(2).map_or("", |m| m.as_str());
    // Too many digits for i64 is still a number, just not a valid prefix.
    let prefix: i64 = prefix_text
        .parse()
        .map_err(|_| SubnetError::OutOfRange(prefix_text.to_string()))?;
    log::trace!("split_cidr({token}) -> ({address}, {prefix})");
    Ok(Some((address, prefix)))
}

/// Build a [`CalcRequest`] from the address token and an optional mask.
///
/// Exactly one mask syntax must be present: either a `/prefix` suffix on the
/// address or a separate dotted mask.
pub fn parse_request(address_text: &str, mask_text: Option<&str>) -> Result<CalcRequest> {
    let token = address_text.trim();
    let mask_text = mask_text.map(str::trim).filter(|m| !m.is_empty());

    let request = match (split_cidr(token)?, mask_text) {
        (Some((address, prefix)), None) => CalcRequest {
            address: address.to_string(),
            spec: MaskSpec::Prefix(prefix),
        },
        (Some(_), Some(mask)) => {
            log::warn!("Both a /prefix and a mask given: {token} {mask}");
            return Err(SubnetError::InvalidFormat(format!("{token} {mask}")));
        }
        (None, Some(mask)) => CalcRequest {
            address: token.to_string(),
            spec: MaskSpec::Dotted(mask.to_string()),
        },
        (None, None) => {
            log::warn!("No mask given for {token}");
            return Err(SubnetError::InvalidFormat(token.to_string()));
        }
    };
    log::debug!("parse_request -> {:?}", request);
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_split_cidr() {
        assert_eq!(split_cidr("10.0.0.5/24").unwrap(), Some(("10.0.0.5", 24)));
        assert_eq!(split_cidr("10.0.0.5/-1").unwrap(), Some(("10.0.0.5", -1)));
        assert_eq!(split_cidr("10.0.0.5").unwrap(), None);
        assert_eq!(
            split_cidr("10.0.0.5/99999999999999999999").unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
        for bad in ["10.0.0.5/", "10.0.0.5/24/8", "10.0.0.5/x", "10.0.0.5/ 24"] {
            assert_eq!(
                split_cidr(bad),
                Err(SubnetError::InvalidFormat(bad.to_string())),
                "expected InvalidFormat for {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_request_cidr() {
        let request = parse_request(" 192.168.1.70/26\n", None).unwrap();
        assert_eq!(request.address, "192.168.1.70");
        assert_eq!(request.spec, MaskSpec::Prefix(26));
        // empty mask from an interactive prompt counts as absent
        assert_eq!(parse_request("192.168.1.70/26", Some("  ")).unwrap(), request);
    }

    #[test]
    fn test_parse_request_mask() {
        let request = parse_request("192.168.1.70", Some("255.255.255.192\n")).unwrap();
        assert_eq!(request.address, "192.168.1.70");
        assert_eq!(request.spec, MaskSpec::Dotted("255.255.255.192".to_string()));

        let info = request.calculate().unwrap();
        assert_eq!(info.to_string(), "192.168.1.64/26");
        assert_eq!(info.usable_hosts, 62);
    }

    #[test]
    fn test_parse_request_errors() {
        assert_eq!(
            parse_request("192.168.1.70", None).unwrap_err().kind(),
            ErrorKind::InvalidFormat
        );
        assert_eq!(
            parse_request("192.168.1.70/26", Some("255.255.255.192"))
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidFormat
        );
        assert_eq!(
            parse_request("192.168.1.70/33", None)
                .unwrap()
                .calculate()
                .unwrap_err()
                .kind(),
            ErrorKind::OutOfRange
        );
    }
}

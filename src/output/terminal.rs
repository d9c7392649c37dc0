//! Terminal output utilities.
//!
//! Plain text rendering of a calculation and of errors. Colors are added by
//! the caller when printing so the rendered strings stay testable.

use crate::error::SubnetError;
use crate::models::SubnetInfo;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Render a calculation in the console layout, one fact per line.
pub fn render_text(info: &SubnetInfo) -> String {
    let prefix = info.prefix_len;
    [
        format!("Network_ID = {} /{prefix}", info.network_id),
        format!("Broadcast_Address = {} /{prefix}", info.broadcast),
        format!("Subnet_Mask = {}", info.mask),
        format!("Wildcard = {}", info.wildcard),
        format!("IP Range = {} ~ {}", info.first_usable, info.last_usable),
        format!("Usable Hosts = {}", info.usable_hosts),
    ]
    .join("\n")
}

/// One line describing what was wrong with the input.
pub fn error_message(err: &SubnetError) -> String {
    match err {
        SubnetError::InvalidFormat(input) => {
            format!("Invalid IP address or subnet mask format: '{input}'")
        }
        SubnetError::OutOfRange(input) => {
            format!("CIDR prefix length must be between 0 and 32: '{input}'")
        }
        SubnetError::NonContiguousMask(input) => {
            format!("Subnet mask must be a contiguous run of 1 bits: '{input}'")
        }
    }
}

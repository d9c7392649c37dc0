//! Subnet calculation logic.
//!
//! - [`validator`] - range and format guards on raw input
//! - [`calculator`] - network, broadcast and host range arithmetic

mod calculator;
mod validator;

// Re-export public functions
pub use calculator::{
    broadcast_addr, calculate, calculate_spec, network_id, subnet_info, usable_range,
};
pub use validator::{validate_octets, validate_prefix_len};

//! IPv4 subnet calculator.
//!
//! Given an address and either a dotted subnet mask or a CIDR prefix length,
//! derives the network ID, broadcast address, usable host range and host count.
//! The arithmetic in [`models`] and [`processing`] is pure and does no I/O;
//! [`input`] and [`output`] are the shared pieces of the front ends.

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{ErrorKind, Result, SubnetError};
pub use input::{parse_request, CalcRequest};
pub use models::{MaskSpec, SubnetInfo, SubnetMask};
pub use processing::{calculate, calculate_spec};

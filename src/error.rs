//! Error types for subnet calculations.
//!
//! Every failure is one of three kinds. The offending input is carried along so
//! the shell can show it, but callers should match on [`SubnetError::kind`].

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SubnetError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    /// Address or mask is not four valid decimal octets.
    #[error("Expected four dotted octets 0-255 (e.g. 192.168.1.70), but got '{0}'")]
    InvalidFormat(String),
    /// Prefix length (or other bounded number) outside its allowed range.
    #[error("Prefix length must be between 0 and 32, but got '{0}'")]
    OutOfRange(String),
    /// Dotted mask whose 1-bits are not one contiguous run from the top bit.
    #[error("Subnet mask '{0}' is not a contiguous prefix mask")]
    NonContiguousMask(String),
}

/// Fieldless discriminant of [`SubnetError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidFormat,
    OutOfRange,
    NonContiguousMask,
}

impl SubnetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SubnetError::InvalidFormat(_) => ErrorKind::InvalidFormat,
            SubnetError::OutOfRange(_) => ErrorKind::OutOfRange,
            SubnetError::NonContiguousMask(_) => ErrorKind::NonContiguousMask,
        }
    }

    /// Process exit code the CLI uses for this error.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::InvalidFormat => 2,
            ErrorKind::OutOfRange => 3,
            ErrorKind::NonContiguousMask => 4,
        }
    }
}

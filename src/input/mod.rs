//! Front-end input handling.
//!
//! - [`request`] - parse raw address/mask text into a [`CalcRequest`]
//! - [`prompt`] - interactive console prompts

mod prompt;
mod request;

pub use prompt::prompt_request;
pub use request::{parse_request, split_cidr, CalcRequest};

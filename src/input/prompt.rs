//! Interactive console prompts.

use super::request::{parse_request, split_cidr, CalcRequest};
use crate::error::SubnetError;
use std::error::Error;
use std::io::{BufRead, Write};

fn read_answer<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
) -> Result<String, Box<dyn Error>> {
    write!(writer, "{question}")?;
    writer.flush()?;
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Ask for an address, and for a subnet mask only when no `/prefix` was typed.
///
/// I/O failures come back as the outer error; bad input comes back as a
/// [`SubnetError`] in the inner result so the caller can map it to an exit code.
pub fn prompt_request<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<Result<CalcRequest, SubnetError>, Box<dyn Error>> {
    let address = read_answer(reader, writer, "IP Address = ")?;
    let needs_mask = match split_cidr(&address) {
        Ok(parts) => parts.is_none(),
        Err(e) => return Ok(Err(e)),
    };

    let mask = if needs_mask {
        Some(read_answer(reader, writer, "Subnet Mask = ")?)
    } else {
        None
    };
    log::debug!("prompt_request address={address:?} mask={mask:?}");
    Ok(parse_request(&address, mask.as_deref()))
}

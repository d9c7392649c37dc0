//! JSON output.

use crate::models::SubnetInfo;
use std::error::Error;

pub fn render_json(info: &SubnetInfo) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(info).map_err(|e| format!("Error serializing JSON: {e}").into())
}

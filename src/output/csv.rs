//! CSV output formatting for subnet calculations.

use super::terminal::format_field;
use crate::models::SubnetInfo;

/// Column header matching [`render_csv`] rows.
pub const CSV_HEADER: &str = r#""address","subnet_cidr","mask","broadcast","first_usable","last_usable","usable_hosts""#;

/// Render one calculation as a CSV row, optionally preceded by the header.
pub fn render_csv(info: &SubnetInfo, header: bool) -> String {
    let row = [
        format_field(info.address, 17),
        format_field(info, 20),
        format_field(info.mask, 17),
        format_field(info.broadcast, 17),
        format_field(info.first_usable, 17),
        format_field(info.last_usable, 17),
        format_field(info.usable_hosts, 12),
    ]
    .join(",");
    log::debug!("render_csv header={header} row={row}");

    if header {
        format!("{CSV_HEADER}\n{row}")
    } else {
        row
    }
}

//! Output formatting utilities.

use serde::Serialize;
use zkoracle_canonical::FieldElement;

/// Formats a value as pretty JSON.
pub fn format_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Formats one encoded element as a table row.
pub fn format_element_row(index: usize, element: &FieldElement) -> String {
    format!("{:>5}  {}", index, zkoracle_canonical::field::to_hex(element))
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!("{:>5}  {}", "INDEX", "ELEMENT");
    println!("{}", "-".repeat(73));
}

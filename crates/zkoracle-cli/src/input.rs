//! Input helpers shared by commands.

use std::io::{self, Read};

use zkoracle_schemas::RawRecord;

/// Reads a file, or stdin when no path is given.
pub fn read_input(input: Option<&str>) -> Result<String, Box<dyn std::error::Error>> {
    match input {
        Some(path) => Ok(std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Builds a record from `--id/--text`, or parses one from a JSON file or stdin.
pub fn resolve_record(
    input: Option<String>,
    id: Option<String>,
    text: Option<String>,
) -> Result<RawRecord, Box<dyn std::error::Error>> {
    match (id, text) {
        (Some(id), Some(text)) => Ok(RawRecord::new(id, text)),
        (None, None) => {
            let json_str = read_input(input.as_deref())?;
            let record = serde_json::from_str(&json_str)
                .map_err(|e| format!("Invalid record JSON: {}", e))?;
            Ok(record)
        }
        _ => Err("--id and --text must be given together".into()),
    }
}

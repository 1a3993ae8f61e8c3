//! Verify command implementation.

use serde_json::json;
use zkoracle_core::{compute_attestation_id, verify_attestation};
use zkoracle_schemas::Attestation;

use crate::input::read_input;

pub fn run(
    input: Option<String>,
    strict: bool,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_str = read_input(input.as_deref())?;
    let attestation: Attestation = serde_json::from_str(&json_str)
        .map_err(|e| format!("Invalid attestation JSON: {}", e))?;

    let valid = verify_attestation(&attestation)
        .map_err(|e| format!("Malformed attestation: {}", e))?;
    let attestation_id = compute_attestation_id(&attestation)?;

    if json_output {
        let value = json!({
            "attestation_id": attestation_id,
            "public_key": attestation.public_key,
            "encoding": attestation.encoding,
            "valid": valid,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("attestation: {}", attestation_id);
        println!("public key:  {}", attestation.public_key);
        println!("encoding:    {}", attestation.encoding);
        println!("verdict:     {}", if valid { "Ok" } else { "Invalid" });
    }

    if strict && !valid {
        std::process::exit(1);
    }
    Ok(())
}

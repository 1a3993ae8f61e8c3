//! Pubkey command implementation.

use serde_json::json;

use super::install_signer;

pub fn run(require_key: bool, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let signer = install_signer(require_key)?;

    if json_output {
        let value = json!({
            "public_key": signer.public_key_base58(),
            "insecure_default": signer.is_insecure_default(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", signer.public_key_base58());
    }
    Ok(())
}

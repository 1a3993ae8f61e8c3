//! Keygen command implementation.

use serde_json::json;
use zkoracle_core::config::PRIVATE_KEY_ENV;
use zkoracle_core::Keypair;

pub fn run(json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let keypair = Keypair::generate(rand::rngs::OsRng);
    let secret = keypair.secret_to_base58();
    let public = keypair.public_key().to_base58();

    if json_output {
        let value = json!({
            "private_key": secret.as_str(),
            "public_key": public,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}={}", PRIVATE_KEY_ENV, secret.as_str());
        println!("public key: {}", public);
    }
    Ok(())
}

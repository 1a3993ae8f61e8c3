//! zkoracle CLI - produce and check signed attestations over external records.

use clap::{Parser, Subcommand};
use zkoracle_canonical::EncodingScheme;

mod commands;
mod input;
mod output;
mod source;

use commands::{attest, encode, keygen, pubkey, verify};

#[derive(Parser)]
#[command(name = "zkoracle")]
#[command(about = "Field-element encoding and signed attestations for zkoracle")]
struct Cli {
    /// Refuse to start without ORACLE_PRIVATE_KEY (also ORACLE_REQUIRE_KEY=1)
    #[arg(long, global = true)]
    require_key: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fresh random secret key
    Keygen {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the public key of the configured signing key
    Pubkey {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the field-element encoding of a record
    Encode {
        /// Record JSON file (or stdin if neither this nor --id/--text is given)
        input: Option<String>,
        /// Record id
        #[arg(long, requires = "text")]
        id: Option<String>,
        /// Record text
        #[arg(long, requires = "id")]
        text: Option<String>,
        /// Encoding scheme (packed-v1, fixed128-v1)
        #[arg(long, default_value = "packed-v1")]
        encoding: EncodingScheme,
        /// Reject strings longer than N characters
        #[arg(long)]
        max_chars: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Attest a record and print the attestation JSON
    Attest {
        /// Record JSON file (or stdin if no other record input is given)
        input: Option<String>,
        /// Record id (looked up in --source when given)
        #[arg(long)]
        id: Option<String>,
        /// Record text
        #[arg(long, conflicts_with = "source")]
        text: Option<String>,
        /// JSON file mapping record ids to texts
        #[arg(long, requires = "id", conflicts_with = "input")]
        source: Option<String>,
        /// Encoding scheme (packed-v1, fixed128-v1)
        #[arg(long, default_value = "packed-v1")]
        encoding: EncodingScheme,
        /// Reject strings longer than N characters
        #[arg(long)]
        max_chars: Option<usize>,
    },
    /// Verify an attestation JSON
    Verify {
        /// Attestation JSON file (or stdin if not provided)
        input: Option<String>,
        /// Exit with error code if the signature does not verify
        #[arg(long)]
        strict: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let require_key = cli.require_key;

    let result = match cli.command {
        Commands::Keygen { json } => keygen::run(json),
        Commands::Pubkey { json } => pubkey::run(require_key, json),
        Commands::Encode {
            input,
            id,
            text,
            encoding,
            max_chars,
            json,
        } => encode::run(input, id, text, encoding, max_chars, json),
        Commands::Attest {
            input,
            id,
            text,
            source,
            encoding,
            max_chars,
        } => attest::run(
            attest::RecordInput {
                input,
                id,
                text,
                source,
            },
            encoding,
            max_chars,
            require_key,
        ),
        Commands::Verify {
            input,
            strict,
            json,
        } => verify::run(input, strict, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

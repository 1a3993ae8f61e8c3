//! Signing key configuration.

use std::fmt;

use tracing::warn;
use zeroize::Zeroizing;

use crate::errors::KeyError;
use crate::keys::{Keypair, INSECURE_DEFAULT_SECRET_KEY};

/// Environment variable holding the base58check secret key.
pub const PRIVATE_KEY_ENV: &str = "ORACLE_PRIVATE_KEY";
/// Environment variable that forbids falling back to the default key.
pub const REQUIRE_KEY_ENV: &str = "ORACLE_REQUIRE_KEY";

/// Where the loaded key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// An explicitly configured key.
    Configured,
    /// [`INSECURE_DEFAULT_SECRET_KEY`]; output must not be trusted.
    InsecureDefault,
}

/// Inputs for loading the process signing key.
#[derive(Clone, Default)]
pub struct KeyConfig {
    private_key: Option<Zeroizing<String>>,
    require_key: bool,
}

impl KeyConfig {
    /// Reads [`PRIVATE_KEY_ENV`] and [`REQUIRE_KEY_ENV`].
    pub fn from_env() -> Self {
        let private_key = std::env::var_os(PRIVATE_KEY_ENV)
            .map(|value| Zeroizing::new(value.to_string_lossy().into_owned()));
        let require_key = std::env::var(REQUIRE_KEY_ENV)
            .map(|value| parse_flag(&value))
            .unwrap_or(false);
        Self {
            private_key,
            require_key,
        }
    }

    /// Uses an explicit base58check secret key.
    pub fn with_private_key(key: impl Into<String>) -> Self {
        Self {
            private_key: Some(Zeroizing::new(key.into())),
            require_key: false,
        }
    }

    /// Makes a missing key fatal instead of falling back to the default.
    pub fn require_key(mut self, require: bool) -> Self {
        self.require_key = self.require_key || require;
        self
    }

    /// Loads the keypair.
    ///
    /// A configured value that is empty or malformed is always an error. An
    /// absent value falls back to the insecure default unless a key is
    /// required.
    pub fn load(&self) -> Result<(Keypair, KeySource), KeyError> {
        match &self.private_key {
            Some(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(KeyError::Encoding("value is empty".into()));
                }
                Ok((Keypair::from_base58(text)?, KeySource::Configured))
            }
            None if self.require_key => Err(KeyError::Missing),
            None => {
                warn!(
                    env = PRIVATE_KEY_ENV,
                    "no private key configured, using the public insecure default key; \
                     attestations from this process are forgeable"
                );
                Ok((
                    Keypair::from_base58(INSECURE_DEFAULT_SECRET_KEY)?,
                    KeySource::InsecureDefault,
                ))
            }
        }
    }
}

impl fmt::Debug for KeyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyConfig")
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("require_key", &self.require_key)
            .finish()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_parsing() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" TRUE "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn absent_key_falls_back_unless_required() {
        let (_, source) = KeyConfig::default().load().unwrap();
        assert_eq!(source, KeySource::InsecureDefault);
        assert_eq!(
            KeyConfig::default().require_key(true).load().unwrap_err(),
            KeyError::Missing
        );
    }

    #[test]
    fn empty_key_is_fatal() {
        assert!(matches!(
            KeyConfig::with_private_key("  ").load(),
            Err(KeyError::Encoding(_))
        ));
    }

    #[test]
    fn debug_is_redacted() {
        let config = KeyConfig::with_private_key(INSECURE_DEFAULT_SECRET_KEY);
        assert!(!format!("{:?}", config).contains(INSECURE_DEFAULT_SECRET_KEY));
    }
}

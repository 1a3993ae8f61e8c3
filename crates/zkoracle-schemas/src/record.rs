//! Raw record type.

use serde::{Deserialize, Serialize};

/// External data to be attested, exactly as received from the data source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawRecord {
    /// Opaque identifier of the fetched item.
    pub id: String,
    /// Content of the fetched item.
    #[serde(alias = "str")]
    pub text: String,
}

impl RawRecord {
    /// Creates a record from its parts.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Fields in encoding order: `id`, then `text`.
    pub fn fields(&self) -> [&str; 2] {
        [&self.id, &self.text]
    }
}

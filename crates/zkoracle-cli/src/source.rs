//! JSON file record source.

use std::collections::BTreeMap;
use std::path::Path;

use zkoracle_core::RecordSource;
use zkoracle_schemas::RawRecord;

/// Failure to load or query a [`FileSource`].
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The source file could not be read.
    #[error("failed to read source {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The source file is not a JSON object of strings.
    #[error("invalid source {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// No record with the requested id.
    #[error("record {0} not found in source")]
    NotFound(String),
}

/// Records loaded from a JSON object mapping ids to texts.
#[derive(Debug)]
pub struct FileSource {
    records: BTreeMap<String, String>,
}

impl FileSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let display = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: display.clone(),
            source,
        })?;
        let records = serde_json::from_str(&contents).map_err(|source| SourceError::Parse {
            path: display,
            source,
        })?;
        Ok(Self { records })
    }
}

impl RecordSource for FileSource {
    type Error = SourceError;

    fn fetch(&self, id: &str) -> Result<RawRecord, SourceError> {
        self.records
            .get(id)
            .map(|text| RawRecord::new(id, text.as_str()))
            .ok_or_else(|| SourceError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn fetches_known_ids_only() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"1": "hello", "2": ""}}"#).unwrap();

        let source = FileSource::open(file.path()).unwrap();
        assert_eq!(source.fetch("1").unwrap(), RawRecord::new("1", "hello"));
        assert_eq!(source.fetch("2").unwrap().text, "");
        assert!(matches!(source.fetch("3"), Err(SourceError::NotFound(id)) if id == "3"));
    }

    #[test]
    fn rejects_non_string_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"1": 5}}"#).unwrap();
        assert!(matches!(
            FileSource::open(file.path()),
            Err(SourceError::Parse { .. })
        ));
    }
}

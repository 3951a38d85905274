//! Record persistence.
//!
//! Records live in an append-only CSV file with the canonical field order.
//! Appends preserve an existing header and start one when the file is new.
//! The in-flight `error` annotation is never persisted. The store does not
//! deduplicate; re-processing a source appends its records again.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::record::Record;

/// Append-only CSV store for harvested records.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Creates a store over the given file path. The file itself is created
    /// lazily on first append.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends records, writing the canonical header only when the file is
    /// new or empty.
    pub fn append(&self, records: &[Record]) -> Result<()> {
        let needs_header = !self.has_content()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);

        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Loads the full record set, in insertion order.
    ///
    /// Numeric fields are coerced leniently: missing or unparseable values
    /// load as 0 rather than failing the whole set.
    pub fn load(&self) -> Result<Vec<Record>> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;

        let mut records = Vec::new();
        for result in reader.deserialize() {
            let record: Record = result?;
            records.push(record);
        }

        info!(path = %self.path.display(), count = records.len(), "loaded record set");
        Ok(records)
    }

    fn has_content(&self) -> Result<bool> {
        match std::fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() > 0),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

//! Roster sources: where a raw display matrix comes from.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::debug;

use crate::Result;

/// Anything that can produce a full roster snapshot (header row first).
///
/// The server's polling endpoint falls back to its `RosterSource` whenever the
/// pushed-update cache is cold.
pub trait RosterSource: Send + Sync {
    fn load(&self) -> Result<Vec<Vec<String>>>;
}

/// A roster snapshot exported as CSV.
#[derive(Debug, Clone)]
pub struct CsvRoster {
    path: PathBuf,
}

impl CsvRoster {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterSource for CsvRoster {
    fn load(&self) -> Result<Vec<Vec<String>>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;
        let mut matrix = Vec::new();
        for record in reader.records() {
            let record = record?;
            matrix.push(
                record
                    .iter()
                    .map(|cell| cell.trim_matches('\u{feff}').to_string())
                    .collect(),
            );
        }
        debug!(path = %self.path.display(), rows = matrix.len(), "loaded roster csv");
        Ok(matrix)
    }
}

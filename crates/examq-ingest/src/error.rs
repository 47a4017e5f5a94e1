use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("roster matrix is empty (no header row)")]
    EmptyRoster,
    #[error("header mismatch at column {position}: expected {expected:?}, found {found:?}")]
    HeaderMismatch {
        position: usize,
        expected: String,
        found: String,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;

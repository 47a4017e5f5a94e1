use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("registrant id must not be empty")]
    InvalidRegistrantId(String),
    #[error("unknown attendance value: {0:?}")]
    UnknownAttendance(String),
    #[error("unknown exam status value: {0:?}")]
    UnknownExamStatus(String),
    #[error("unknown station label: {0:?}")]
    UnknownStation(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

//! Roster ingestion for the exam-day queue board.
//!
//! Raw sheets arrive as matrices of display strings (webhook payloads or CSV
//! exports). This crate narrows them by column, validates the header, and
//! maps each row to a typed [`examq_model::Registrant`] exactly once, so no
//! downstream code ever touches a column index.

pub mod error;
pub mod ingest;
pub mod project;
pub mod schema;
pub mod source;

#[cfg(test)]
mod test_matrix;

pub use error::{IngestError, Result};
pub use ingest::{ingest_matrix, parse_arrival};
pub use project::project_columns;
pub use schema::{PROJECTED_RESERVED_ON, RosterSchema, StationColumns};
pub use source::{CsvRoster, RosterSource};

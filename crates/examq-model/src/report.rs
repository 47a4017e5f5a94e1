use serde::{Deserialize, Serialize};

use crate::Registrant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// A validation issue found while mapping sheet rows to registrants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterIssue {
    /// Zero-based row index in the source matrix (header is row 0).
    pub row: usize,
    /// Column label the offending cell belongs to, if applicable.
    pub column: Option<String>,
    /// Human-readable message describing the issue.
    pub message: String,
    /// Severity level.
    pub severity: IssueSeverity,
}

/// The outcome of ingesting one roster snapshot.
///
/// Rows that fail validation are excluded from `registrants` and reported as
/// error-severity issues instead of being silently dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterReport {
    pub registrants: Vec<Registrant>,
    pub issues: Vec<RosterIssue>,
}

impl RosterReport {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

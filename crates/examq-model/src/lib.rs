//! Typed roster model for the exam-day queue board.
//!
//! The source of truth is a spreadsheet of display strings. Everything here
//! exists to leave the stringly-typed world exactly once: validated ids,
//! closed status enumerations, and a registrant record with named fields.

pub mod error;
pub mod ids;
pub mod registrant;
pub mod report;
pub mod station;
pub mod status;

pub use error::{ModelError, Result};
pub use ids::RegistrantId;
pub use registrant::{ExamRecord, Registrant};
pub use report::{IssueSeverity, RosterIssue, RosterReport};
pub use station::Station;
pub use status::{Attendance, ExamStatus};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_by_severity() {
        let report = RosterReport {
            registrants: vec![],
            issues: vec![
                RosterIssue {
                    row: 3,
                    column: Some("상태".to_string()),
                    message: "unknown attendance value".to_string(),
                    severity: IssueSeverity::Error,
                },
                RosterIssue {
                    row: 5,
                    column: None,
                    message: "row shorter than schema".to_string(),
                    severity: IssueSeverity::Warning,
                },
            ],
        };
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has_errors());
    }

    #[test]
    fn station_serializes_as_label() {
        let json = serde_json::to_string(&Station::SnsbC).expect("serialize station");
        assert_eq!(json, "\"SNSB-C\"");
    }
}

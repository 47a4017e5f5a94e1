//! Raw matrix to typed registrants.
//!
//! This is the only place cells are read by position. Rows that fail
//! validation are excluded and reported as issues; a mangled header aborts
//! the whole ingest.

use std::collections::BTreeMap;

use chrono::NaiveTime;
use tracing::debug;

use examq_model::{
    Attendance, ExamRecord, ExamStatus, IssueSeverity, Registrant, RegistrantId, RosterIssue,
    RosterReport,
};

use crate::schema::RosterSchema;
use crate::{IngestError, Result};

/// Maps a full roster matrix (header row first) to typed registrants.
pub fn ingest_matrix(schema: &RosterSchema, matrix: &[Vec<String>]) -> Result<RosterReport> {
    let Some(header) = matrix.first() else {
        return Err(IngestError::EmptyRoster);
    };
    schema.validate_header(header)?;

    let mut report = RosterReport::default();
    for (row_index, row) in matrix.iter().enumerate().skip(1) {
        match ingest_row(schema, row, row_index) {
            Ok(registrant) => {
                if registrant.arrival.is_none() && !registrant.arrival_raw.is_empty() {
                    report.issues.push(RosterIssue {
                        row: row_index,
                        column: Some("도착 시간".to_string()),
                        message: format!(
                            "unparseable arrival time {:?}; row sorts last",
                            registrant.arrival_raw
                        ),
                        severity: IssueSeverity::Warning,
                    });
                }
                report.registrants.push(registrant);
            }
            Err(issue) => report.issues.push(issue),
        }
    }
    debug!(
        rows = report.registrants.len(),
        issues = report.issues.len(),
        "ingested roster matrix"
    );
    Ok(report)
}

fn ingest_row(
    schema: &RosterSchema,
    row: &[String],
    row_index: usize,
) -> std::result::Result<Registrant, RosterIssue> {
    let id = RegistrantId::new(cell(row, schema.id)).map_err(|_| RosterIssue {
        row: row_index,
        column: Some("ID".to_string()),
        message: "registrant id is missing".to_string(),
        severity: IssueSeverity::Error,
    })?;

    let attendance: Attendance = cell(row, schema.attendance).parse().map_err(|error| RosterIssue {
        row: row_index,
        column: Some("상태".to_string()),
        message: format!("{error}"),
        severity: IssueSeverity::Error,
    })?;

    let mut exams = BTreeMap::new();
    for (station, columns) in &schema.stations {
        let status: ExamStatus = cell(row, columns.status).parse().map_err(|error| RosterIssue {
            row: row_index,
            column: Some(format!("{} 상태", station.label())),
            message: format!("{error}"),
            severity: IssueSeverity::Error,
        })?;
        exams.insert(
            *station,
            ExamRecord {
                status,
                started: cell(row, columns.started),
                ended: cell(row, columns.ended),
            },
        );
    }

    let arrival_raw = cell(row, schema.arrival);
    Ok(Registrant {
        id,
        name: cell(row, schema.name),
        reserved_on: cell(row, schema.reserved_on),
        arrival: parse_arrival(&arrival_raw),
        arrival_raw,
        attendance,
        exams,
        performer: cell(row, schema.performer),
    })
}

/// Reads a cell by raw index; short rows read as empty.
fn cell(row: &[String], index: usize) -> String {
    row.get(index)
        .map(|raw| raw.trim().trim_matches('\u{feff}').to_string())
        .unwrap_or_default()
}

/// Parses an arrival-time display cell. An unparseable cell yields `None`
/// (sorts after every parsed time); the ingest loop reports it as a warning
/// and keeps the row.
pub fn parse_arrival(raw: &str) -> Option<NaiveTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .ok()
}

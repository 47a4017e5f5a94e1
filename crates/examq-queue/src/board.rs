//! Board decoration: structured status for the waiting-room display.
//!
//! The queue core returns data, not markup. Callers decide how a
//! [`StatusDot`] is drawn; `color()` exposes the board's traditional
//! black/green/red scheme.

use serde::{Deserialize, Serialize};

use examq_model::{Registrant, Station};

/// Overall state of one registrant on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusDot {
    /// Every tracked exam is complete.
    Done,
    /// At least one exam is underway.
    Active,
    /// Nothing active yet.
    Waiting,
}

impl StatusDot {
    /// Dot color on the wall display.
    pub fn color(&self) -> &'static str {
        match self {
            StatusDot::Done => "black",
            StatusDot::Active => "green",
            StatusDot::Waiting => "red",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusDot::Done => "완료",
            StatusDot::Active => "진행중",
            StatusDot::Waiting => "대기",
        }
    }

    /// Done beats Active beats Waiting, matching the board's priority rule.
    pub fn for_registrant(registrant: &Registrant) -> Self {
        if registrant.all_complete() {
            StatusDot::Done
        } else if registrant.any_in_progress() {
            StatusDot::Active
        } else {
            StatusDot::Waiting
        }
    }
}

/// One decorated board line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRow {
    /// Trailing number of the registration id (raw id when it has none).
    pub registration_no: String,
    pub name: String,
    pub dot: StatusDot,
    pub arrival: String,
    /// Per-station status labels in [`Station::ALL`] order.
    pub stations: Vec<String>,
}

/// Decorates queue rows for display, preserving their order.
pub fn decorate(registrants: &[Registrant]) -> Vec<BoardRow> {
    registrants
        .iter()
        .map(|registrant| BoardRow {
            registration_no: registrant.id.numeric_suffix().to_string(),
            name: registrant.name.clone(),
            dot: StatusDot::for_registrant(registrant),
            arrival: registrant.arrival_raw.clone(),
            stations: Station::ALL
                .into_iter()
                .map(|station| registrant.exam(station).as_str().to_string())
                .collect(),
        })
        .collect()
}

/// Renders board rows as a display matrix, header row first.
pub fn board_matrix(rows: &[BoardRow]) -> Vec<Vec<String>> {
    let mut header = vec![
        "No".to_string(),
        "이름".to_string(),
        "상태".to_string(),
        "도착 시간".to_string(),
    ];
    header.extend(Station::ALL.into_iter().map(|s| s.label().to_string()));

    let mut matrix = vec![header];
    for row in rows {
        let mut cells = vec![
            row.registration_no.clone(),
            row.name.clone(),
            row.dot.color().to_string(),
            row.arrival.clone(),
        ];
        cells.extend(row.stations.iter().cloned());
        matrix.push(cells);
    }
    matrix
}

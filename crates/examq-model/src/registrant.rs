use std::collections::BTreeMap;

use chrono::NaiveTime;

use crate::{Attendance, ExamStatus, RegistrantId, Station};

/// Progress of one exam at one station, with the raw start/end display cells.
///
/// Start and end times are carried verbatim for the board; the queue logic
/// only interprets the status.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExamRecord {
    pub status: ExamStatus,
    pub started: String,
    pub ended: String,
}

/// One registrant row for one day, with every cell mapped to a named field.
///
/// The position-to-name mapping happens exactly once, at the ingestion
/// boundary; nothing past that point touches column indices.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Registrant {
    pub id: RegistrantId,
    pub name: String,
    /// Reservation-date cell exactly as displayed (e.g. `6월 5일` or an ISO
    /// date, depending on who filled it in).
    pub reserved_on: String,
    /// Arrival-time cell exactly as displayed.
    pub arrival_raw: String,
    /// Parsed arrival time; `None` sorts after every parsed time.
    pub arrival: Option<NaiveTime>,
    pub attendance: Attendance,
    pub exams: BTreeMap<Station, ExamRecord>,
    /// 수행자 cell (staff member handling the registrant).
    pub performer: String,
}

impl Registrant {
    pub fn exam(&self, station: Station) -> ExamStatus {
        self.exams.get(&station).map_or(ExamStatus::NotStarted, |record| record.status)
    }

    /// True when any tracked station is mid-exam for this person.
    pub fn any_in_progress(&self) -> bool {
        Station::ALL
            .into_iter()
            .any(|station| self.exam(station).is_in_progress())
    }

    /// True when every tracked station has finished.
    pub fn all_complete(&self) -> bool {
        Station::ALL
            .into_iter()
            .all(|station| self.exam(station).is_complete())
    }
}

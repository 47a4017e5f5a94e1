//! Next-up selection: who should each station call next.

use std::collections::BTreeMap;

use tracing::debug;

use examq_model::{ExamStatus, Registrant, Station};

/// Rendered when a station has no eligible candidate.
pub const NO_CANDIDATE: &str = "-";

/// The per-station recommendation produced by [`select_next_up`].
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NextUp {
    assignments: BTreeMap<Station, String>,
}

impl NextUp {
    pub fn get(&self, station: Station) -> Option<&str> {
        self.assignments.get(&station).map(String::as_str)
    }

    /// Display name for a station, with the `-` sentinel for no candidate.
    pub fn display(&self, station: Station) -> &str {
        self.get(station).unwrap_or(NO_CANDIDATE)
    }

    fn is_full(&self) -> bool {
        self.assignments.len() == Station::ALL.len()
    }
}

/// Scans arrival-ordered registrants once and picks the next person per
/// station.
///
/// A registrant mid-exam at *any* station is skipped for every station: they
/// are physically occupied and cannot be called anywhere. Otherwise each
/// still-open station whose exam the registrant has not started takes them.
/// One registrant can legitimately be next up for several stations at once;
/// each station runs an independent queue. The scan stops as soon as every
/// station is filled.
pub fn select_next_up(registrants: &[Registrant]) -> NextUp {
    let mut next_up = NextUp::default();
    for registrant in registrants {
        if next_up.is_full() {
            break;
        }
        if registrant.any_in_progress() {
            debug!(id = %registrant.id, "skipping registrant mid-exam");
            continue;
        }
        for station in Station::ALL {
            if next_up.assignments.contains_key(&station) {
                continue;
            }
            if registrant.exam(station) == ExamStatus::NotStarted {
                next_up
                    .assignments
                    .insert(station, registrant.name.clone());
            }
        }
    }
    next_up
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::NaiveTime;

    use examq_model::{Attendance, ExamRecord, RegistrantId};

    use super::*;

    fn registrant(name: &str, arrival: &str, statuses: &[(Station, ExamStatus)]) -> Registrant {
        let mut exams = BTreeMap::new();
        for (station, status) in statuses {
            exams.insert(
                *station,
                ExamRecord {
                    status: *status,
                    ..ExamRecord::default()
                },
            );
        }
        Registrant {
            id: RegistrantId::new(name).unwrap(),
            name: name.to_string(),
            reserved_on: "6월 5일".to_string(),
            arrival_raw: arrival.to_string(),
            arrival: NaiveTime::parse_from_str(arrival, "%H:%M").ok(),
            attendance: Attendance::Present,
            exams,
            performer: String::new(),
        }
    }

    #[test]
    fn empty_queue_yields_sentinels() {
        let next_up = select_next_up(&[]);
        for station in Station::ALL {
            assert_eq!(next_up.display(station), NO_CANDIDATE);
        }
    }

    #[test]
    fn earliest_eligible_registrant_wins_every_open_station() {
        let rows = vec![
            registrant("먼저", "08:30", &[]),
            registrant("나중", "09:00", &[]),
        ];
        let next_up = select_next_up(&rows);
        for station in Station::ALL {
            assert_eq!(next_up.display(station), "먼저");
        }
    }

    #[test]
    fn in_progress_anywhere_disqualifies_everywhere() {
        let rows = vec![
            registrant("바쁨", "08:30", &[(Station::Ecg, ExamStatus::InProgress)]),
            registrant("대기", "09:00", &[]),
        ];
        let next_up = select_next_up(&rows);
        // 바쁨 is mid-ECG, so even unrelated stations must not call them.
        for station in Station::ALL {
            assert_eq!(next_up.display(station), "대기");
        }
    }

    #[test]
    fn completed_station_passes_to_later_registrant() {
        let rows = vec![
            registrant("먼저", "08:30", &[(Station::BloodDraw, ExamStatus::Complete)]),
            registrant("나중", "09:00", &[]),
        ];
        let next_up = select_next_up(&rows);
        assert_eq!(next_up.display(Station::BloodDraw), "나중");
        assert_eq!(next_up.display(Station::Ecg), "먼저");
    }

    #[test]
    fn station_with_no_eligible_rows_stays_unfilled() {
        let rows = vec![registrant(
            "혼자",
            "08:30",
            &[(Station::SnsbC, ExamStatus::Complete)],
        )];
        let next_up = select_next_up(&rows);
        assert_eq!(next_up.display(Station::SnsbC), NO_CANDIDATE);
        assert_eq!(next_up.display(Station::Ecg), "혼자");
    }

    #[test]
    fn scan_stops_once_every_station_is_filled() {
        // The first two rows fill all four stations; the third row's statuses
        // must not matter even though they would disqualify it.
        let rows = vec![
            registrant("첫째", "08:00", &[]),
            registrant("둘째", "08:10", &[]),
            registrant("셋째", "08:20", &[(Station::Ecg, ExamStatus::InProgress)]),
        ];
        let next_up = select_next_up(&rows);
        for station in Station::ALL {
            assert_eq!(next_up.display(station), "첫째");
        }
    }

    #[test]
    fn serializes_with_station_labels() {
        let rows = vec![registrant("김영희", "08:30", &[])];
        let json = serde_json::to_value(select_next_up(&rows)).unwrap();
        assert_eq!(json["assignments"]["심전도"], "김영희");
    }
}

//! The single position-to-name column map for the roster sheet.
//!
//! Every consumer of the sheet used to carry its own copy of the column
//! indices; this schema is now the only place a raw index appears. Downstream
//! code works with named registrant fields or with the projected layout below.

use examq_model::Station;

use crate::IngestError;

/// Raw-sheet indices of one station's status/start/end triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationColumns {
    pub status: usize,
    pub started: usize,
    pub ended: usize,
}

/// Column layout of the roster sheet, as raw zero-based indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSchema {
    pub id: usize,
    pub name: usize,
    pub reserved_on: usize,
    pub arrival: usize,
    pub attendance: usize,
    pub stations: [(Station, StationColumns); 4],
    pub performer: usize,
}

/// Position of the reservation-date column in the projected layout.
///
/// The projection order is fixed by [`RosterSchema::projection_indices`]; the
/// date filter for matrix output reads this cell.
pub const PROJECTED_RESERVED_ON: usize = 2;

impl Default for RosterSchema {
    /// The clinic's sheet layout. Columns 0 (접수시각), 3 (연락처) and
    /// 5 (생년월일) exist on the sheet but are not part of the queue view.
    fn default() -> Self {
        Self {
            id: 1,
            name: 2,
            reserved_on: 4,
            arrival: 6,
            attendance: 7,
            stations: [
                (
                    Station::Ecg,
                    StationColumns {
                        status: 8,
                        started: 9,
                        ended: 10,
                    },
                ),
                (
                    Station::PhysicalFunction,
                    StationColumns {
                        status: 11,
                        started: 12,
                        ended: 13,
                    },
                ),
                (
                    Station::SnsbC,
                    StationColumns {
                        status: 14,
                        started: 15,
                        ended: 16,
                    },
                ),
                (
                    Station::BloodDraw,
                    StationColumns {
                        status: 17,
                        started: 18,
                        ended: 19,
                    },
                ),
            ],
            performer: 20,
        }
    }
}

impl RosterSchema {
    /// Raw indices of the queue view's columns, in projected order.
    pub fn projection_indices(&self) -> Vec<usize> {
        let mut indices = vec![
            self.id,
            self.name,
            self.reserved_on,
            self.arrival,
            self.attendance,
        ];
        for (_, columns) in &self.stations {
            indices.extend([columns.status, columns.started, columns.ended]);
        }
        indices.push(self.performer);
        indices
    }

    /// Expected header labels, aligned with [`Self::projection_indices`].
    pub fn expected_header(&self) -> Vec<String> {
        let mut header = vec![
            "ID".to_string(),
            "이름".to_string(),
            "예약날짜".to_string(),
            "도착 시간".to_string(),
            "상태".to_string(),
        ];
        for (station, _) in &self.stations {
            header.push(format!("{} 상태", station.label()));
            header.push(format!("{} 시작", station.label()));
            header.push(format!("{} 종료", station.label()));
        }
        header.push("수행자".to_string());
        header
    }

    /// Checks a raw header row against the expected labels.
    ///
    /// A mismatch is the one ingestion failure that must be loud: a reordered
    /// sheet silently corrupts every downstream consumer otherwise.
    pub fn validate_header(&self, header_row: &[String]) -> Result<(), IngestError> {
        let indices = self.projection_indices();
        for (&raw_index, expected) in indices.iter().zip(self.expected_header()) {
            let found = header_row.get(raw_index).cloned().unwrap_or_default();
            if normalize_label(&found) != expected {
                return Err(IngestError::HeaderMismatch {
                    position: raw_index,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }
}

/// Collapses interior whitespace and strips a BOM, the way sheet exports
/// mangle header labels.
pub(crate) fn normalize_label(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_header(schema: &RosterSchema) -> Vec<String> {
        // Rebuild the raw 21-column header the default schema projects from.
        let mut raw = vec![String::new(); 21];
        for (index, label) in schema
            .projection_indices()
            .into_iter()
            .zip(schema.expected_header())
        {
            raw[index] = label;
        }
        raw[0] = "접수시각".to_string();
        raw[3] = "연락처".to_string();
        raw[5] = "생년월일".to_string();
        raw
    }

    #[test]
    fn default_schema_accepts_its_own_header() {
        let schema = RosterSchema::default();
        assert!(schema.validate_header(&full_header(&schema)).is_ok());
    }

    #[test]
    fn reordered_header_is_rejected_with_position() {
        let schema = RosterSchema::default();
        let mut header = full_header(&schema);
        header.swap(schema.id, schema.name);
        match schema.validate_header(&header) {
            Err(IngestError::HeaderMismatch { position, .. }) => {
                assert_eq!(position, schema.id);
            }
            other => panic!("expected header mismatch, got {other:?}"),
        }
    }

    #[test]
    fn bom_and_extra_whitespace_are_tolerated() {
        let schema = RosterSchema::default();
        let mut header = full_header(&schema);
        header[schema.id] = "\u{feff}ID".to_string();
        header[schema.arrival] = "도착  시간".to_string();
        assert!(schema.validate_header(&header).is_ok());
    }

    #[test]
    fn projection_has_eighteen_columns() {
        let schema = RosterSchema::default();
        assert_eq!(schema.projection_indices().len(), 18);
        assert_eq!(schema.expected_header().len(), 18);
        assert_eq!(schema.expected_header()[PROJECTED_RESERVED_ON], "예약날짜");
    }
}

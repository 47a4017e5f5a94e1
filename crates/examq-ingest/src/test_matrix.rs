//! Matrix fixture builders shared by this crate's tests.

use examq_model::Station;

use crate::schema::RosterSchema;

pub(crate) fn header_row(schema: &RosterSchema) -> Vec<String> {
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

/// Builds a full-width data row; `station_statuses` overrides status cells by
/// station label (e.g. `("심전도", "완료")`).
pub(crate) fn data_row(
    id: &str,
    name: &str,
    reserved_on: &str,
    arrival: &str,
    attendance: &str,
    station_statuses: &[(&str, &str)],
) -> Vec<String> {
    let schema = RosterSchema::default();
    let mut row = vec![String::new(); 21];
    row[schema.id] = id.to_string();
    row[schema.name] = name.to_string();
    row[schema.reserved_on] = reserved_on.to_string();
    row[schema.arrival] = arrival.to_string();
    row[schema.attendance] = attendance.to_string();
    for (label, status) in station_statuses {
        let station: Station = label.parse().expect("known station label");
        let (_, columns) = schema
            .stations
            .iter()
            .find(|(candidate, _)| *candidate == station)
            .expect("station in schema");
        row[columns.status] = (*status).to_string();
    }
    row
}

//! End-to-end queue flow: matrix in, next-up recommendation out.

use chrono::NaiveDate;

use examq_ingest::{RosterSchema, ingest_matrix};
use examq_model::Station;
use examq_queue::{NO_CANDIDATE, present_sorted, retain_today, select_next_up};

fn header_row(schema: &RosterSchema) -> Vec<String> {
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

fn data_row(
    schema: &RosterSchema,
    id: &str,
    name: &str,
    reserved_on: &str,
    arrival: &str,
    attendance: &str,
    station_statuses: &[(Station, &str)],
) -> Vec<String> {
    let mut row = vec![String::new(); 21];
    row[schema.id] = id.to_string();
    row[schema.name] = name.to_string();
    row[schema.reserved_on] = reserved_on.to_string();
    row[schema.arrival] = arrival.to_string();
    row[schema.attendance] = attendance.to_string();
    for (station, status) in station_statuses {
        let (_, columns) = schema
            .stations
            .iter()
            .find(|(candidate, _)| candidate == station)
            .expect("station in schema");
        row[columns.status] = (*status).to_string();
    }
    row
}

#[test]
fn two_row_scenario_orders_by_arrival_and_skips_the_busy_row() {
    let schema = RosterSchema::default();
    let today = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();

    // Row A: present, 09:00, nothing started.
    // Row B: present, 08:30, mid-ECG.
    let matrix = vec![
        header_row(&schema),
        data_row(&schema, "EX-001", "A씨", "6월 5일", "09:00", "출석", &[]),
        data_row(
            &schema,
            "EX-002",
            "B씨",
            "6월 5일",
            "08:30",
            "출석",
            &[(Station::Ecg, "검사중")],
        ),
    ];

    let report = ingest_matrix(&schema, &matrix).expect("well-formed matrix");
    assert!(report.issues.is_empty());

    let queue = present_sorted(retain_today(report.registrants, today));
    let names: Vec<&str> = queue.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["B씨", "A씨"]);

    // B is mid-exam and disqualified everywhere; A takes every station.
    let next_up = select_next_up(&queue);
    for station in Station::ALL {
        assert_eq!(next_up.display(station), "A씨");
    }
}

#[test]
fn off_day_rows_never_reach_selection() {
    let schema = RosterSchema::default();
    let today = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();

    let matrix = vec![
        header_row(&schema),
        data_row(&schema, "EX-003", "내일씨", "6월 6일", "08:00", "출석", &[]),
    ];

    let report = ingest_matrix(&schema, &matrix).expect("well-formed matrix");
    let queue = present_sorted(retain_today(report.registrants, today));
    assert!(queue.is_empty());

    let next_up = select_next_up(&queue);
    for station in Station::ALL {
        assert_eq!(next_up.display(station), NO_CANDIDATE);
    }
}

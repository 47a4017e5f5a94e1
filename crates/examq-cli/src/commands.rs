use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use tracing::warn;

use examq_ingest::{CsvRoster, RosterSchema, RosterSource, ingest_matrix};
use examq_model::Station;
use examq_queue::{decorate, present_sorted, retain_today, select_next_up};
use examq_server::AppState;

use crate::cli::{BoardArgs, ServeArgs};
use crate::today_or_clock;

pub fn run_serve(args: &ServeArgs) -> anyhow::Result<()> {
    let roster = CsvRoster::new(&args.roster);
    let state = AppState::new(Box::new(roster), Duration::from_secs(args.ttl_secs))
        .with_today(args.today);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime
        .block_on(examq_server::serve(args.bind, Arc::new(state)))
        .context("server exited with an error")?;
    Ok(())
}

/// Renders today's board once. Returns true when the roster had
/// error-severity validation issues.
pub fn run_board(args: &BoardArgs) -> anyhow::Result<bool> {
    let schema = RosterSchema::default();
    let matrix = CsvRoster::new(&args.roster)
        .load()
        .with_context(|| format!("failed to read roster {}", args.roster.display()))?;
    let report = ingest_matrix(&schema, &matrix).context("roster does not match the schema")?;
    for issue in &report.issues {
        warn!(row = issue.row, column = ?issue.column, "{}", issue.message);
    }

    let today = today_or_clock(args.today);
    let has_errors = report.has_errors();
    let queue = present_sorted(retain_today(report.registrants, today));
    let rows = decorate(&queue);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    let mut header = vec!["No", "이름", "상태", "도착 시간"];
    header.extend(Station::ALL.map(|station| station.label()));
    table.set_header(header);
    for row in &rows {
        let mut cells = vec![
            row.registration_no.clone(),
            row.name.clone(),
            row.dot.label().to_string(),
            row.arrival.clone(),
        ];
        cells.extend(row.stations.iter().cloned());
        table.add_row(cells);
    }
    println!("{table}");

    let next_up = select_next_up(&queue);
    println!();
    for station in Station::ALL {
        println!("{}: {}", station.label(), next_up.display(station));
    }

    Ok(has_errors)
}

pub fn run_columns() {
    let schema = RosterSchema::default();
    for (index, label) in schema
        .projection_indices()
        .into_iter()
        .zip(schema.expected_header())
    {
        println!("{index:>2}  {label}");
    }
}

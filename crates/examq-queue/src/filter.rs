//! Row filtering and ordering for the day's queue.

use chrono::NaiveDate;
use tracing::trace;

use examq_model::Registrant;

use crate::date::matches_day;

/// Keeps the registrants reserved for `today`.
///
/// `today` is an explicit parameter; nothing in the queue core reads a clock.
pub fn retain_today(registrants: Vec<Registrant>, today: NaiveDate) -> Vec<Registrant> {
    registrants
        .into_iter()
        .filter(|registrant| {
            let keep = matches_day(&registrant.reserved_on, today);
            if !keep {
                trace!(id = %registrant.id, cell = %registrant.reserved_on, "dropping off-day row");
            }
            keep
        })
        .collect()
}

/// Keeps checked-in registrants, ordered by arrival time.
///
/// The sort is stable: rows without a parseable arrival go after every parsed
/// arrival and keep their relative order, as do exact arrival ties.
pub fn present_sorted(registrants: Vec<Registrant>) -> Vec<Registrant> {
    let mut present: Vec<Registrant> = registrants
        .into_iter()
        .filter(|registrant| registrant.attendance.is_present())
        .collect();
    present.sort_by_key(|registrant| (registrant.arrival.is_none(), registrant.arrival));
    present
}

/// Matrix-level counterpart of [`retain_today`] for projected display output.
///
/// Row 0 (the header) is always kept, whatever its content; data rows are kept
/// only when the cell at `date_column` matches `today`.
pub fn retain_today_matrix(
    matrix: &[Vec<String>],
    date_column: usize,
    today: NaiveDate,
) -> Vec<Vec<String>> {
    let mut rows = matrix.iter();
    let Some(header) = rows.next() else {
        return Vec::new();
    };
    let mut kept = vec![header.clone()];
    kept.extend(
        rows.filter(|row| {
            row.get(date_column)
                .is_some_and(|cell| matches_day(cell, today))
        })
        .cloned(),
    );
    kept
}

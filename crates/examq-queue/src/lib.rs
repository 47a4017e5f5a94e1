//! Queue core for the exam-day board.
//!
//! Pure transforms over typed registrants: keep today's reservations, order
//! the checked-in by arrival, recommend the next person per station, and
//! decorate rows for display. Nothing here reads a clock or touches I/O.

pub mod board;
pub mod date;
pub mod filter;
pub mod select;

pub use board::{BoardRow, StatusDot, board_matrix, decorate};
pub use date::{korean_day_label, matches_day, parse_loose_date};
pub use filter::{present_sorted, retain_today, retain_today_matrix};
pub use select::{NO_CANDIDATE, NextUp, select_next_up};

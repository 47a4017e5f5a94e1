//! Canonical status enumerations for roster cells.
//!
//! The sheet records statuses as free-form display strings, with two different
//! spellings for "in progress" (`검사중` and `진행중`) depending on who wrote
//! the cell. Both spellings parse to a single canonical variant here; any
//! other literal is a validation error, never a silent non-match.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Whether a registrant has checked in for the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attendance {
    /// Reserved but not yet at the clinic (empty status cell).
    NotArrived,
    /// Checked in (`출석`).
    Present,
}

impl Attendance {
    /// The canonical cell literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Attendance::NotArrived => "",
            Attendance::Present => "출석",
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Attendance::Present)
    }
}

impl FromStr for Attendance {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(Attendance::NotArrived),
            "출석" => Ok(Attendance::Present),
            other => Err(ModelError::UnknownAttendance(other.to_string())),
        }
    }
}

impl fmt::Display for Attendance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress of a single exam at a single station.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExamStatus {
    /// Not started (empty status cell).
    #[default]
    NotStarted,
    /// Exam underway (`검사중`, also spelled `진행중` on the sheet).
    InProgress,
    /// Exam finished (`완료`).
    Complete,
}

impl ExamStatus {
    /// The canonical cell literal (the alternate `진행중` spelling is not
    /// produced on output).
    pub fn as_str(&self) -> &'static str {
        match self {
            ExamStatus::NotStarted => "",
            ExamStatus::InProgress => "검사중",
            ExamStatus::Complete => "완료",
        }
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, ExamStatus::InProgress)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, ExamStatus::Complete)
    }
}

impl FromStr for ExamStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(ExamStatus::NotStarted),
            "검사중" | "진행중" => Ok(ExamStatus::InProgress),
            "완료" => Ok(ExamStatus::Complete),
            other => Err(ModelError::UnknownExamStatus(other.to_string())),
        }
    }
}

impl fmt::Display for ExamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attendance_from_cell() {
        assert_eq!("출석".parse::<Attendance>().unwrap(), Attendance::Present);
        assert_eq!("  ".parse::<Attendance>().unwrap(), Attendance::NotArrived);
        assert!("결석".parse::<Attendance>().is_err());
    }

    #[test]
    fn both_in_progress_spellings_canonicalize() {
        assert_eq!(
            "검사중".parse::<ExamStatus>().unwrap(),
            ExamStatus::InProgress
        );
        assert_eq!(
            "진행중".parse::<ExamStatus>().unwrap(),
            ExamStatus::InProgress
        );
    }

    #[test]
    fn unknown_exam_status_is_an_error() {
        let err = "보류".parse::<ExamStatus>().unwrap_err();
        assert!(err.to_string().contains("보류"));
    }

    #[test]
    fn canonical_output_uses_single_spelling() {
        assert_eq!(ExamStatus::InProgress.as_str(), "검사중");
    }
}

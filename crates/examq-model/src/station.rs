//! Exam stations tracked by the queue board.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// One of the exam stations a registrant moves through during a visit.
///
/// The declaration order is the board's canonical column order and the
/// iteration order of [`Station::ALL`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Station {
    /// 심전도 (electrocardiogram)
    #[serde(rename = "심전도")]
    Ecg,
    /// 신체기능 (physical function)
    #[serde(rename = "신체기능")]
    PhysicalFunction,
    /// SNSB-C cognitive battery
    #[serde(rename = "SNSB-C")]
    SnsbC,
    /// 채혈 (blood draw)
    #[serde(rename = "채혈")]
    BloodDraw,
}

impl Station {
    pub const ALL: [Station; 4] = [
        Station::Ecg,
        Station::PhysicalFunction,
        Station::SnsbC,
        Station::BloodDraw,
    ];

    /// The label used on the sheet and the board.
    pub fn label(&self) -> &'static str {
        match self {
            Station::Ecg => "심전도",
            Station::PhysicalFunction => "신체기능",
            Station::SnsbC => "SNSB-C",
            Station::BloodDraw => "채혈",
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Station {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "심전도" => Ok(Station::Ecg),
            "신체기능" => Ok(Station::PhysicalFunction),
            "SNSB-C" => Ok(Station::SnsbC),
            "채혈" => Ok(Station::BloodDraw),
            other => Err(ModelError::UnknownStation(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for station in Station::ALL {
            assert_eq!(station.label().parse::<Station>().unwrap(), station);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!("초음파".parse::<Station>().is_err());
    }

    #[test]
    fn all_order_matches_ord() {
        let mut sorted = Station::ALL;
        sorted.sort();
        assert_eq!(sorted, Station::ALL);
    }
}

//! Calendar labels derived from accident timestamps.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Weekday names in chart order.
pub const WEEKDAY_ORDER: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Season labels in chart order.
pub const SEASON_ORDER: [&str; 4] = ["WINTER", "SPRING", "SUMMER", "AUTUMN"];

/// Meteorological season of the northern hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    /// All seasons in chart order.
    pub const ALL: [Season; 4] = [Self::Winter, Self::Spring, Self::Summer, Self::Autumn];

    /// Maps a calendar month to its season.
    ///
    /// Total over `u32`: any value outside 1..=8 and 12 lands in autumn.
    pub fn from_month(month: u32) -> Self {
        match month {
            12 | 1 | 2 => Self::Winter,
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            _ => Self::Autumn,
        }
    }

    /// Season of a possibly unknown month; an unknown month is autumn.
    pub fn from_optional_month(month: Option<u32>) -> Self {
        month.map_or(Self::Autumn, Self::from_month)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Winter => "WINTER",
            Self::Spring => "SPRING",
            Self::Summer => "SUMMER",
            Self::Autumn => "AUTUMN",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

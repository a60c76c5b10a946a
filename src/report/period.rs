//! Making Tax Digital calendar quarters and filing deadlines.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar quarter of the MTD reporting cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

/// A reporting period with inclusive start and end dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// Whether `date` falls within the period (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Self::Q1, Self::Q2, Self::Q3, Self::Q4];

    /// Parse a 1-based quarter number.
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Self::Q1),
            2 => Some(Self::Q2),
            3 => Some(Self::Q3),
            4 => Some(Self::Q4),
            _ => None,
        }
    }

    /// 1-based quarter number.
    pub fn number(self) -> u32 {
        match self {
            Self::Q1 => 1,
            Self::Q2 => 2,
            Self::Q3 => 3,
            Self::Q4 => 4,
        }
    }

    /// The quarter containing a date.
    pub fn containing(date: NaiveDate) -> Self {
        match date.month() {
            1..=3 => Self::Q1,
            4..=6 => Self::Q2,
            7..=9 => Self::Q3,
            _ => Self::Q4,
        }
    }

    /// Inclusive start/end dates of this quarter in `year`.
    pub fn period(self, year: i32) -> Period {
        let (start, end) = match self {
            Self::Q1 => ((1, 1), (3, 31)),
            Self::Q2 => ((4, 1), (6, 30)),
            Self::Q3 => ((7, 1), (9, 30)),
            Self::Q4 => ((10, 1), (12, 31)),
        };
        Period {
            start: ymd(year, start.0, start.1),
            end: ymd(year, end.0, end.1),
        }
    }

    /// MTD filing deadline for this quarter: one month and seven days after
    /// the quarter ends (7 May, 7 Aug, 7 Nov, 7 Feb of the following year).
    pub fn filing_due_date(self, year: i32) -> NaiveDate {
        match self {
            Self::Q1 => ymd(year, 5, 7),
            Self::Q2 => ymd(year, 8, 7),
            Self::Q3 => ymd(year, 11, 7),
            Self::Q4 => ymd(year + 1, 2, 7),
        }
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    // Month/day pairs here are fixed calendar constants, valid in every year.
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

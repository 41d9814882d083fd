//! Staff birthday calendar over a fixed 366-slot year.
//!
//! Every calendar day, February 29 included, owns one slot in `0..=365`.
//! Staff records are bucketed by slot, and navigation walks the buckets
//! circularly to find the next or previous day somebody has a birthday.

mod consts;
mod error;
mod navigation;
mod prelude;
mod render;
mod source;
mod staff;
mod table;
mod types;

pub use consts::*;
pub use error::CalendarError;
pub use navigation::{CalendarView, next_populated_day, prev_populated_day, select_day};
pub use render::{render_calendar, render_calendar_all, render_day};
pub use source::{STAFF_ENDPOINT, SourceError, StaffSource, decode_payload};
pub use staff::{Staff, StaffByDay};
pub use table::{build_month_day_table, day_index_from_date, month_day_table};
pub use types::{Day, DayIndex, Month, days_in_month, is_leap_year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A month and day without a year, as shown on the calendar (`M/D`).
///
/// Ordering is calendar order, so it agrees with the slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{month}/{day}")]
#[serde(try_from = "MonthDayRepr", into = "MonthDayRepr")]
pub struct MonthDay {
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "{_0}")]
    OutOfRange(CalendarError),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl From<CalendarError> for ParseError {
    fn from(err: CalendarError) -> Self {
        Self::OutOfRange(err)
    }
}

impl MonthDay {
    /// Creates a month/day pair from 1-based numbers.
    ///
    /// # Errors
    /// Returns `CalendarError` if the month or the day is out of range.
    pub fn new(month: u8, day: u8) -> Result<Self, CalendarError> {
        let month = Month::new(month)?;
        let day = Day::new(day, month)?;
        Ok(Self { month, day })
    }

    pub(crate) const fn from_parts(month: Month, day: Day) -> Self {
        Self { month, day }
    }

    /// Returns the month (1..=12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of the month (1..=31)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// The slot this pair occupies.
    pub const fn index(&self) -> DayIndex {
        DayIndex(table::DAYS_BEFORE_MONTH[self.month.get() as usize] + self.day.get() as u16 - 1)
    }

    /// Whether this pair is a real date in `year`.
    ///
    /// Only February 29 of a common year is not. The slot still exists.
    pub const fn occurs_in(&self, year: u16) -> bool {
        !self.is_leap_day() || is_leap_year(year)
    }

    /// Whether this is February 29
    pub const fn is_leap_day(&self) -> bool {
        self.index().get() == LEAP_DAY_INDEX
    }
}

impl From<MonthDay> for DayIndex {
    fn from(md: MonthDay) -> Self {
        md.index()
    }
}

impl From<DayIndex> for MonthDay {
    fn from(index: DayIndex) -> Self {
        index.month_day()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct MonthDayRepr {
    month: u8,
    day:   u8,
}

impl TryFrom<MonthDayRepr> for MonthDay {
    type Error = CalendarError;

    fn try_from(repr: MonthDayRepr) -> Result<Self, Self::Error> {
        Self::new(repr.month, repr.day)
    }
}

impl From<MonthDay> for MonthDayRepr {
    fn from(md: MonthDay) -> Self {
        Self {
            month: md.month(),
            day:   md.day(),
        }
    }
}

/// Parses `M/D`, `M/D/YYYY`, `MM-DD` and `YYYY-MM-DD`. A trailing ISO time
/// (`YYYY-MM-DDTHH:MM:SSZ`) is ignored.
///
/// The year is checked to be numeric and otherwise dropped, so February 29
/// parses for any year.
impl FromStr for MonthDay {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let date = trimmed.split_once('T').map_or(trimmed, |(date, _)| date);

        let has_hyphen = date.contains(DATE_SEPARATOR);
        let has_slash = date.contains(MONTH_FIRST_SEPARATOR);

        if has_hyphen && has_slash {
            return Err(ParseError::InvalidFormat(format!(
                "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR})"
            )));
        }

        if has_hyphen {
            // ISO order: MM-DD or YYYY-MM-DD
            let parts: Vec<&str> = date.split(DATE_SEPARATOR).map(str::trim).collect();
            match parts.as_slice() {
                [month, day] => Self::from_components(month, day, None),
                [year, month, day] => Self::from_components(month, day, Some(*year)),
                _ => Err(ParseError::InvalidFormat(format!(
                    "Too many {DATE_SEPARATOR} separators: expected 1-2, found {}",
                    parts.len() - 1
                ))),
            }
        } else if has_slash {
            // Month-first: M/D or M/D/YYYY
            let parts: Vec<&str> = date.split(MONTH_FIRST_SEPARATOR).map(str::trim).collect();
            match parts.as_slice() {
                [month, day] => Self::from_components(month, day, None),
                [month, day, year] => Self::from_components(month, day, Some(*year)),
                _ => Err(ParseError::InvalidFormat(format!(
                    "Too many {MONTH_FIRST_SEPARATOR} separators: expected 1-2, found {}",
                    parts.len() - 1
                ))),
            }
        } else {
            Err(ParseError::InvalidFormat(trimmed.to_owned()))
        }
    }
}

impl MonthDay {
    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn from_components(month: &str, day: &str, year: Option<&str>) -> Result<Self, ParseError> {
        if let Some(year) = year {
            year.parse::<u16>()
                .map_err(|_| ParseError::InvalidFormat(year.to_owned()))?;
        }
        let month = Self::parse_u8(month)?;
        let day = Self::parse_u8(day)?;
        Self::new(month, day).map_err(ParseError::from)
    }
}

//! Conversion between calendar dates and day-of-year slots.
//!
//! The year always has 366 slots: February is treated as 29 days long, so
//! February 29 owns slot 59 in every year and March 1 is always slot 60.

use std::sync::OnceLock;

use chrono::Datelike;

use crate::consts::{DAYS_IN_MONTH, MAX_MONTH, MIN_DAY, SLOTS_PER_YEAR};
use crate::error::CalendarError;
use crate::types::{Day, DayIndex, Month};
use crate::MonthDay;

/// Slots preceding each month (index 0 is unused, months are 1-indexed).
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] = days_before_month();

const fn days_before_month() -> [u16; 13] {
    let mut table = [0u16; 13];
    let mut month = 2;
    while month <= MAX_MONTH as usize {
        table[month] = table[month - 1] + DAYS_IN_MONTH[month - 1] as u16;
        month += 1;
    }
    table
}

/// Maps a 0-based month and 1-based day to its slot.
///
/// This matches the month numbering of `chrono::Datelike::month0`.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month0 > 11`, and
/// `CalendarError::InvalidDay` if `day` is past the end of the month
/// (February allows 29).
pub fn day_index_from_date(month0: u8, day: u8) -> Result<DayIndex, CalendarError> {
    if month0 >= MAX_MONTH {
        return Err(CalendarError::InvalidMonth { month: month0 });
    }
    let month = Month::new(month0 + 1)?;
    let day = Day::new(day, month)?;

    DayIndex::new(DAYS_BEFORE_MONTH[month.get() as usize] + u16::from(day.get()) - 1)
}

/// Builds the `index -> (month, day)` table by walking the month lengths.
pub fn build_month_day_table() -> Vec<MonthDay> {
    let mut table = Vec::with_capacity(SLOTS_PER_YEAR as usize);
    for month in (1..=MAX_MONTH).filter_map(|m| Month::new(m).ok()) {
        let days = (MIN_DAY..=month.days()).filter_map(|d| Day::new(d, month).ok());
        table.extend(days.map(|day| MonthDay::from_parts(month, day)));
    }
    table
}

/// The `index -> (month, day)` table, computed on first use.
pub fn month_day_table() -> &'static [MonthDay] {
    static TABLE: OnceLock<Vec<MonthDay>> = OnceLock::new();
    TABLE.get_or_init(build_month_day_table)
}

impl DayIndex {
    /// Slot for a 1-based month and day.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` or `CalendarError::InvalidDay`
    /// when the pair is not in the 366-slot calendar.
    pub fn from_month_day(month: u8, day: u8) -> Result<Self, CalendarError> {
        let month0 = month.checked_sub(1).ok_or(CalendarError::InvalidMonth { month })?;
        day_index_from_date(month0, day).map_err(|err| match err {
            CalendarError::InvalidMonth { .. } => CalendarError::InvalidMonth { month },
            other => other,
        })
    }

    /// Slot for a real calendar date.
    pub fn from_date<D: Datelike>(date: &D) -> Self {
        // A real date always has a valid month and day, and every real day has a slot.
        let month0 = date.month0() as usize;
        let day = date.day() as u16;
        Self(DAYS_BEFORE_MONTH[month0 + 1] + day - 1)
    }

    /// The `(month, day)` pair this slot displays as.
    pub fn month_day(self) -> MonthDay {
        month_day_table()[self.as_usize()]
    }
}

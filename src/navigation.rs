use chrono::Datelike;
use tracing::debug;

use crate::MonthDay;
use crate::error::CalendarError;
use crate::staff::{Staff, StaffByDay};
use crate::types::DayIndex;

/// Next populated slot after `from`, wrapping past December 31.
///
/// `from` itself is only returned when it is the sole populated slot.
///
/// # Errors
/// Returns `CalendarError::NoData` if no bucket is populated.
pub fn next_populated_day(table: &StaffByDay, from: DayIndex) -> Result<DayIndex, CalendarError> {
    scan(table, from, DayIndex::next)
}

/// Previous populated slot before `from`, wrapping past January 1.
///
/// # Errors
/// Returns `CalendarError::NoData` if no bucket is populated.
pub fn prev_populated_day(table: &StaffByDay, from: DayIndex) -> Result<DayIndex, CalendarError> {
    scan(table, from, DayIndex::prev)
}

fn scan(
    table: &StaffByDay,
    from: DayIndex,
    step: fn(DayIndex) -> DayIndex,
) -> Result<DayIndex, CalendarError> {
    if !table.has_any() {
        return Err(CalendarError::NoData);
    }
    // At most one full lap: the lap ends back on `from`.
    let mut index = step(from);
    while !table.is_populated(index) {
        index = step(index);
    }
    Ok(index)
}

/// Validates an explicit jump target.
///
/// # Errors
/// Returns `CalendarError::IndexOutOfRange` if `index > 365`.
pub const fn select_day(index: u16) -> Result<DayIndex, CalendarError> {
    DayIndex::new(index)
}

/// Session state of the birthday viewer: the table on display and the
/// slot being looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    current: DayIndex,
    staff:   StaffByDay,
}

impl CalendarView {
    /// Starts on `current` with an empty table.
    pub fn new(current: DayIndex) -> Self {
        Self::with_table(current, StaffByDay::empty())
    }

    pub const fn with_table(current: DayIndex, staff: StaffByDay) -> Self {
        Self { current, staff }
    }

    /// Starts on the slot of `today`.
    pub fn starting_at<D: Datelike>(today: &D) -> Self {
        Self::new(DayIndex::from_date(today))
    }

    pub const fn current(&self) -> DayIndex {
        self.current
    }

    pub const fn staff(&self) -> &StaffByDay {
        &self.staff
    }

    /// Heading for the current slot
    pub fn current_month_day(&self) -> MonthDay {
        self.current.month_day()
    }

    /// Birthdays on the current slot
    pub fn current_staff(&self) -> &[Staff] {
        self.staff.bucket(self.current)
    }

    /// Swaps in a freshly loaded table, keeping the current slot.
    pub fn replace_table(&mut self, staff: StaffByDay) {
        debug!(staff = staff.staff_count(), "replacing staff table");
        self.staff = staff;
    }

    /// Jumps straight to `index`.
    pub const fn jump_to(&mut self, index: DayIndex) -> DayIndex {
        self.current = index;
        index
    }

    /// Moves to the next populated slot.
    ///
    /// # Errors
    /// Returns `CalendarError::NoData` for an empty table; the view does not move.
    pub fn advance(&mut self) -> Result<DayIndex, CalendarError> {
        self.current = next_populated_day(&self.staff, self.current)?;
        Ok(self.current)
    }

    /// Moves to the previous populated slot.
    ///
    /// # Errors
    /// Returns `CalendarError::NoData` for an empty table; the view does not move.
    pub fn retreat(&mut self) -> Result<DayIndex, CalendarError> {
        self.current = prev_populated_day(&self.staff, self.current)?;
        Ok(self.current)
    }

    /// Moves to the slot of `today`.
    pub fn reset_to_today<D: Datelike>(&mut self, today: &D) -> DayIndex {
        self.jump_to(DayIndex::from_date(today))
    }
}

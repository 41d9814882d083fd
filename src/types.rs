use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_DAY, MAX_DAY_INDEX,
    MAX_MONTH, MIN_DAY, SLOTS_PER_YEAR,
};
use crate::error::CalendarError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        let non_zero = NonZeroU8::new(value).ok_or(CalendarError::InvalidMonth { month: value })?;
        if value > MAX_MONTH {
            return Err(CalendarError::InvalidMonth { month: value });
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Number of day slots this month owns (February always 29)
    #[inline]
    pub const fn days(self) -> u8 {
        DAYS_IN_MONTH[self.get() as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for its month in the 366-slot model
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the slot-model length of `month`.
    ///
    /// February 29 is always accepted.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, month: Month) -> Result<Self, CalendarError> {
        let max_day = month.days();
        let invalid = CalendarError::InvalidDay {
            day: value,
            month: month.get(),
            max_day,
        };

        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > max_day {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // No month context here, so only the widest month bounds apply
        let invalid = CalendarError::DayOutOfRange { day: value };
        if value < MIN_DAY || value > MAX_DAY {
            return Err(invalid);
        }
        NonZeroU8::new(value).map(Self).ok_or(invalid)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position in the fixed 366-slot year, `0..=365`.
///
/// Slot 59 always belongs to February 29.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, Into,
)]
#[serde(try_from = "u16", into = "u16")]
pub struct DayIndex(pub(crate) u16);

impl DayIndex {
    /// First slot (January 1)
    pub const FIRST: Self = Self(0);
    /// Last slot (December 31)
    pub const LAST: Self = Self(MAX_DAY_INDEX);

    /// Creates a new index, validating the range.
    ///
    /// # Errors
    /// Returns `CalendarError::IndexOutOfRange` if `value > 365`.
    pub const fn new(value: u16) -> Result<Self, CalendarError> {
        if value > MAX_DAY_INDEX {
            return Err(CalendarError::IndexOutOfRange { index: value });
        }
        Ok(Self(value))
    }

    /// Returns the index as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Returns the index for slice access
    #[inline]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// The following slot, wrapping December 31 to January 1.
    #[inline]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % SLOTS_PER_YEAR)
    }

    /// The preceding slot, wrapping January 1 to December 31.
    #[inline]
    pub const fn prev(self) -> Self {
        Self((self.0 + SLOTS_PER_YEAR - 1) % SLOTS_PER_YEAR)
    }

    /// Every slot in calendar order.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..SLOTS_PER_YEAR).map(Self)
    }
}

impl TryFrom<u16> for DayIndex {
    type Error = CalendarError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Day slots in `month` (1-based). February is always 29.
///
/// Returns `None` for a month outside `1..=12`.
pub const fn days_in_month(month: u8) -> Option<u8> {
    if month == 0 || month > MAX_MONTH {
        return None;
    }
    Some(DAYS_IN_MONTH[month as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert_eq!(Month::new(0), Err(CalendarError::InvalidMonth { month: 0 }));
        assert_eq!(Month::new(13), Err(CalendarError::InvalidMonth { month: 13 }));
        assert_eq!(Month::new(255), Err(CalendarError::InvalidMonth { month: 255 }));
    }

    #[test]
    fn test_month_days() {
        let expected = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (m, days) in (1..=12).zip(expected) {
            assert_eq!(Month::new(m).unwrap().days(), days, "Month {m} has incorrect day count");
        }
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);

        assert!(serde_json::from_str::<Month>("13").is_err());
    }

    #[test]
    fn test_day_new_valid() {
        let january = Month::new(1).unwrap();
        let february = Month::new(2).unwrap();
        let april = Month::new(4).unwrap();

        assert!(Day::new(1, january).is_ok());
        assert!(Day::new(31, january).is_ok());

        // February 29 is always a slot
        assert!(Day::new(29, february).is_ok());
        assert!(Day::new(30, february).is_err());

        assert!(Day::new(30, april).is_ok());
        assert!(Day::new(31, april).is_err());
    }

    #[test]
    fn test_day_new_invalid_reports_bounds() {
        let april = Month::new(4).unwrap();
        assert_eq!(
            Day::new(31, april),
            Err(CalendarError::InvalidDay {
                day:     31,
                month:   4,
                max_day: 30,
            })
        );
        assert!(matches!(Day::new(0, april), Err(CalendarError::InvalidDay { day: 0, .. })));
    }

    #[test]
    fn test_day_try_from_u8() {
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);

        let result: Result<Day, _> = 0.try_into();
        assert!(result.is_err());

        let result: Result<Day, _> = 32.try_into();
        assert_eq!(result, Err(CalendarError::DayOutOfRange { day: 32 }));
        assert_eq!(
            CalendarError::DayOutOfRange { day: 32 }.to_string(),
            "invalid day: 32 (must be 1..=31)"
        );
    }

    #[test]
    fn test_days_in_month_out_of_range() {
        assert_eq!(days_in_month(1), Some(31));
        assert_eq!(days_in_month(2), Some(29));
        assert_eq!(days_in_month(12), Some(31));
        assert_eq!(days_in_month(0), None);
        assert_eq!(days_in_month(13), None);
        assert_eq!(days_in_month(u8::MAX), None);
    }

    #[test]
    fn test_day_index_bounds() {
        assert_eq!(DayIndex::new(0).unwrap(), DayIndex::FIRST);
        assert_eq!(DayIndex::new(365).unwrap(), DayIndex::LAST);
        assert_eq!(
            DayIndex::new(366),
            Err(CalendarError::IndexOutOfRange { index: 366 })
        );
    }

    #[test]
    fn test_day_index_wraps() {
        assert_eq!(DayIndex::LAST.next(), DayIndex::FIRST);
        assert_eq!(DayIndex::FIRST.prev(), DayIndex::LAST);
        assert_eq!(DayIndex::new(58).unwrap().next().get(), 59);
        assert_eq!(DayIndex::new(60).unwrap().prev().get(), 59);
    }

    #[test]
    fn test_day_index_all() {
        let all: Vec<_> = DayIndex::all().collect();
        assert_eq!(all.len(), 366);
        assert_eq!(all.first(), Some(&DayIndex::FIRST));
        assert_eq!(all.last(), Some(&DayIndex::LAST));
    }

    #[test]
    fn test_day_index_serde_and_into() {
        let index = DayIndex::new(59).unwrap();
        assert_eq!(serde_json::to_string(&index).unwrap(), "59");
        assert_eq!(serde_json::from_str::<DayIndex>("59").unwrap(), index);
        assert!(serde_json::from_str::<DayIndex>("366").is_err());

        let raw: u16 = index.into();
        assert_eq!(raw, 59);
        assert_eq!(index.to_string(), "59");
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        u16,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }
}

/// Error type for the day-index calendar mapper and the staff table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Month outside the calendar. Carries the value as the caller supplied it.
    #[error("invalid month: {month}")]
    InvalidMonth { month: u8 },

    /// Day outside the month, judged with a 29-day February.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay { day: u8, month: u8, max_day: u8 },

    /// Day outside every month, checked without a month.
    #[error("invalid day: {day} (must be 1..={max})", max = crate::MAX_DAY)]
    DayOutOfRange { day: u8 },

    /// Day index outside `0..=365`.
    #[error("day index {index} out of range (must be 0..={max})", max = crate::MAX_DAY_INDEX)]
    IndexOutOfRange { index: u16 },

    /// Directional search over a table with no populated bucket.
    #[error("no populated day in staff table")]
    NoData,

    /// Staff table built from a bucket list of the wrong length.
    #[error("staff table must have {expected} buckets, found {found}", expected = crate::SLOTS_PER_YEAR)]
    WrongBucketCount { found: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        struct TestCase {
            error:    CalendarError,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                error:    CalendarError::InvalidMonth { month: 12 },
                expected: "invalid month: 12",
            },
            TestCase {
                error:    CalendarError::InvalidDay {
                    day:     31,
                    month:   4,
                    max_day: 30,
                },
                expected: "invalid day: 31 for month 4 (max 30)",
            },
            TestCase {
                error:    CalendarError::DayOutOfRange { day: 0 },
                expected: "invalid day: 0 (must be 1..=31)",
            },
            TestCase {
                error:    CalendarError::IndexOutOfRange { index: 366 },
                expected: "day index 366 out of range (must be 0..=365)",
            },
            TestCase {
                error:    CalendarError::NoData,
                expected: "no populated day in staff table",
            },
            TestCase {
                error:    CalendarError::WrongBucketCount { found: 365 },
                expected: "staff table must have 366 buckets, found 365",
            },
        ];

        for case in &cases {
            assert_eq!(case.error.to_string(), case.expected);
        }
    }

    #[test]
    fn test_error_is_send_sync_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync + 'static>() {}
        assert_impl::<CalendarError>();
    }
}

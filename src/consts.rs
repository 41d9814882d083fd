/// Number of day-of-year slots. The leap day always owns a slot.
pub const SLOTS_PER_YEAR: u16 = 366;

/// Highest valid day index (December 31)
pub const MAX_DAY_INDEX: u16 = SLOTS_PER_YEAR - 1;

/// Slot reserved for February 29, whether or not the year is a leap year
pub const LEAP_DAY_INDEX: u16 = 59;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Longest month length
pub const MAX_DAY: u8 = 31;

/// Days in February within the slot model
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month of the slot model (index 0 is unused, months are 1-indexed).
/// February always has 29 days.
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    FEBRUARY_DAYS_LEAP, // February (leap day always allocated)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Month-first format separator, also used for display
pub const MONTH_FIRST_SEPARATOR: char = '/';

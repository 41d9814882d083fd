use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::consts::SLOTS_PER_YEAR;
use crate::error::CalendarError;
use crate::prelude::*;
use crate::types::DayIndex;
use crate::{MonthDay, ParseError};

/// A staff member as delivered by the staff API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id:         u64,
    pub first_name: String,
    pub last_name:  String,
    /// Only present in the flat list payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday:   Option<String>,
}

impl Staff {
    /// `"First Last"`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Parses the birthday field, if there is one.
    pub fn birthday_month_day(&self) -> Option<Result<MonthDay, ParseError>> {
        self.birthday.as_deref().map(str::parse)
    }
}

/// Staff grouped into the 366 day-of-year buckets.
///
/// Always holds exactly [`SLOTS_PER_YEAR`] buckets. Buckets keep the order
/// the records arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Deref, Serialize, Deserialize)]
#[deref(forward)]
#[serde(try_from = "Vec<Vec<Staff>>", into = "Vec<Vec<Staff>>")]
pub struct StaffByDay(Box<[Vec<Staff>]>);

impl StaffByDay {
    /// A table with every bucket empty.
    pub fn empty() -> Self {
        Self(vec![Vec::new(); SLOTS_PER_YEAR as usize].into_boxed_slice())
    }

    /// Wraps a list of buckets indexed by day slot.
    ///
    /// # Errors
    /// Returns `CalendarError::WrongBucketCount` unless there are exactly 366 buckets.
    pub fn from_buckets(buckets: Vec<Vec<Staff>>) -> Result<Self, CalendarError> {
        if buckets.len() != SLOTS_PER_YEAR as usize {
            return Err(CalendarError::WrongBucketCount {
                found: buckets.len(),
            });
        }
        Ok(Self(buckets.into_boxed_slice()))
    }

    /// Buckets a flat staff list by each record's `birthday`.
    ///
    /// Records without a usable birthday are skipped.
    pub fn from_staff_list<I>(staff: I) -> Self
    where
        I: IntoIterator<Item = Staff>,
    {
        let mut table = Self::empty();
        for member in staff {
            match member.birthday_month_day() {
                Some(Ok(md)) => table.0[md.index().as_usize()].push(member),
                Some(Err(err)) => {
                    warn!(id = member.id, birthday = ?member.birthday, %err, "skipping staff with unparseable birthday");
                },
                None => warn!(id = member.id, "skipping staff without birthday"),
            }
        }
        table
    }

    /// Staff whose birthday falls on `index`.
    pub fn bucket(&self, index: DayIndex) -> &[Staff] {
        &self.0[index.as_usize()]
    }

    /// Whether anybody has a birthday on `index`
    pub fn is_populated(&self, index: DayIndex) -> bool {
        !self.bucket(index).is_empty()
    }

    /// Whether any bucket is populated
    pub fn has_any(&self) -> bool {
        self.0.iter().any(|bucket| !bucket.is_empty())
    }

    /// Populated slots in calendar order.
    pub fn populated_days(&self) -> impl Iterator<Item = DayIndex> + '_ {
        DayIndex::all().filter(move |&index| self.is_populated(index))
    }

    /// Total number of staff across all buckets
    pub fn staff_count(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    /// Gives the buckets back.
    pub fn into_buckets(self) -> Vec<Vec<Staff>> {
        self.0.into_vec()
    }
}

impl Default for StaffByDay {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<Vec<Vec<Staff>>> for StaffByDay {
    type Error = CalendarError;

    fn try_from(buckets: Vec<Vec<Staff>>) -> Result<Self, Self::Error> {
        Self::from_buckets(buckets)
    }
}

impl From<StaffByDay> for Vec<Vec<Staff>> {
    fn from(table: StaffByDay) -> Self {
        table.into_buckets()
    }
}

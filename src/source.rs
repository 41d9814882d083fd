//! Loading the staff table from a fixture file or the staff API.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use crate::error::CalendarError;
use crate::staff::{Staff, StaffByDay};

/// Path of the staff endpoint below the API base URL
pub const STAFF_ENDPOINT: &str = "/v1/staff";

/// Where the staff table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaffSource {
    /// Static JSON fixture on disk
    Fixture(PathBuf),
    /// Staff API, fetched once
    Remote { base_url: String },
}

/// Error type for loading the staff table.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read fixture {}", path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed")]
    Http {
        url:    String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid staff payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("staff payload is not an array")]
    NotAnArray,

    #[error(transparent)]
    Table(#[from] CalendarError),
}

impl StaffSource {
    /// The URL or path this source reads from, for messages.
    pub fn location(&self) -> String {
        match self {
            Self::Fixture(path) => path.display().to_string(),
            Self::Remote { base_url } => staff_url(base_url),
        }
    }

    /// Loads the full staff table. One attempt, no retry.
    ///
    /// # Errors
    /// Returns `SourceError` if the read or request fails, or the body does
    /// not decode to a staff table.
    pub fn load(&self) -> Result<StaffByDay, SourceError> {
        let body = match self {
            Self::Fixture(path) => read_fixture(path)?,
            Self::Remote { base_url } => fetch(&staff_url(base_url))?,
        };
        let table = decode_payload(&body)?;
        info!(
            source = %self.location(),
            staff = table.staff_count(),
            days = table.populated_days().count(),
            "staff table loaded"
        );
        Ok(table)
    }
}

fn staff_url(base_url: &str) -> String {
    format!("{}{STAFF_ENDPOINT}", base_url.trim_end_matches('/'))
}

fn read_fixture(path: &Path) -> Result<String, SourceError> {
    debug!(path = %path.display(), "reading staff fixture");
    std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_owned(),
        source,
    })
}

fn fetch(url: &str) -> Result<String, SourceError> {
    debug!(%url, "fetching staff");
    let http = |source: reqwest::Error| SourceError::Http {
        url: url.to_owned(),
        source,
    };
    reqwest::blocking::get(url)
        .and_then(reqwest::blocking::Response::error_for_status)
        .and_then(reqwest::blocking::Response::text)
        .map_err(http)
}

/// Decodes a staff payload.
///
/// Accepts a JSON array of 366 arrays of staff, or a flat array of staff
/// carrying `birthday` strings. The shape is picked from the first element.
/// An empty array is an empty table.
///
/// # Errors
/// Returns `SourceError::NotAnArray` for JSON that is not an array,
/// `SourceError::Json` for records that do not decode, and
/// `SourceError::Table` for a bucket list of the wrong length.
pub fn decode_payload(body: &str) -> Result<StaffByDay, SourceError> {
    let value: Value = serde_json::from_str(body)?;
    let by_day = match value.as_array().map(|items| items.first()) {
        None => return Err(SourceError::NotAnArray),
        Some(None) => {
            debug!("staff payload is empty");
            return Ok(StaffByDay::empty());
        },
        Some(Some(first)) => first.is_array(),
    };

    if by_day {
        let buckets: Vec<Vec<Staff>> = serde_json::from_value(value)?;
        Ok(StaffByDay::from_buckets(buckets)?)
    } else {
        let staff: Vec<Staff> = serde_json::from_value(value)?;
        debug!(staff = staff.len(), "bucketing flat staff list by birthday");
        Ok(StaffByDay::from_staff_list(staff))
    }
}

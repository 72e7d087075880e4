//! Review-year calendar: the fixed dates a reconciliation run is anchored on.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{REFERENCE_DAY, REFERENCE_MONTH};
use crate::errors::FieldSyncError;

/// A validated reconciliation year.
///
/// All anchor dates are computed once at construction, so a `ReviewYear`
/// always carries representable dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct ReviewYear {
    year: i32,
    start: DateTime<Utc>,
    reference: DateTime<Utc>,
    previous_year_end: DateTime<Utc>,
}

impl ReviewYear {
    /// Build a review year, failing when any anchor date is out of chrono's range.
    pub fn new(year: i32) -> Result<Self, FieldSyncError> {
        let invalid = || FieldSyncError::InvalidYear { year };
        let start = midnight_utc(year, 1, 1).ok_or_else(invalid)?;
        let reference = midnight_utc(year, REFERENCE_MONTH, REFERENCE_DAY).ok_or_else(invalid)?;
        let previous_year_end = year
            .checked_sub(1)
            .and_then(|prev| midnight_utc(prev, 12, 31))
            .ok_or_else(invalid)?;
        Ok(Self {
            year,
            start,
            reference,
            previous_year_end,
        })
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// January 1 of the year, 00:00 UTC.
    pub fn start_of_year(&self) -> DateTime<Utc> {
        self.start
    }

    /// May 15 of the year, 00:00 UTC. Active cultivations are resolved on this date.
    pub fn reference_date(&self) -> DateTime<Utc> {
        self.reference
    }

    /// December 31 of the previous year, 00:00 UTC. Closing a field sets this end date.
    pub fn end_of_previous_year(&self) -> DateTime<Utc> {
        self.previous_year_end
    }
}

impl TryFrom<i32> for ReviewYear {
    type Error = FieldSyncError;

    fn try_from(year: i32) -> Result<Self, Self::Error> {
        Self::new(year)
    }
}

impl From<ReviewYear> for i32 {
    fn from(year: ReviewYear) -> Self {
        year.year
    }
}

impl std::fmt::Display for ReviewYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.year)
    }
}

fn midnight_utc(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

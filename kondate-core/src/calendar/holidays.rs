//! User-defined holidays highlighted in the month grid.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::date_key::parse_key;

/// A set of dates rendered as holidays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    dates: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Builds a calendar from `YYYY-MM-DD` keys.
    ///
    /// Returns the first key that is not a valid date key as the error.
    pub fn from_keys<S: AsRef<str>>(keys: &[S]) -> Result<Self, String> {
        keys.iter()
            .map(|k| parse_key(k.as_ref().trim()).ok_or_else(|| k.as_ref().to_string()))
            .collect::<Result<BTreeSet<_>, _>>()
            .map(|dates| Self { dates })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

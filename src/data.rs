use anyhow::Result;
use chrono::NaiveDate;
use itertools::Itertools;
use serde::Serialize;

use crate::error::StaylogError;

/// One contiguous stay in a city, as read from a source row.
///
/// `days_lived` and `year` are not part of the source data; they are filled
/// in once by [`crate::derive::augment`] before a dataset is registered and
/// are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StayRecord {
    pub city: String,
    pub country: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days_lived: i64,
    pub year: i32,
}

/// Ordered collection of stays sharing one source identity.
///
/// Records keep their source order. Filtering and aggregation build new
/// datasets; nothing mutates a registered one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dataset {
    records: Vec<StayRecord>,
}

impl Dataset {
    pub fn new(records: Vec<StayRecord>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[StayRecord] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [StayRecord] {
        &mut self.records
    }

    /// Distinct city values in first-seen order.
    pub fn distinct_cities(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|record| record.city.as_str())
            .unique()
            .collect()
    }

    /// Distinct country values in first-seen order.
    pub fn distinct_countries(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|record| record.country.as_str())
            .unique()
            .collect()
    }

    /// Sum of `days_lived` over every record.
    pub fn total_days(&self) -> i64 {
        self.records.iter().map(|record| record.days_lived).sum()
    }
}

/// Parses a date in the day-first textual encodings the logs use, with ISO
/// dates accepted as well.
pub fn parse_day_first_date(value: &str) -> Result<NaiveDate> {
    const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d"];
    let trimmed = value.trim();
    for fmt in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Ok(parsed);
        }
    }
    Err(StaylogError::BadDate {
        value: value.to_string(),
    }
    .into())
}

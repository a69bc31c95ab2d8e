//! The four public summary shapes assembled from filtered and aggregated
//! records.
//!
//! Every builder is total: empty inputs produce zero counts and absent
//! dates, never an error. Each summary echoes the caller's query value, not
//! the candidate a fuzzy lookup resolved to.

use chrono::NaiveDate;
use itertools::Itertools;
use serde::Serialize;

use crate::{data::Dataset, filter};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicStats {
    pub total_days_lived: i64,
    pub average_days_per_location: f64,
    pub number_of_locations: usize,
    pub years_covered: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationSummary {
    pub city: String,
    pub total_days_lived: i64,
    pub first_stay: Option<NaiveDate>,
    pub last_stay: Option<NaiveDate>,
    pub number_of_stays: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountrySummary {
    pub country: String,
    pub total_days_lived: i64,
    pub cities: Vec<String>,
    pub number_of_cities: usize,
    pub first_stay: Option<NaiveDate>,
    pub last_stay: Option<NaiveDate>,
    pub number_of_stays: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearSummary {
    pub year: i32,
    pub number_of_countries: usize,
    pub number_of_locations: usize,
    pub number_of_stays: usize,
}

pub fn basic_stats(dataset: &Dataset) -> BasicStats {
    let total = dataset.total_days();
    let average = if dataset.is_empty() {
        0.0
    } else {
        total as f64 / dataset.len() as f64
    };
    BasicStats {
        total_days_lived: total,
        average_days_per_location: average,
        number_of_locations: dataset.distinct_cities().len(),
        years_covered: dataset
            .records()
            .iter()
            .map(|record| record.year)
            .unique()
            .count(),
    }
}

pub fn location_summary(dataset: &Dataset, city: &str, exact_match: bool) -> LocationSummary {
    let matched = filter::by_city(dataset, city, exact_match);
    LocationSummary {
        city: city.to_string(),
        total_days_lived: matched.total_days(),
        first_stay: matched.records().iter().map(|r| r.start_date).min(),
        last_stay: matched.records().iter().map(|r| r.end_date).max(),
        number_of_stays: matched.len(),
    }
}

pub fn country_summary(dataset: &Dataset, country: &str, exact_match: bool) -> CountrySummary {
    let matched = filter::by_country(dataset, country, exact_match);
    let cities: Vec<String> = matched
        .distinct_cities()
        .into_iter()
        .map(str::to_string)
        .collect();
    CountrySummary {
        country: country.to_string(),
        total_days_lived: matched.total_days(),
        number_of_cities: cities.len(),
        cities,
        first_stay: matched.records().iter().map(|r| r.start_date).min(),
        last_stay: matched.records().iter().map(|r| r.end_date).max(),
        number_of_stays: matched.len(),
    }
}

pub fn year_summary(dataset: &Dataset, year: i32) -> YearSummary {
    let matched = filter::by_year(dataset, year);
    YearSummary {
        year,
        number_of_countries: matched.distinct_countries().len(),
        number_of_locations: matched.distinct_cities().len(),
        number_of_stays: matched.len(),
    }
}

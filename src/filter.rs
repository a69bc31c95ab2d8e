//! Record selection by city, country, or year.
//!
//! All operations are pure: they read one dataset and build another. The
//! fuzzy paths recover from a failed lookup by returning an empty dataset
//! with a logged warning, never an error.

use itertools::Itertools;
use log::{info, warn};

use crate::{
    data::{Dataset, StayRecord},
    matcher::{self, DEFAULT_CUTOFF},
};

/// Keeps the records whose city matches `city`.
///
/// With `exact_match`, equality is case-insensitive. Otherwise the query is
/// resolved against the dataset's distinct city values through the
/// approximate matcher first.
pub fn by_city(dataset: &Dataset, city: &str, exact_match: bool) -> Dataset {
    by_name(dataset, city, exact_match, "city", |record| {
        record.city.as_str()
    })
}

/// Keeps the records whose country matches `country`. Same rules as
/// [`by_city`].
pub fn by_country(dataset: &Dataset, country: &str, exact_match: bool) -> Dataset {
    by_name(dataset, country, exact_match, "country", |record| {
        record.country.as_str()
    })
}

/// Keeps the records whose stay started in `year`. Years are discrete, so
/// there is no fuzzy variant.
pub fn by_year(dataset: &Dataset, year: i32) -> Dataset {
    Dataset::new(
        dataset
            .records()
            .iter()
            .filter(|record| record.year == year)
            .cloned()
            .collect(),
    )
}

fn by_name<F>(dataset: &Dataset, query: &str, exact_match: bool, field: &str, value: F) -> Dataset
where
    F: Fn(&StayRecord) -> &str,
{
    if dataset.is_empty() {
        return Dataset::default();
    }

    let target = if exact_match {
        query.to_string()
    } else {
        let candidates: Vec<&str> = dataset
            .records()
            .iter()
            .map(|record| value(record))
            .unique()
            .collect();
        match matcher::best_match(query, &candidates, DEFAULT_CUTOFF) {
            Some(matched) => {
                info!("Using closest match for {field}: {matched}");
                matched.to_string()
            }
            None => {
                warn!("No close match found for {field} '{query}'");
                return Dataset::default();
            }
        }
    };

    let target = target.to_lowercase();
    Dataset::new(
        dataset
            .records()
            .iter()
            .filter(|record| value(record).to_lowercase() == target)
            .cloned()
            .collect(),
    )
}

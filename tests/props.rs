use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use staylog::aggregate::{self, Dimension};
use staylog::data::{Dataset, StayRecord};
use staylog::derive;
use staylog::filter;

const CITIES: [(&str, &str); 5] = [
    ("Paris", "France"),
    ("Luzern", "Switzerland"),
    ("Valencia", "Spain"),
    ("Castello", "Spain"),
    ("Lisboa", "Portugal"),
];

fn build_dataset(stays: &[(usize, u64, u64)]) -> Dataset {
    let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let mut dataset = Dataset::new(
        stays
            .iter()
            .map(|&(place, start_offset, duration)| {
                let (city, country) = CITIES[place % CITIES.len()];
                let start = base.checked_add_days(Days::new(start_offset)).unwrap();
                let end = start.checked_add_days(Days::new(duration)).unwrap();
                StayRecord {
                    city: city.to_string(),
                    country: country.to_string(),
                    start_date: start,
                    end_date: end,
                    days_lived: 0,
                    year: 0,
                }
            })
            .collect(),
    );
    derive::augment(&mut dataset);
    dataset
}

proptest! {
    // Aggregation preserves total mass: summing the group totals equals
    // summing days_lived over the whole dataset.
    #[test]
    fn group_sum_preserves_total_mass(
        stays in prop::collection::vec((0usize..5, 0u64..2000, 0u64..400), 0..40)
    ) {
        let dataset = build_dataset(&stays);
        for dimension in [Dimension::City, Dimension::Country] {
            let grouped: i64 = aggregate::group_sum(&dataset, dimension)
                .iter()
                .map(|(_, days)| days)
                .sum();
            prop_assert_eq!(grouped, dataset.total_days());
        }
    }

    // Filtering by every distinct year partitions the dataset.
    #[test]
    fn year_filters_partition_the_dataset(
        stays in prop::collection::vec((0usize..5, 0u64..2000, 0u64..400), 0..40)
    ) {
        let dataset = build_dataset(&stays);
        let years: Vec<i32> = {
            let mut seen: Vec<i32> = dataset.records().iter().map(|r| r.year).collect();
            seen.sort_unstable();
            seen.dedup();
            seen
        };
        let partitioned: usize = years
            .iter()
            .map(|&year| filter::by_year(&dataset, year).len())
            .sum();
        prop_assert_eq!(partitioned, dataset.len());
    }

    // Exact name filtering ignores the casing of the query.
    #[test]
    fn exact_match_ignores_query_case(
        stays in prop::collection::vec((0usize..5, 0u64..2000, 0u64..400), 1..40),
        place in 0usize..5,
    ) {
        let dataset = build_dataset(&stays);
        let (city, _) = CITIES[place];
        let lower = filter::by_city(&dataset, &city.to_lowercase(), true);
        let upper = filter::by_city(&dataset, &city.to_uppercase(), true);
        prop_assert_eq!(lower, upper);
    }
}

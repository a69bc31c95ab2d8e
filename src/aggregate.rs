//! Grouped day totals over a chosen dimension.

use std::collections::BTreeMap;

use crate::data::{Dataset, StayRecord};

/// Field used to group records before summing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    City,
    Country,
}

impl Dimension {
    pub fn value<'a>(&self, record: &'a StayRecord) -> &'a str {
        match self {
            Dimension::City => &record.city,
            Dimension::Country => &record.country,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::City => "city",
            Dimension::Country => "country",
        }
    }
}

/// Sums `days_lived` per distinct dimension value, case-sensitive as stored.
///
/// Groups come back in ascending key order, which keeps the result
/// deterministic for identical input. An empty dataset yields an empty vec.
pub fn group_sum(dataset: &Dataset, dimension: Dimension) -> Vec<(String, i64)> {
    let mut totals: BTreeMap<&str, i64> = BTreeMap::new();
    for record in dataset.records() {
        *totals.entry(dimension.value(record)).or_insert(0) += record.days_lived;
    }
    totals
        .into_iter()
        .map(|(value, days)| (value.to_string(), days))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::data::StayRecord;

    fn record(city: &str, country: &str, days_lived: i64) -> StayRecord {
        StayRecord {
            city: city.to_string(),
            country: country.to_string(),
            start_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            days_lived,
            year: 2022,
        }
    }

    #[test]
    fn group_sum_orders_groups_by_key() {
        let dataset = Dataset::new(vec![
            record("Valencia", "Spain", 45),
            record("Paris", "France", 9),
            record("Paris", "France", 15),
        ]);
        assert_eq!(
            group_sum(&dataset, Dimension::City),
            vec![
                ("Paris".to_string(), 24),
                ("Valencia".to_string(), 45),
            ]
        );
        assert_eq!(
            group_sum(&dataset, Dimension::Country),
            vec![
                ("France".to_string(), 24),
                ("Spain".to_string(), 45),
            ]
        );
    }

    #[test]
    fn group_sum_is_case_sensitive_over_stored_values() {
        let dataset = Dataset::new(vec![
            record("paris", "France", 1),
            record("Paris", "France", 2),
        ]);
        let groups = group_sum(&dataset, Dimension::City);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn group_sum_of_empty_dataset_is_empty() {
        assert!(group_sum(&Dataset::default(), Dimension::Country).is_empty());
    }
}

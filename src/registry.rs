//! Named dataset storage and the public query surface.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Result, ensure};
use encoding_rs::{Encoding, UTF_8};

use crate::{
    aggregate::{self, Dimension},
    data::Dataset,
    derive,
    error::StaylogError,
    loader,
    summary::{self, BasicStats, CountrySummary, LocationSummary, YearSummary},
};

/// Read-only registry of datasets keyed by source file stem.
///
/// Built once from a fixed list of sources; the first-inserted key answers
/// key-less queries. A source whose stem repeats an earlier one overwrites
/// the earlier records and keeps the original position.
#[derive(Debug)]
pub struct StayRegistry {
    keys: Vec<String>,
    datasets: HashMap<String, Dataset>,
}

impl StayRegistry {
    pub fn from_paths(paths: &[PathBuf]) -> Result<Self> {
        Self::from_paths_with_encoding(paths, UTF_8)
    }

    pub fn from_paths_with_encoding(
        paths: &[PathBuf],
        encoding: &'static Encoding,
    ) -> Result<Self> {
        ensure!(
            !paths.is_empty(),
            "At least one source is required to build a registry"
        );
        let mut keys = Vec::new();
        let mut datasets = HashMap::new();
        for (key, mut dataset) in loader::load_sources(paths, encoding)? {
            derive::augment(&mut dataset);
            if datasets.insert(key.clone(), dataset).is_none() {
                keys.push(key);
            }
        }
        Ok(Self { keys, datasets })
    }

    /// Dataset keys in insertion order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Resolves a query target: the exact key when given, the first-inserted
    /// dataset otherwise.
    pub fn dataset(&self, key: Option<&str>) -> Result<&Dataset> {
        let key = match key {
            Some(explicit) => explicit,
            None => self
                .keys
                .first()
                .map(String::as_str)
                .expect("registry always holds at least one dataset"),
        };
        let dataset = self
            .datasets
            .get(key)
            .ok_or_else(|| StaylogError::UnknownKey(key.to_string()))?;
        Ok(dataset)
    }

    pub fn basic_stats(&self, key: Option<&str>) -> Result<BasicStats> {
        Ok(summary::basic_stats(self.dataset(key)?))
    }

    pub fn location_summary(
        &self,
        city: &str,
        exact_match: bool,
        key: Option<&str>,
    ) -> Result<LocationSummary> {
        Ok(summary::location_summary(
            self.dataset(key)?,
            city,
            exact_match,
        ))
    }

    pub fn country_summary(
        &self,
        country: &str,
        exact_match: bool,
        key: Option<&str>,
    ) -> Result<CountrySummary> {
        Ok(summary::country_summary(
            self.dataset(key)?,
            country,
            exact_match,
        ))
    }

    pub fn year_summary(&self, year: i32, key: Option<&str>) -> Result<YearSummary> {
        Ok(summary::year_summary(self.dataset(key)?, year))
    }

    /// Raw aggregation table for external chart-rendering consumers.
    pub fn group_sum(&self, dimension: Dimension, key: Option<&str>) -> Result<Vec<(String, i64)>> {
        Ok(aggregate::group_sum(self.dataset(key)?, dimension))
    }
}

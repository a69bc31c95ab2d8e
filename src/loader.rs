//! Loading of stay logs from tabular sources.
//!
//! Each source is keyed by its file stem. CSV and TSV files are parsed
//! against the four required columns; any other extension is recovered by
//! keeping the key with zero records, so positional correspondence with the
//! input list is preserved. Unparseable content in a supported source is a
//! hard error for the whole load.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use encoding_rs::Encoding;
use log::warn;

use crate::{
    data::{Dataset, StayRecord, parse_day_first_date},
    error::StaylogError,
    io_utils,
};

pub const REQUIRED_COLUMNS: [&str; 4] = ["city", "country", "start_date", "end_date"];

/// Registry key for a source: its file stem, falling back to the full file
/// name for stem-less paths.
pub fn dataset_key(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn is_tabular(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("csv") || ext.eq_ignore_ascii_case("tsv")
    )
}

/// Loads every source into a keyed dataset, preserving input order.
pub fn load_sources(
    paths: &[PathBuf],
    encoding: &'static Encoding,
) -> Result<Vec<(String, Dataset)>> {
    paths
        .iter()
        .map(|path| Ok((dataset_key(path), load_source(path, encoding)?)))
        .collect()
}

fn load_source(path: &Path, encoding: &'static Encoding) -> Result<Dataset> {
    if !is_tabular(path) {
        warn!("Source {path:?} is not a CSV or TSV file; registering it empty");
        return Ok(Dataset::default());
    }

    let delimiter = io_utils::resolve_input_delimiter(path);
    let mut reader = io_utils::open_csv_reader_from_path(path, delimiter)?;
    let headers = io_utils::reader_headers(&mut reader, encoding)
        .with_context(|| format!("Reading headers from {path:?}"))?;
    let columns = locate_columns(path, &headers)?;

    let mut records = Vec::new();
    for (row_idx, record) in reader.byte_records().enumerate() {
        let record = record.with_context(|| format!("Reading row {} in {path:?}", row_idx + 2))?;
        let decoded = io_utils::decode_record(&record, encoding)?;
        records.push(
            parse_row(&decoded, &columns)
                .with_context(|| format!("Parsing row {} in {path:?}", row_idx + 2))?,
        );
    }
    Ok(Dataset::new(records))
}

struct ColumnPositions {
    city: usize,
    country: usize,
    start_date: usize,
    end_date: usize,
}

fn locate_columns(path: &Path, headers: &[String]) -> Result<ColumnPositions> {
    let find = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                StaylogError::MissingColumn {
                    path: path.to_path_buf(),
                    column: name.to_string(),
                }
                .into()
            })
    };
    Ok(ColumnPositions {
        city: find(REQUIRED_COLUMNS[0])?,
        country: find(REQUIRED_COLUMNS[1])?,
        start_date: find(REQUIRED_COLUMNS[2])?,
        end_date: find(REQUIRED_COLUMNS[3])?,
    })
}

fn parse_row(fields: &[String], columns: &ColumnPositions) -> Result<StayRecord> {
    let field = |idx: usize| fields.get(idx).map(|value| value.trim()).unwrap_or("");
    let start_date = parse_day_first_date(field(columns.start_date))?;
    let end_date = parse_day_first_date(field(columns.end_date))?;
    // Derived fields are filled in by derive::augment before registration.
    Ok(StayRecord {
        city: field(columns.city).to_string(),
        country: field(columns.country).to_string(),
        start_date,
        end_date,
        days_lived: 0,
        year: 0,
    })
}

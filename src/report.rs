//! Rendering of query results for the command line: fixed-width tables by
//! default, JSON on request. No query logic lives here.

use anyhow::Result;
use chrono::NaiveDate;
use log::info;
use serde::Serialize;

use crate::{
    aggregate::Dimension,
    cli::{
        CountryArgs, GroupArgs, GroupBy, LocationArgs, OutputFormat, RecordsArgs, StatsArgs,
        YearArgs,
    },
    registry::StayRegistry,
    table,
};

pub fn stats(registry: &StayRegistry, args: &StatsArgs) -> Result<()> {
    let stats = registry.basic_stats(args.source.key.as_deref())?;
    match args.source.format {
        OutputFormat::Json => print_json(&stats),
        OutputFormat::Table => {
            let rows = vec![
                field_row("total_days_lived", stats.total_days_lived.to_string()),
                field_row(
                    "average_days_per_location",
                    format_days(stats.average_days_per_location),
                ),
                field_row(
                    "number_of_locations",
                    stats.number_of_locations.to_string(),
                ),
                field_row("years_covered", stats.years_covered.to_string()),
            ];
            table::print_table(&field_headers(), &rows);
            Ok(())
        }
    }
}

pub fn location(registry: &StayRegistry, args: &LocationArgs) -> Result<()> {
    let summary =
        registry.location_summary(&args.city, !args.fuzzy, args.source.key.as_deref())?;
    match args.source.format {
        OutputFormat::Json => print_json(&summary),
        OutputFormat::Table => {
            let rows = vec![
                field_row("city", summary.city.clone()),
                field_row("total_days_lived", summary.total_days_lived.to_string()),
                field_row("first_stay", format_date(summary.first_stay)),
                field_row("last_stay", format_date(summary.last_stay)),
                field_row("number_of_stays", summary.number_of_stays.to_string()),
            ];
            table::print_table(&field_headers(), &rows);
            Ok(())
        }
    }
}

pub fn country(registry: &StayRegistry, args: &CountryArgs) -> Result<()> {
    let summary =
        registry.country_summary(&args.country, !args.fuzzy, args.source.key.as_deref())?;
    match args.source.format {
        OutputFormat::Json => print_json(&summary),
        OutputFormat::Table => {
            let rows = vec![
                field_row("country", summary.country.clone()),
                field_row("total_days_lived", summary.total_days_lived.to_string()),
                field_row("cities", summary.cities.join(", ")),
                field_row("number_of_cities", summary.number_of_cities.to_string()),
                field_row("first_stay", format_date(summary.first_stay)),
                field_row("last_stay", format_date(summary.last_stay)),
                field_row("number_of_stays", summary.number_of_stays.to_string()),
            ];
            table::print_table(&field_headers(), &rows);
            Ok(())
        }
    }
}

pub fn year(registry: &StayRegistry, args: &YearArgs) -> Result<()> {
    let summary = registry.year_summary(args.year, args.source.key.as_deref())?;
    match args.source.format {
        OutputFormat::Json => print_json(&summary),
        OutputFormat::Table => {
            let rows = vec![
                field_row("year", summary.year.to_string()),
                field_row("number_of_countries", summary.number_of_countries.to_string()),
                field_row("number_of_locations", summary.number_of_locations.to_string()),
                field_row("number_of_stays", summary.number_of_stays.to_string()),
            ];
            table::print_table(&field_headers(), &rows);
            Ok(())
        }
    }
}

pub fn group(registry: &StayRegistry, args: &GroupArgs) -> Result<()> {
    let dimension = dimension_for(args.by);
    let groups = registry.group_sum(dimension, args.source.key.as_deref())?;
    match args.source.format {
        OutputFormat::Json => print_json(&groups)?,
        OutputFormat::Table => {
            let headers = vec![
                dimension.label().to_string(),
                "total_days_lived".to_string(),
            ];
            let rows = groups
                .iter()
                .map(|(value, days)| vec![value.clone(), days.to_string()])
                .collect::<Vec<_>>();
            table::print_table(&headers, &rows);
        }
    }
    info!(
        "Computed day totals for {} {} group(s)",
        groups.len(),
        dimension.label()
    );
    Ok(())
}

pub fn records(registry: &StayRegistry, args: &RecordsArgs) -> Result<()> {
    let dataset = registry.dataset(args.source.key.as_deref())?;
    match args.source.format {
        OutputFormat::Json => print_json(dataset),
        OutputFormat::Table => {
            let headers = ["city", "country", "start_date", "end_date", "days_lived", "year"]
                .iter()
                .map(|h| h.to_string())
                .collect::<Vec<_>>();
            let rows = dataset
                .records()
                .iter()
                .map(|record| {
                    vec![
                        record.city.clone(),
                        record.country.clone(),
                        format_date(Some(record.start_date)),
                        format_date(Some(record.end_date)),
                        record.days_lived.to_string(),
                        record.year.to_string(),
                    ]
                })
                .collect::<Vec<_>>();
            table::print_table(&headers, &rows);
            Ok(())
        }
    }
}

fn dimension_for(by: GroupBy) -> Dimension {
    match by {
        GroupBy::City => Dimension::City,
        GroupBy::Country => Dimension::Country,
    }
}

fn field_headers() -> Vec<String> {
    vec!["field".to_string(), "value".to_string()]
}

fn field_row(name: &str, value: String) -> Vec<String> {
    vec![name.to_string(), value]
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn format_days(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

fn format_date(value: Option<NaiveDate>) -> String {
    value
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

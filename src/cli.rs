use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about = "Query personal travel and residency logs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print overall totals, averages, and coverage for a dataset
    Stats(StatsArgs),
    /// Summarize the stays in one city
    Location(LocationArgs),
    /// Summarize the stays in one country
    Country(CountryArgs),
    /// Summarize the activity within one calendar year
    Year(YearArgs),
    /// Print total days lived grouped by city or country
    Group(GroupArgs),
    /// Print the normalized records of a dataset
    Records(RecordsArgs),
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Input log file(s); each file's stem becomes its dataset key
    #[arg(short = 'i', long = "input", required = true, action = clap::ArgAction::Append)]
    pub inputs: Vec<PathBuf>,
    /// Dataset key to query (defaults to the first input)
    #[arg(short, long)]
    pub key: Option<String>,
    /// Character encoding of the input files (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupBy {
    City,
    Country,
}

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Args)]
pub struct LocationArgs {
    /// City name to look up
    pub city: String,
    /// Resolve the name approximately instead of by case-insensitive equality
    #[arg(long)]
    pub fuzzy: bool,
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Args)]
pub struct CountryArgs {
    /// Country name to look up
    pub country: String,
    /// Resolve the name approximately instead of by case-insensitive equality
    #[arg(long)]
    pub fuzzy: bool,
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Args)]
pub struct YearArgs {
    /// Calendar year to summarize
    pub year: i32,
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Args)]
pub struct GroupArgs {
    /// Dimension to group by
    #[arg(long = "by", value_enum)]
    pub by: GroupBy,
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Args)]
pub struct RecordsArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

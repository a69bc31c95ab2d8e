pub mod aggregate;
pub mod cli;
pub mod data;
pub mod derive;
pub mod error;
pub mod filter;
pub mod io_utils;
pub mod loader;
pub mod matcher;
pub mod registry;
pub mod report;
pub mod summary;
pub mod table;

use std::{env, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use crate::{
    cli::{Cli, Commands, SourceArgs},
    registry::StayRegistry,
};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("staylog", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Stats(args) => report::stats(&build_registry(&args.source)?, &args),
        Commands::Location(args) => report::location(&build_registry(&args.source)?, &args),
        Commands::Country(args) => report::country(&build_registry(&args.source)?, &args),
        Commands::Year(args) => report::year(&build_registry(&args.source)?, &args),
        Commands::Group(args) => report::group(&build_registry(&args.source)?, &args),
        Commands::Records(args) => report::records(&build_registry(&args.source)?, &args),
    }
}

fn build_registry(source: &SourceArgs) -> Result<StayRegistry> {
    let encoding = io_utils::resolve_encoding(source.input_encoding.as_deref())?;
    StayRegistry::from_paths_with_encoding(&source.inputs, encoding)
}

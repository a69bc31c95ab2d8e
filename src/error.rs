use std::path::PathBuf;

use thiserror::Error;

/// Hard-failure taxonomy for staylog.
///
/// These are the conditions that abort a load or query. Recovered-and-logged
/// conditions (unsupported source type, no fuzzy match above cutoff) are not
/// represented here — they surface as warnings and empty results. Typed
/// variants stay downcastable through `anyhow` for tests.
#[derive(Error, Debug)]
pub enum StaylogError {
    /// A required column is absent from a source's header row.
    #[error("missing required column `{column}` in {}", path.display())]
    MissingColumn { path: PathBuf, column: String },

    /// A date value could not be parsed in any supported format.
    #[error("could not parse date `{value}`")]
    BadDate { value: String },

    /// A query referenced a dataset key that is not registered.
    #[error("no dataset registered under key '{0}'")]
    UnknownKey(String),
}

//! Error types for `nifgen`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced by the `nifgen` pipeline.
///
/// Non-matching source lines and unresolved declaration markers are not
/// errors; they are skipped during extraction.
#[derive(Debug, Error)]
pub enum NifgenError {
    /// An input could not be read or the output could not be written.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path that failed.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// The layered configuration could not be extracted.
    #[error("failed to load configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// The configured column budget is larger than renderers accept.
    #[error("column {column} exceeds the maximum of {max}")]
    ColumnOutOfRange {
        /// Column as configured.
        column: usize,
        /// Largest accepted column.
        max: usize,
    },

    /// A configured marker token produced an unusable pattern.
    #[error("marker token '{token}' does not form a valid pattern: {source}")]
    InvalidMarker {
        /// Token as configured.
        token: String,
        /// Regex compilation failure.
        #[source]
        source: regex::Error,
    },

    /// The stub generator was given an empty module name.
    #[error("module name '{0}' is empty or has an empty leading segment")]
    InvalidModuleName(String),
}

impl From<figment::Error> for NifgenError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

/// Convenience alias for results produced by `nifgen`.
pub type Result<T, E = NifgenError> = std::result::Result<T, E>;

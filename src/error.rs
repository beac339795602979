//! Error type for the caller-facing surfaces of the crate.
//!
//! Parsing itself never fails: a file that cannot be interpreted yields
//! `None` from the dispatcher. [`Error`] only covers configuration, library
//! type names and worker-pool setup.

/// Errors raised outside the parsing hot path.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration document could not be deserialized.
    #[error("config error: {0}")]
    Config(String),

    /// A library type name did not match any known [`crate::LibraryType`].
    #[error("unknown library type: {0}")]
    UnknownLibraryType(String),

    /// Reading a configuration file failed.
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// The worker pool for parallel dispatch could not be built.
    #[error("worker pool error: {0}")]
    WorkerPool(String),
}

pub type Result<T> = std::result::Result<T, Error>;

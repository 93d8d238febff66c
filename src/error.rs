use thiserror::Error;

pub use color_eyre::eyre::{Report, eyre};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Binding error at parameter {index}: {message}")]
    BindingError { index: usize, message: String },

    #[error("Execution error: {0}")]
    ExecutionError(Report),

    #[error("Insert produced no generated key")]
    GeneratedKeyUnavailable,

    #[error("Stream read error: {0}")]
    StreamReadError(#[from] std::io::Error),

    #[error("Bad config error: {0}")]
    BadConfigError(String),

    #[error("Bad usage error: {0}")]
    BadUsageError(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}

impl Error {
    /// Wrap an opaque driver failure
    pub fn execution<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::ExecutionError(Report::new(err))
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::execution(err)
    }
}

impl From<std::convert::Infallible> for Error {
    fn from(err: std::convert::Infallible) -> Self {
        match err {}
    }
}

pub type Result<T> = std::result::Result<T, Error>;

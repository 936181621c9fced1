use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Chartmetric request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Invalid Chartmetric URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Storage error at {path:?}: {source}")]
    StorageError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

use crate::FetchError;

use std::convert::Infallible;
use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] acc_config::ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    Core(#[from] acc_core::CoreError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to write report: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// Create a logger error
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        AppError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<Infallible> for AppError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

pub type Result<T> = StdResult<T, AppError>;

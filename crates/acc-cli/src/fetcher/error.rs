use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors that can occur while fetching the limit table
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status} {location}")]
    Status {
        url: String,
        status: u16,
        location: ErrorLocation,
    },

    #[error("No <table> found at {url} {location}")]
    NoTable { url: String, location: ErrorLocation },

    #[error("HTML selector error: {message} {location}")]
    Selector {
        message: String,
        location: ErrorLocation,
    },
}

impl FetchError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        FetchError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Non-success response
    #[track_caller]
    pub fn status(url: &str, status: u16) -> Self {
        FetchError::Status {
            url: url.to_string(),
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Page parsed but held no table
    #[track_caller]
    pub fn no_table(url: &str) -> Self {
        FetchError::NoTable {
            url: url.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn selector<S: Into<String>>(message: S) -> Self {
        FetchError::Selector {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        FetchError::from_reqwest(err)
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;

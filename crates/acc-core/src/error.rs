use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown instance class: {instance_class} {location}")]
    UnknownInstanceClass {
        instance_class: String,
        location: ErrorLocation,
    },

    #[error("Row {row} has no column {column} {location}")]
    MissingColumn {
        row: usize,
        column: usize,
        location: ErrorLocation,
    },

    #[error("Row {row} has a non-integer connection limit: {value} {location}")]
    NonIntegerLimit {
        row: usize,
        value: String,
        location: ErrorLocation,
    },

    #[error("Overflow computing {what} {location}")]
    Overflow {
        what: &'static str,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Lookup miss in the limit mapping
    #[track_caller]
    pub fn unknown_instance_class<S: Into<String>>(instance_class: S) -> Self {
        CoreError::UnknownInstanceClass {
            instance_class: instance_class.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_column(row: usize, column: usize) -> Self {
        CoreError::MissingColumn {
            row,
            column,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn non_integer_limit<S: Into<String>>(row: usize, value: S) -> Self {
        CoreError::NonIntegerLimit {
            row,
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn overflow(what: &'static str) -> Self {
        CoreError::Overflow {
            what,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;

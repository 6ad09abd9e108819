//! acc-cli library
//!
//! Exposes the argument reader, the HTTP limit table source and the run
//! pipeline so integration tests can drive them without the binary.

pub(crate) mod cli;
pub(crate) mod error;
pub(crate) mod fetcher;
pub(crate) mod logger;
pub(crate) mod pipeline;


pub use cli::{ARG_NAMES, ArgsError, Cli};
pub use error::{AppError, Result as AppResult};
pub use fetcher::{FetchError, FetchErrorResult, HttpLimitSource, first_table};
pub use pipeline::{check, run};

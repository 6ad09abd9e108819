use acc_core::UserArgs;

use std::ffi::OsString;

use clap::Parser;
use clap::error::ErrorKind;
use thiserror::Error;

/// Positional argument names, in the order they are read.
pub const ARG_NAMES: [&str; 4] = [
    "db_instance_class",
    "database_instance_count",
    "pod_count",
    "app_connection_pool_max_size",
];

#[derive(Parser, Debug)]
#[command(name = "acc")]
#[command(about = "Check application connection pools against Aurora MySQL connection limits")]
#[command(version)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Aurora instance class, e.g. db.r5.large
    pub db_instance_class: String,

    /// Number of database instances of that class
    pub database_instance_count: i64,

    /// Number of application pods
    pub pod_count: i64,

    /// Maximum connection pool size of each pod
    pub app_connection_pool_max_size: i64,

    /// Page to read the connection limit table from (overrides config)
    #[arg(long)]
    pub url: Option<String>,

    /// Log level (overrides config)
    #[arg(
        long,
        ignore_case = true,
        value_parser = ["off", "error", "warn", "info", "debug", "trace"]
    )]
    pub log_level: Option<String>,

    /// Values after the four positionals are accepted and ignored
    #[arg(hide = true)]
    pub extra: Vec<String>,
}

/// Why the argument list could not become a [`Cli`].
#[derive(Error, Debug)]
pub enum ArgsError {
    /// One or more positional arguments were not supplied
    #[error("Usage: '{program} {}'", ARG_NAMES.join(" "))]
    Usage { program: String },

    /// An argument was present but could not be parsed
    #[error("{0}")]
    Invalid(clap::Error),

    /// `--help` or `--version`
    #[error("{0}")]
    Informational(clap::Error),
}

impl Cli {
    /// Parse a full argument list, program name first.
    pub fn read<I, T>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let program = args
            .first()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("acc"));

        Cli::try_parse_from(args).map_err(|e| match e.kind() {
            ErrorKind::MissingRequiredArgument => ArgsError::Usage { program },
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ArgsError::Informational(e),
            _ => ArgsError::Invalid(e),
        })
    }

    pub fn user_args(&self) -> UserArgs {
        UserArgs::new(
            self.db_instance_class.clone(),
            self.database_instance_count,
            self.pod_count,
            self.app_connection_pool_max_size,
        )
    }
}

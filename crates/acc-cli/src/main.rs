//! acc - Aurora MySQL connection calculator
//!
//! Checks whether the connection pools of a deployment fit within the
//! published `max_connections` of an Aurora MySQL instance class.
//!
//! # Examples
//!
//! ```bash
//! # Two db.r5.large instances, 10 pods with 50 connections each
//! acc db.r5.large 2 10 50
//!
//! # Read the limit table from a mirror
//! acc --url http://127.0.0.1:8080/limits.html db.r5.large 2 10 50
//! ```

use acc_cli::{ArgsError, Cli};

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::read(std::env::args_os()) {
        Ok(cli) => cli,
        Err(ArgsError::Informational(e)) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(ArgsError::Invalid(e)) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
        Err(e @ ArgsError::Usage { .. }) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match acc_cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

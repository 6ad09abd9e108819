use crate::{AppError, AppResult, Cli, HttpLimitSource, logger};

use acc_config::{Config, LogLevel};
use acc_core::{ColumnSelection, Evaluation, LimitMapping, LimitTableSource, UserArgs};

use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use log::debug;

/// Fetch the limit table from `source`, build the mapping and evaluate `args`.
pub async fn check<S>(
    args: &UserArgs,
    source: &S,
    columns: ColumnSelection,
) -> AppResult<Evaluation>
where
    S: LimitTableSource,
    AppError: From<S::Error>,
{
    debug!("Reading limit table from {}", source.describe());

    let table = source.fetch_table().await?;
    let mapping = LimitMapping::from_table(&table, columns)?;
    let evaluation = acc_core::evaluate(args, &mapping)?;

    Ok(evaluation)
}

/// Full run for the binary: config, logging, fetch, evaluate, report to stdout.
pub async fn run(cli: Cli) -> AppResult<()> {
    let mut config = Config::load()?;

    // Command line flags win over env vars and the config file
    if let Some(ref url) = cli.url {
        config.source.url = url.clone();
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = LogLevel::from_str(level).unwrap_or_default();
    }

    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();
    if !cli.extra.is_empty() {
        debug!("Ignoring extra arguments: {}", cli.extra.join(" "));
    }

    let source = HttpLimitSource::new(&config.source.url);
    let columns = ColumnSelection {
        key_column: config.source.key_column,
        value_column: config.source.value_column,
    };

    let evaluation = check(&cli.user_args(), &source, columns).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    acc_core::write_report(&mut out, &evaluation)
        .and_then(|()| out.flush())
        .map_err(|source| AppError::Output { source })
}

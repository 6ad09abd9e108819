use crate::{CoreError, CoreErrorResult, LimitMapping, UserArgs};

use std::fmt;

use log::info;

/// Whether the requested pool sizes fit the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Good,
    OverTheLimit,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Good => f.write_str("good!"),
            Verdict::OverTheLimit => f.write_str("over the limit!"),
        }
    }
}

/// Totals computed for one configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub max_app_connections: i64,
    pub max_db_connections: i64,
}

impl Evaluation {
    /// Equal demand and capacity still counts as within capacity.
    pub fn is_within_capacity(&self) -> bool {
        self.max_app_connections <= self.max_db_connections
    }

    pub fn verdict(&self) -> Verdict {
        if self.is_within_capacity() {
            Verdict::Good
        } else {
            Verdict::OverTheLimit
        }
    }
}

/// Compare application connection demand against database capacity.
///
/// Fails when the instance class is not in `limits` or a product overflows.
pub fn evaluate(args: &UserArgs, limits: &LimitMapping) -> CoreErrorResult<Evaluation> {
    let per_instance = limits.limit_for(&args.db_instance_class)?;

    let max_app_connections = args
        .pod_count
        .checked_mul(args.app_connection_pool_max_size)
        .ok_or_else(|| CoreError::overflow("max_app_connections"))?;
    let max_db_connections = per_instance
        .checked_mul(args.database_instance_count)
        .ok_or_else(|| CoreError::overflow("max_db_connections"))?;

    info!(
        "{}: {} x {} = {} db connections, {} x {} = {} app connections",
        args.db_instance_class,
        per_instance,
        args.database_instance_count,
        max_db_connections,
        args.pod_count,
        args.app_connection_pool_max_size,
        max_app_connections
    );

    Ok(Evaluation {
        max_app_connections,
        max_db_connections,
    })
}

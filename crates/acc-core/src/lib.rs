//! Core model for the Aurora connection calculator: limit tables, the
//! instance-class mapping, capacity evaluation and the printed report.

mod error;
mod evaluator;
mod limit_mapping;
mod report;
mod source;
mod table;
mod user_args;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreErrorResult};
pub use evaluator::{Evaluation, Verdict, evaluate};
pub use limit_mapping::{ColumnSelection, LimitMapping};
pub use report::{Report, write_report};
pub use source::{LimitTableSource, StaticLimitSource};
pub use table::{Cell, ConnectionLimitTable, TableRow};
pub use user_args::UserArgs;

pub const DEFAULT_KEY_COLUMN: usize = 0;
pub const DEFAULT_VALUE_COLUMN: usize = 1;

use crate::{Evaluation, Verdict};

use std::fmt;
use std::io::{self, Write};

/// Human-readable summary of an [`Evaluation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub max_app_connections: i64,
    pub max_db_connections: i64,
    pub verdict: Verdict,
}

impl From<&Evaluation> for Report {
    fn from(evaluation: &Evaluation) -> Self {
        Self {
            max_app_connections: evaluation.max_app_connections,
            max_db_connections: evaluation.max_db_connections,
            verdict: evaluation.verdict(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You have requested {} application connections on an RDS Instance configured for {} connections.\nYou are {}",
            self.max_app_connections, self.max_db_connections, self.verdict
        )
    }
}

/// Write the report for `evaluation`, newline terminated.
pub fn write_report<W: Write>(out: &mut W, evaluation: &Evaluation) -> io::Result<()> {
    writeln!(out, "{}", Report::from(evaluation))
}

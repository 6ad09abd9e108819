mod evaluator;
mod report;
mod table;

use crate::{ConnectionLimitTable, LimitMapping};

/// Mapping with a single `db.r5.large` entry at 1000 connections
pub(crate) fn r5_large_mapping() -> LimitMapping {
    LimitMapping::from_table(
        &ConnectionLimitTable::from_pairs([("db.r5.large", 1000)]),
        Default::default(),
    )
    .unwrap()
}

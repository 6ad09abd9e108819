use crate::ConnectionLimitTable;

use std::convert::Infallible;
use std::future::Future;

/// Where the connection limit table comes from.
///
/// The production source scrapes a documentation page; tests plug in a
/// fixed table through [`StaticLimitSource`].
pub trait LimitTableSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Short name used in log lines.
    fn describe(&self) -> String;

    /// Fetch the first limit table the source knows about.
    fn fetch_table(
        &self,
    ) -> impl Future<Output = Result<ConnectionLimitTable, Self::Error>> + Send;
}

/// In-memory table, returned as-is on every fetch.
#[derive(Debug, Clone, Default)]
pub struct StaticLimitSource {
    table: ConnectionLimitTable,
}

impl StaticLimitSource {
    pub fn new(table: ConnectionLimitTable) -> Self {
        Self { table }
    }
}

impl LimitTableSource for StaticLimitSource {
    type Error = Infallible;

    fn describe(&self) -> String {
        format!("static table ({} rows)", self.table.len())
    }

    async fn fetch_table(&self) -> Result<ConnectionLimitTable, Self::Error> {
        Ok(self.table.clone())
    }
}


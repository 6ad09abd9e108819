use crate::{FetchError, fetcher::html_table::first_table};

use acc_core::{ConnectionLimitTable, LimitTableSource};

use log::{debug, info};
use reqwest::Client as ReqwestClient;

/// Limit table scraped from a web page.
///
/// One GET per fetch. No retries and no timeout beyond the transport's own.
pub struct HttpLimitSource {
    pub url: String,
    client: ReqwestClient,
}

impl HttpLimitSource {
    /// Create a new source for `url`
    pub fn new(url: &str) -> Self {
        Self {
            url: url.trim().to_string(),
            client: ReqwestClient::new(),
        }
    }
}

impl LimitTableSource for HttpLimitSource {
    type Error = FetchError;

    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch_table(&self) -> Result<ConnectionLimitTable, FetchError> {
        info!("Fetching connection limits from {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(&self.url, status.as_u16()));
        }

        let body = response.text().await?;
        debug!("Received {} bytes from {}", body.len(), self.url);

        let table = first_table(&body)?.ok_or_else(|| FetchError::no_table(&self.url))?;
        info!("Extracted {} rows from the first table", table.len());

        Ok(table)
    }
}

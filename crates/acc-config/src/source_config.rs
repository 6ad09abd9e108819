use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_KEY_COLUMN, DEFAULT_LIMITS_URL, DEFAULT_VALUE_COLUMN,
};

use serde::Deserialize;
use url::Url;

/// Where the connection limit table is published and which columns hold
/// the instance class and its limit.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub url: String,
    pub key_column: usize,
    pub value_column: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_LIMITS_URL),
            key_column: DEFAULT_KEY_COLUMN,
            value_column: DEFAULT_VALUE_COLUMN,
        }
    }
}

impl SourceConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = Url::parse(self.url.trim()).map_err(|e| {
            ConfigError::source(format!("source.url '{}' is not a valid URL: {}", self.url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::source(format!(
                "source.url must be an http:// or https:// URL, got '{}'",
                self.url
            )));
        }

        if url.host_str().is_none_or(str::is_empty) {
            return Err(ConfigError::source(format!(
                "source.url has no host: '{}'",
                self.url
            )));
        }

        Ok(())
    }
}

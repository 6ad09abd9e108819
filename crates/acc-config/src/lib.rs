mod config;
mod error;
mod log_level;
mod logging_config;
mod source_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use source_config::SourceConfig;

pub const DEFAULT_LIMITS_URL: &str =
    "https://docs.aws.amazon.com/AmazonRDS/latest/AuroraUserGuide/AuroraMySQL.Managing.Performance.html";
const DEFAULT_KEY_COLUMN: usize = 0;
const DEFAULT_VALUE_COLUMN: usize = 1;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = false;
const CONFIG_DIR_ENV: &str = "ACC_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".acc";
const CONFIG_FILE_NAME: &str = "config.toml";


use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Every override variable, cleared for the lifetime of the returned guards
pub(crate) fn clear_overrides() -> Vec<EnvGuard> {
    [
        "ACC_LIMITS_URL",
        "ACC_KEY_COLUMN",
        "ACC_VALUE_COLUMN",
        "ACC_LOG_LEVEL",
        "ACC_LOG_COLORED",
        "ACC_LOG_FILE",
    ]
    .into_iter()
    .map(EnvGuard::remove)
    .collect()
}

/// Create a temp config directory and set ACC_CONFIG_DIR
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("ACC_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard, clear_overrides())
}

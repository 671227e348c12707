//! Server configuration from environment variables.

use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address to bind, e.g. `0.0.0.0:8788`.
    pub addr: String,
    /// Directory holding the category JSON files.
    pub data_dir: PathBuf,
    /// Value of `Access-Control-Allow-Origin` on every response.
    pub allowed_origin: String,
    /// Search requests allowed per client per window.
    pub search_rate_limit: u32,
    /// Filter requests allowed per client per window.
    pub filter_rate_limit: u32,
    pub rate_limit_window_secs: u64,
}

impl Config {
    pub fn load() -> Self {
        Self {
            addr: try_load("GEARMATCH_ADDR", "0.0.0.0:8788".to_string()),
            data_dir: PathBuf::from(try_load("GEARMATCH_DATA_DIR", "data/products".to_string())),
            allowed_origin: try_load("ALLOWED_ORIGIN", "*".to_string()),
            search_rate_limit: try_load("SEARCH_RATE_LIMIT", 30),
            filter_rate_limit: try_load("FILTER_RATE_LIMIT", 10),
            rate_limit_window_secs: try_load("RATE_LIMIT_WINDOW_SECS", 60),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8788".to_string(),
            data_dir: PathBuf::from("data/products"),
            allowed_origin: "*".to_string(),
            search_rate_limit: 30,
            filter_rate_limit: 10,
            rate_limit_window_secs: 60,
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Reads `key`, falling back to `default` when unset or unparseable.
fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = var(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };

    match raw.parse() {
        Ok(value) => {
            info!("{key} = {raw}");
            value
        }
        Err(e) => {
            warn!("Invalid {key} value '{raw}': {e}, using default: {default}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_load_default_when_unset() {
        let value: u32 = try_load("GEARMATCH_TEST_UNSET_LIMIT", 30);
        assert_eq!(value, 30);
    }

    #[test]
    fn test_try_load_falls_back_on_invalid() {
        env::set_var("GEARMATCH_TEST_BAD_LIMIT", "lots");
        let value: u32 = try_load("GEARMATCH_TEST_BAD_LIMIT", 10);
        assert_eq!(value, 10);
        env::remove_var("GEARMATCH_TEST_BAD_LIMIT");
    }

    #[test]
    fn test_try_load_reads_env() {
        env::set_var("GEARMATCH_TEST_WINDOW", "120");
        let value: u64 = try_load("GEARMATCH_TEST_WINDOW", 60);
        assert_eq!(value, 120);
        env::remove_var("GEARMATCH_TEST_WINDOW");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.addr, "0.0.0.0:8788");
        assert_eq!(config.search_rate_limit, 30);
        assert_eq!(config.filter_rate_limit, 10);
    }
}

use anyhow::{Context, Result};

use crate::algorithms::hash_index::DEFAULT_BUCKET_COUNT;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Fixed bucket count for the skill hash index (no rehashing).
    pub hash_bucket_count: usize,
    /// Maximum KMP traces returned by a resume search.
    pub search_trace_limit: usize,
    pub seed_demo_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            hash_bucket_count: DEFAULT_BUCKET_COUNT,
            search_trace_limit: 3,
            seed_demo_data: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let hash_bucket_count = parse_env("HASH_BUCKET_COUNT", defaults.hash_bucket_count)?;
        if hash_bucket_count == 0 {
            anyhow::bail!("HASH_BUCKET_COUNT must be greater than zero");
        }

        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            hash_bucket_count,
            search_trace_limit: parse_env("SEARCH_TRACE_LIMIT", defaults.search_trace_limit)?,
            seed_demo_data: parse_env("SEED_DEMO_DATA", defaults.seed_demo_data)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.hash_bucket_count, 10);
        assert_eq!(config.search_trace_limit, 3);
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_parse_env_missing_uses_default() {
        let value: usize = parse_env("TALENT_RANKER_TEST_UNSET_VAR", 7).unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("TALENT_RANKER_TEST_BAD_PORT", "not-a-port");
        let result: Result<u16> = parse_env("TALENT_RANKER_TEST_BAD_PORT", 8080);
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("TALENT_RANKER_TEST_BAD_PORT"), "{message}");
    }

    #[test]
    fn test_parse_env_reads_bool() {
        std::env::set_var("TALENT_RANKER_TEST_SEED", "false");
        let value: bool = parse_env("TALENT_RANKER_TEST_SEED", true).unwrap();
        assert!(!value);
    }
}

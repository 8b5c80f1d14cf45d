use std::env;
use std::str::FromStr;

use anyhow::{Context, Result, bail};

use crate::store::IdStrategy;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub id_strategy: IdStrategy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let id_strategy = lookup("ALBUM_ID_STRATEGY")
            .unwrap_or_else(|| "count".to_string())
            .parse::<IdStrategy>()
            .context("ALBUM_ID_STRATEGY must be one of: count, monotonic")?;

        Ok(Config {
            service_port,
            service_host,
            id_strategy,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Album id strategy: {}", self.id_strategy);
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}

impl FromStr for IdStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "count" => Ok(IdStrategy::CountPlusOne),
            "monotonic" => Ok(IdStrategy::Monotonic),
            other => bail!("unknown id strategy '{}'", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_with_all_vars() {
        let config = config_from(&[
            ("SERVICE_PORT", "3000"),
            ("SERVICE_HOST", "127.0.0.1"),
            ("ALBUM_ID_STRATEGY", "monotonic"),
        ])
        .unwrap();

        assert_eq!(config.service_port, 3000);
        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.id_strategy, IdStrategy::Monotonic);
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_config_with_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "0.0.0.0");
        assert_eq!(config.id_strategy, IdStrategy::CountPlusOne);
    }

    #[test]
    fn test_invalid_port() {
        let result = config_from(&[("SERVICE_PORT", "not-a-number")]);
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let result = config_from(&[("SERVICE_PORT", "99999")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_id_strategy() {
        let result = config_from(&[("ALBUM_ID_STRATEGY", "random")]);
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("ALBUM_ID_STRATEGY"));
    }

    #[test]
    fn test_id_strategy_is_case_insensitive() {
        let config = config_from(&[("ALBUM_ID_STRATEGY", " Monotonic ")]).unwrap();
        assert_eq!(config.id_strategy, IdStrategy::Monotonic);
    }
}

// src/config.rs
use std::env;

use thiserror::Error;

use crate::services::connectivity::DatabaseEnv;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),
    #[error("invalid LOG_FORMAT value: {0:?} (expected \"text\" or \"json\")")]
    InvalidLogFormat(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
    pub log_format: LogFormat,
    pub database: DatabaseEnv,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: Vec::new(),
            log_format: LogFormat::default(),
            database: DatabaseEnv::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset.
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let allowed_origins = get("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_allowed_origins(&raw))
            .unwrap_or_default();

        let log_format = match get("LOG_FORMAT") {
            None => LogFormat::Text,
            Some(raw) => {
                let normalized = raw.trim().to_ascii_lowercase();
                match normalized.as_str() {
                    "text" => LogFormat::Text,
                    "json" => LogFormat::Json,
                    _ => return Err(ConfigError::InvalidLogFormat(raw)),
                }
            }
        };

        let database = DatabaseEnv {
            url_set: get("DATABASE_URL").is_some(),
            name_set: get("DATABASE_NAME").is_some(),
        };

        Ok(Self { host, port, allowed_origins, log_format, database })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Browsers send `Origin` without a trailing slash. A `*` anywhere in the
/// list means any origin, which is the empty list.
fn parse_allowed_origins(raw: &str) -> Vec<String> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .collect();

    if origins.contains(&"*") {
        return Vec::new();
    }

    origins.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = config_from(&[]).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn reads_port_and_database_flags() {
        let cfg = config_from(&[
            ("PORT", "9090"),
            ("DATABASE_URL", "mongodb://localhost"),
            ("DATABASE_NAME", ""),
        ])
        .unwrap();
        assert_eq!(cfg.port, 9090);
        assert!(cfg.database.url_set);
        assert!(!cfg.database.name_set);
    }

    #[test]
    fn rejects_bad_port() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("eighty".to_string()));
        assert!(config_from(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn parses_origin_list() {
        let cfg = config_from(&[(
            "CORS_ALLOWED_ORIGINS",
            "https://nexrail.no, https://www.nexrail.no,,",
        )])
        .unwrap();
        assert_eq!(cfg.allowed_origins, vec!["https://nexrail.no", "https://www.nexrail.no"]);

        let cfg = config_from(&[("CORS_ALLOWED_ORIGINS", "*")]).unwrap();
        assert!(cfg.allowed_origins.is_empty());
    }

    #[test]
    fn origin_trailing_slash_is_stripped() {
        let cfg = config_from(&[(
            "CORS_ALLOWED_ORIGINS",
            "https://nexrail.no/, https://www.nexrail.no",
        )])
        .unwrap();
        assert_eq!(cfg.allowed_origins, vec!["https://nexrail.no", "https://www.nexrail.no"]);
    }

    #[test]
    fn wildcard_anywhere_allows_any_origin() {
        let cfg = config_from(&[("CORS_ALLOWED_ORIGINS", "https://a.no,*")]).unwrap();
        assert!(cfg.allowed_origins.is_empty());

        let cfg = config_from(&[("CORS_ALLOWED_ORIGINS", " * , https://a.no")]).unwrap();
        assert!(cfg.allowed_origins.is_empty());
    }

    #[test]
    fn log_format_is_validated() {
        assert_eq!(config_from(&[("LOG_FORMAT", "JSON")]).unwrap().log_format, LogFormat::Json);
        assert!(matches!(
            config_from(&[("LOG_FORMAT", "xml")]),
            Err(ConfigError::InvalidLogFormat(_))
        ));
    }
}

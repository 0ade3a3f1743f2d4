//! Configuration module for the campaign backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Longest admin session the server will issue (one year).
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Admin passphrase checked by `/auth/login` (admin routes are open when unset)
    pub admin_password: Option<String>,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Lifetime of an issued admin session, in hours
    pub session_ttl_hours: i64,
    /// Directory of the built public site, served for non-API paths
    pub static_dir: Option<PathBuf>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// A variable was set but could not be parsed.
#[derive(Debug)]
pub struct ConfigError {
    pub key: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.key, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let admin_password = lookup("CAMPAIGN_ADMIN_PASSWORD").filter(|p| !p.is_empty());

        let db_path = lookup("CAMPAIGN_DB_PATH")
            .unwrap_or_else(|| "./data/campaign.sqlite".to_string())
            .into();

        let bind_addr = lookup("CAMPAIGN_BIND_ADDR")
            .unwrap_or_else(|| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError {
                key: "CAMPAIGN_BIND_ADDR",
                message: e.to_string(),
            })?;

        let session_ttl_hours = match lookup("CAMPAIGN_SESSION_TTL_HOURS") {
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|h| (1..=MAX_SESSION_TTL_HOURS).contains(h))
                .ok_or_else(|| ConfigError {
                    key: "CAMPAIGN_SESSION_TTL_HOURS",
                    message: format!(
                        "expected between 1 and {} hours, got {:?}",
                        MAX_SESSION_TTL_HOURS, raw
                    ),
                })?,
            None => 24,
        };

        let static_dir = lookup("CAMPAIGN_STATIC_DIR")
            .filter(|d| !d.is_empty())
            .map(PathBuf::from);

        let log_level = lookup("CAMPAIGN_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            admin_password,
            db_path,
            bind_addr,
            session_ttl_hours,
            static_dir,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert!(config.admin_password.is_none());
        assert_eq!(config.db_path, PathBuf::from("./data/campaign.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.session_ttl_hours, 24);
        assert!(config.static_dir.is_none());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("CAMPAIGN_ADMIN_PASSWORD", "s3cret"),
            ("CAMPAIGN_BIND_ADDR", "0.0.0.0:9000"),
            ("CAMPAIGN_SESSION_TTL_HOURS", "2"),
            ("CAMPAIGN_STATIC_DIR", "./dist"),
        ]))
        .unwrap();

        assert_eq!(config.admin_password.as_deref(), Some("s3cret"));
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.session_ttl_hours, 2);
        assert_eq!(config.static_dir, Some(PathBuf::from("./dist")));
    }

    #[test]
    fn test_empty_password_means_unset() {
        let config = Config::from_lookup(lookup_from(&[("CAMPAIGN_ADMIN_PASSWORD", "")])).unwrap();
        assert!(config.admin_password.is_none());
    }

    #[test]
    fn test_invalid_values_are_errors() {
        let err = Config::from_lookup(lookup_from(&[("CAMPAIGN_BIND_ADDR", "nope")])).unwrap_err();
        assert_eq!(err.key, "CAMPAIGN_BIND_ADDR");

        let err =
            Config::from_lookup(lookup_from(&[("CAMPAIGN_SESSION_TTL_HOURS", "0")])).unwrap_err();
        assert_eq!(err.key, "CAMPAIGN_SESSION_TTL_HOURS");
    }

    #[test]
    fn test_session_ttl_upper_bound() {
        let config = Config::from_lookup(lookup_from(&[("CAMPAIGN_SESSION_TTL_HOURS", "8760")]))
            .unwrap();
        assert_eq!(config.session_ttl_hours, MAX_SESSION_TTL_HOURS);

        for raw in ["8761", "9000000000000"] {
            let err = Config::from_lookup(lookup_from(&[("CAMPAIGN_SESSION_TTL_HOURS", raw)]))
                .unwrap_err();
            assert_eq!(err.key, "CAMPAIGN_SESSION_TTL_HOURS");
        }
    }
}

// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection string
    /// Format: sqlite://path/to/file.db
    pub database_url: String,

    /// Server bind address (e.g., "0.0.0.0")
    pub server_address: String,

    /// Server listen port (default 3000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log filter used when RUST_LOG is not set
    pub log_level: String,

    /// Maximum connections in database pool
    pub db_max_connections: u32,

    /// Connection timeout in seconds
    pub db_connection_timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: "sqlite://gallery.db".to_string(),
            server_address: "0.0.0.0".to_string(),
            server_port: 3000,
            environment: "development".to_string(),
            log_level: "info,actix_web=info,sqlx=warn".to_string(),
            db_max_connections: 5,
            db_connection_timeout: 30,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Config {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),

            server_address: lookup("SERVER_ADDRESS").unwrap_or(defaults.server_address),

            server_port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),

            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),

            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),

            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.db_max_connections),

            db_connection_timeout: lookup("DB_CONNECTION_TIMEOUT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.db_connection_timeout),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.database_url.is_empty() {
            return Err("DATABASE_URL is required".to_string());
        }

        if self.server_port == 0 {
            return Err("PORT must be greater than zero".to_string());
        }

        if self.db_max_connections == 0 {
            return Err("DB_MAX_CONNECTIONS must be greater than zero".to_string());
        }

        Ok(())
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
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));

        assert_eq!(config.server_port, 3000);
        assert_eq!(config.database_url, "sqlite://gallery.db");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_port_override() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "8080")]));
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn test_bad_numbers_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("DB_MAX_CONNECTIONS", "many"),
        ]));

        assert_eq!(config.server_port, 3000);
        assert_eq!(config.db_max_connections, 5);
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "")]));
        assert!(config.validate().is_err());
    }
}

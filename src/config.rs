//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use crate::state::seed::CatalogSeed;
use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Seed configuration
    pub seed: SeedConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Seed configuration
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Path to the JSON seed file checked at startup
    pub activities_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            seed: SeedConfig {
                activities_file: env::var("ACTIVITIES_FILE")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| CatalogSeed::default_path()),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // Env vars are process-global, so these tests must not interleave.

    #[test]
    #[serial]
    fn test_defaults_apply_when_env_unset() {
        env::remove_var("PORT");
        env::remove_var("HOST");
        env::remove_var("ACTIVITIES_FILE");

        let config = Config::from_env();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.seed.activities_file, CatalogSeed::default_path());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        env::set_var("PORT", "3100");
        env::set_var("HOST", "127.0.0.1");
        env::set_var("ACTIVITIES_FILE", "/tmp/activities.json");

        let config = Config::from_env();
        assert_eq!(config.server.port, 3100);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server_addr(), "127.0.0.1:3100");
        assert_eq!(
            config.seed.activities_file,
            PathBuf::from("/tmp/activities.json")
        );

        env::remove_var("PORT");
        env::remove_var("HOST");
        env::remove_var("ACTIVITIES_FILE");
    }

    #[test]
    #[serial]
    fn test_invalid_port_falls_back_to_default() {
        env::set_var("PORT", "not-a-port");

        let config = Config::from_env();
        assert_eq!(config.server.port, 8080);

        env::remove_var("PORT");
    }
}

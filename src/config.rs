//! Application configuration loaded from environment variables.

use serde::Deserialize;

use crate::error::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP listening port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("PORT must be non-zero".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_vars(vars: Vec<(&str, &str)>) -> Result<Config, envy::Error> {
        envy::from_iter(
            vars.into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    #[test]
    fn default_values_are_sensible() {
        assert_eq!(default_port(), 3000);
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = from_vars(vec![]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.rust_log, "info");
        assert!(!config.verbose);
    }

    #[test]
    fn port_env_var_overrides_default() {
        let config = from_vars(vec![("PORT", "8080")]).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        assert!(from_vars(vec![("PORT", "not-a-port")]).is_err());
    }

    #[test]
    fn validate_rejects_zero_port() {
        let config = Config {
            port: 0,
            rust_log: default_log_level(),
            verbose: false,
        };

        assert!(config.validate().is_err());
    }
}

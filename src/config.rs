use std::env;

use crate::error::ConfigError;
use crate::logging::LogFormat;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for
    /// unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("EVENSPLIT_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("EVENSPLIT_PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port))?,
            None => 8080,
        };
        let log_level = lookup("EVENSPLIT_LOG_LEVEL").unwrap_or_else(|| "info".to_string());
        let log_format = match lookup("EVENSPLIT_LOG_FORMAT") {
            Some(format) => format.parse()?,
            None => LogFormat::Human,
        };

        Ok(Config {
            host,
            port,
            log_level,
            log_format,
        })
    }
}

//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables, reading a `.env` file first if one is present.

use crate::domain::PhoneRegion;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Configuration for the contact book server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to listen on (default: 127.0.0.1)
    pub bind_address: IpAddr,

    /// Port to listen on (default: 3000)
    pub port: u16,

    /// JSON file backing the contact store; contacts are kept in memory
    /// only when unset
    pub contacts_file: Option<PathBuf>,

    /// Region mobile numbers are validated against (default: id-ID)
    pub phone_region: PhoneRegion,

    /// Session lifetime in seconds (default: 6)
    pub session_ttl_seconds: u64,

    /// Log filter used when `RUST_LOG` is not set (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `BIND_ADDRESS`: IP address to listen on (default: 127.0.0.1)
    /// - `PORT`: TCP port (default: 3000)
    /// - `CONTACTS_FILE`: path of the JSON contact file (default: in-memory store)
    /// - `PHONE_REGION`: `id-ID`, `en-US`, or `en-GB` (default: id-ID)
    /// - `SESSION_TTL_SECONDS`: session cookie lifetime (default: 6)
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let bind_address = match env::var("BIND_ADDRESS") {
            Ok(val) => val.parse::<IpAddr>().map_err(|_| ConfigError::InvalidValue {
                var: "BIND_ADDRESS".to_string(),
                reason: format!("Must be an IP address, got: {}", val),
            })?,
            Err(_) => defaults.bind_address,
        };

        let port = Self::parse_env_u16("PORT", defaults.port)?;

        let contacts_file = env::var("CONTACTS_FILE")
            .ok()
            .filter(|val| !val.trim().is_empty())
            .map(PathBuf::from);

        let phone_region = match env::var("PHONE_REGION") {
            Ok(val) => val
                .parse::<PhoneRegion>()
                .map_err(|e| ConfigError::InvalidValue {
                    var: "PHONE_REGION".to_string(),
                    reason: e.to_string(),
                })?,
            Err(_) => defaults.phone_region,
        };

        let session_ttl_seconds =
            Self::parse_env_u64("SESSION_TTL_SECONDS", defaults.session_ttl_seconds)?;

        // A zero TTL would expire every notice before the redirect lands
        if session_ttl_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                var: "SESSION_TTL_SECONDS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            bind_address,
            port,
            contacts_file,
            phone_region,
            session_ttl_seconds,
            log_level,
        })
    }

    /// The socket address to listen on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            contacts_file: None,
            phone_region: PhoneRegion::Indonesia,
            session_ttl_seconds: 6,
            log_level: "info".to_string(),
        }
    }
}

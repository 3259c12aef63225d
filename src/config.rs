//! Configuration module

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::engine::DEFAULT_TOP_K;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind host
    pub host: IpAddr,

    /// Server port
    pub port: u16,

    /// Contributions returned when a request does not ask for a count
    pub default_top_k: usize,

    /// Fixed seed for the random attributor (reproducible importances)
    pub attribution_seed: Option<u64>,

    /// Environment (development, production)
    pub environment: String,

    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            default_top_k: DEFAULT_TOP_K,
            attribution_seed: None,
            environment: "development".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            host: lookup("HOST")
                .and_then(|h| h.parse().ok())
                .unwrap_or(defaults.host),

            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            default_top_k: lookup("DEFAULT_TOP_K")
                .and_then(|k| k.parse().ok())
                .unwrap_or(defaults.default_top_k),

            attribution_seed: lookup("ATTRIBUTION_SEED").and_then(|s| s.parse().ok()),

            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),

            log_format: match lookup("LOG_FORMAT").as_deref() {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

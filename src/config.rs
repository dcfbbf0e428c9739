//! Environment-driven service configuration.
//!
//! | variable           | default        | meaning                                   |
//! |--------------------|----------------|-------------------------------------------|
//! | `GRAPHDOC_ADDR`    | `0.0.0.0:8080` | listening socket address                  |
//! | `GRAPHDOC_SEED`    | `true`         | start with the three seed documents       |
//! | `GRAPHDOC_MISSING` | `null`         | `update`/`delete` miss: `null` or `zero`  |

use std::net::SocketAddr;

use thiserror::Error;

use crate::schema::MissingRecord;

pub const ADDR_VAR: &str = "GRAPHDOC_ADDR";
pub const SEED_VAR: &str = "GRAPHDOC_SEED";
pub const MISSING_VAR: &str = "GRAPHDOC_MISSING";

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: invalid socket address `{value}`: {source}")]
    Addr {
        var: &'static str,
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("{var}: expected a boolean, got `{value}`")]
    Bool { var: &'static str, value: String },
    #[error("{var}: {message}")]
    MissingPolicy { var: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub seed: bool,
    pub missing: MissingRecord,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            seed: true,
            missing: MissingRecord::default(),
        }
    }
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`; unset variables take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = value.trim().parse().map_err(|source| ConfigError::Addr {
                var: ADDR_VAR,
                value: value.clone(),
                source,
            })?;
        }

        if let Some(value) = lookup(SEED_VAR) {
            config.seed = parse_bool(&value).ok_or(ConfigError::Bool {
                var: SEED_VAR,
                value,
            })?;
        }

        if let Some(value) = lookup(MISSING_VAR) {
            config.missing = value
                .parse()
                .map_err(|message| ConfigError::MissingPolicy {
                    var: MISSING_VAR,
                    message,
                })?;
        }

        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

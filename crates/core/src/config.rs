//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! composition root. Nothing in this crate reads environment variables during
//! request handling; callers hand the raw values in.

use crate::constants::DEFAULT_REST_ADDR;
use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid listen address {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("invalid boolean for {name}: {value:?} (expected true/false/1/0)")]
    InvalidFlag { name: &'static str, value: String },
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    rest_addr: SocketAddr,
    seed_demo_data: bool,
}

impl CoreConfig {
    pub fn new(rest_addr: SocketAddr, seed_demo_data: bool) -> Self {
        Self {
            rest_addr,
            seed_demo_data,
        }
    }

    /// Build a config from optional raw values, typically taken from
    /// `MEDREC_REST_ADDR` and `MEDREC_SEED_DEMO_DATA`.
    ///
    /// Missing or blank values fall back to the defaults.
    pub fn from_env_values(
        rest_addr: Option<String>,
        seed_demo_data: Option<String>,
    ) -> Result<Self, ConfigError> {
        let rest_addr = non_blank(rest_addr).unwrap_or_else(|| DEFAULT_REST_ADDR.to_owned());
        let rest_addr = rest_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr {
                value: rest_addr.clone(),
                source,
            })?;

        let seed_demo_data = match non_blank(seed_demo_data) {
            None => false,
            Some(v) => parse_flag("MEDREC_SEED_DEMO_DATA", &v)?,
        };

        Ok(Self::new(rest_addr, seed_demo_data))
    }

    pub fn rest_addr(&self) -> SocketAddr {
        self.rest_addr
    }

    pub fn seed_demo_data(&self) -> bool {
        self.seed_demo_data
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_owned(),
        }),
    }
}

//! Host configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid STUDIO_ADDR '{0}': expected an IP address")]
    InvalidAddr(String),
    #[error("invalid PORT '{0}': expected 0-65535")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub addr: SocketAddr,
}

impl HostConfig {
    /// Build the listen address from the environment.
    ///
    /// Optional:
    /// - `STUDIO_ADDR`: bind IP, default `0.0.0.0`
    /// - `PORT`: default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("STUDIO_ADDR").ok();
        let port = std::env::var("PORT").ok();
        Self::from_parts(host.as_deref(), port.as_deref())
    }

    /// Parse raw values; `None` and blank strings take the defaults.
    pub fn from_parts(host: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let host = match non_blank(host) {
            Some(raw) => raw.parse::<IpAddr>().map_err(|_| ConfigError::InvalidAddr(raw.to_string()))?,
            None => DEFAULT_HOST,
        };
        let port = match non_blank(port) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_string()))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { addr: SocketAddr::new(host, port) })
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

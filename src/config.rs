//! Server configuration from environment variables
//!
//! - `DATA_PATH`: dataset JSON (default: data/mhgu_hitzones.json)
//! - `BIND_ADDR`: listen address (default: 0.0.0.0)
//! - `PORT`: listen port (default: 3000)
//! - `CACHE_CAPACITY` / `CACHE_TTL_SECS`: rendered-view cache (default: 10000 / 300)
//!
//! Unparsable values fall back to their defaults.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub data_path: String,
    pub bind_addr: IpAddr,
    pub port: u16,
    pub cache_capacity: u64,
    pub cache_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_path: "data/mhgu_hitzones.json".to_string(),
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            cache_capacity: 10_000,
            cache_ttl: Duration::from_secs(300),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production, a map in tests)
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            data_path: lookup("DATA_PATH")
                .filter(|p| !p.trim().is_empty())
                .unwrap_or(defaults.data_path),
            bind_addr: parse_var(&lookup, "BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: parse_var(&lookup, "PORT").unwrap_or(defaults.port),
            cache_capacity: parse_var(&lookup, "CACHE_CAPACITY").unwrap_or(defaults.cache_capacity),
            cache_ttl: parse_var(&lookup, "CACHE_TTL_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}

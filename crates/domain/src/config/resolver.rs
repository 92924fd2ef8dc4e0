use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use super::errors::ConfigError;

/// Resolver every lookup of a trace is sent to.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_server")]
    pub server: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Whole-lookup deadline, independent of the trace budget.
    #[serde(default = "default_lookup_timeout_ms")]
    pub lookup_timeout_ms: u64,

    /// Connect timeout for the TCP fallback.
    #[serde(default = "default_dial_timeout_ms")]
    pub dial_timeout_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            port: default_port(),
            lookup_timeout_ms: default_lookup_timeout_ms(),
            dial_timeout_ms: default_dial_timeout_ms(),
        }
    }
}

impl ResolverConfig {
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    pub fn dial_timeout(&self) -> Duration {
        Duration::from_millis(self.dial_timeout_ms)
    }

    /// Accepts either `ip:port` or a bare IP, which gets `port` appended.
    pub fn socket_addr_for(&self, server: &str) -> Option<SocketAddr> {
        if let Ok(addr) = server.parse::<SocketAddr>() {
            return Some(addr);
        }
        server
            .parse::<IpAddr>()
            .ok()
            .map(|ip| SocketAddr::new(ip, self.port))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.socket_addr_for(&self.server).is_none() {
            return Err(ConfigError::Validation(format!(
                "Resolver server '{}' is not an IP address",
                self.server
            )));
        }
        if self.port == 0 {
            return Err(ConfigError::Validation(
                "Resolver port cannot be 0".to_string(),
            ));
        }
        if self.lookup_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Lookup timeout cannot be 0".to_string(),
            ));
        }
        if self.dial_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Dial timeout cannot be 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_server() -> String {
    "8.8.8.8".to_string()
}

fn default_port() -> u16 {
    53
}

fn default_lookup_timeout_ms() -> u64 {
    3000
}

fn default_dial_timeout_ms() -> u64 {
    1000
}

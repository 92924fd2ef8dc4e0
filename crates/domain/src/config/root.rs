use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use super::trace::TraceConfig;

/// Main configuration structure for dnsv
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Resolver address and per-lookup timeouts
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Depth ceiling and time budget of a trace
    #[serde(default)]
    pub trace: TraceConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse a TOML document. Missing sections and fields fall back to defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolver.validate()?;
        self.trace.validate()?;
        Ok(())
    }
}

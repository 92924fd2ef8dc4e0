use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::errors::ConfigError;
use crate::TimeBudget;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TraceConfig {
    /// Hard recursion ceiling; depths above it perform no lookup.
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,

    /// A step whose remaining budget is under this is marked canceled.
    #[serde(default = "default_cancel_threshold_ms")]
    pub cancel_threshold_ms: u64,

    #[serde(default = "default_initial_budget_ms")]
    pub initial_budget_ms: u64,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            cancel_threshold_ms: default_cancel_threshold_ms(),
            initial_budget_ms: default_initial_budget_ms(),
        }
    }
}

impl TraceConfig {
    pub fn cancel_threshold(&self) -> Duration {
        Duration::from_millis(self.cancel_threshold_ms)
    }

    pub fn initial_budget(&self) -> TimeBudget {
        TimeBudget::from_millis(self.initial_budget_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Validation(
                "Trace max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_max_depth() -> u32 {
    5
}

fn default_cancel_threshold_ms() -> u64 {
    100
}

fn default_initial_budget_ms() -> u64 {
    3000
}

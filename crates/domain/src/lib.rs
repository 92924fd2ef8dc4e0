//! dnsv Domain Layer
pub mod config;
pub mod errors;
pub mod query_type;
pub mod resolution_step;
pub mod time_budget;

pub use config::{Config, ConfigError, LoggingConfig, ResolverConfig, TraceConfig};
pub use errors::DomainError;
pub use query_type::QueryType;
pub use resolution_step::{ResolutionStep, StepOutcome, FAILURE_SENTINEL};
pub use time_budget::TimeBudget;

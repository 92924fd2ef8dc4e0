pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod trace;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::Config;
pub use trace::TraceConfig;

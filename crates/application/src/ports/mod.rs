mod dns_lookup;
mod step_reporter;

pub use dns_lookup::DnsLookup;
pub use step_reporter::StepReporter;

// Re-export for convenience
pub use dnsv_domain::{QueryType, ResolutionStep};

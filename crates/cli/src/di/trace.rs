use dnsv_application::ports::DnsLookup;
use dnsv_application::services::TreeFormatter;
use dnsv_application::use_cases::{PerformLookupUseCase, RunTraceUseCase};
use dnsv_domain::Config;
use dnsv_infrastructure::dns::WireDnsLookup;
use std::sync::Arc;

pub struct TraceServices {
    pub run_trace: Arc<RunTraceUseCase>,
}

impl TraceServices {
    pub fn new(config: &Config) -> Self {
        let lookup: Arc<dyn DnsLookup> =
            Arc::new(WireDnsLookup::new(config.resolver.dial_timeout()));
        let perform_lookup = Arc::new(PerformLookupUseCase::new(
            lookup,
            config.resolver.clone(),
        ));
        let run_trace = Arc::new(RunTraceUseCase::new(
            perform_lookup,
            Arc::new(TreeFormatter::stdout()),
            config.trace.clone(),
        ));

        Self { run_trace }
    }
}

use crate::ports::DnsLookup;
use dnsv_domain::{DomainError, QueryType, ResolutionStep, ResolverConfig};
use std::sync::Arc;
use tokio::time::Instant;
use tracing::debug;

/// Display label used when no server is given.
pub const ROOT_SERVER_LABEL: &str = "root";

/// Runs a single timed lookup and turns its result into a [`ResolutionStep`].
pub struct PerformLookupUseCase {
    lookup: Arc<dyn DnsLookup>,
    resolver: ResolverConfig,
}

impl PerformLookupUseCase {
    pub fn new(lookup: Arc<dyn DnsLookup>, resolver: ResolverConfig) -> Self {
        Self { lookup, resolver }
    }

    pub fn default_server(&self) -> &str {
        &self.resolver.server
    }

    /// An empty `server` is labeled "root" but still dials the configured
    /// resolver.
    pub async fn execute(
        &self,
        domain: &str,
        server: &str,
        query_type: &QueryType,
    ) -> ResolutionStep {
        let start = Instant::now();

        let (label, target) = if server.is_empty() {
            (ROOT_SERVER_LABEL, self.resolver.server.as_str())
        } else {
            (server, server)
        };

        let result = self.query(domain, target, query_type).await;
        let elapsed = start.elapsed();

        match result {
            Ok(records) => {
                debug!(
                    domain = %domain,
                    query_type = %query_type,
                    server = %target,
                    elapsed_ms = elapsed.as_millis() as u64,
                    records = records.len(),
                    "Lookup answered"
                );
                ResolutionStep::answered(domain, label, query_type.clone(), elapsed, records)
            }
            Err(e) => {
                debug!(
                    domain = %domain,
                    query_type = %query_type,
                    server = %target,
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "Lookup failed"
                );
                ResolutionStep::failed(domain, label, query_type.clone(), elapsed, e)
            }
        }
    }

    async fn query(
        &self,
        domain: &str,
        target: &str,
        query_type: &QueryType,
    ) -> Result<Vec<String>, DomainError> {
        let server = self
            .resolver
            .socket_addr_for(target)
            .ok_or_else(|| DomainError::InvalidServerAddress(target.to_string()))?;
        let timeout = self.resolver.lookup_timeout();

        match query_type {
            QueryType::Ns => self.lookup.lookup_ns(domain, server, timeout).await,
            QueryType::Host { .. } => self.lookup.lookup_host(domain, server, timeout).await,
        }
    }
}

use async_trait::async_trait;
use dnsv_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

/// Resolution capability a trace needs: both lookups go to an explicit server
/// and give up once `timeout` expires.
#[async_trait]
pub trait DnsLookup: Send + Sync {
    /// Host addresses of `domain`, rendered as strings.
    async fn lookup_host(
        &self,
        domain: &str,
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<Vec<String>, DomainError>;

    /// Nameserver host names of `domain`.
    async fn lookup_ns(
        &self,
        domain: &str,
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<Vec<String>, DomainError>;
}

use async_trait::async_trait;
use dnsv_application::ports::DnsLookup;
use dnsv_domain::DomainError;
use hickory_proto::rr::RecordType;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

use super::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use super::transport::tcp::TcpTransport;
use super::transport::udp::UdpTransport;
use super::transport::DnsTransport;

/// [`DnsLookup`] speaking the DNS wire protocol directly to one server.
///
/// UDP first; a truncated answer is asked again over TCP. The timeout bounds
/// the whole lookup, retries and both address families included.
pub struct WireDnsLookup {
    dial_timeout: Duration,
}

impl WireDnsLookup {
    pub fn new(dial_timeout: Duration) -> Self {
        Self { dial_timeout }
    }

    async fn exchange(
        &self,
        domain: &str,
        record_type: RecordType,
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        let (id, query) = MessageBuilder::build_query(domain, record_type)?;

        let udp = UdpTransport::new(server);
        let reply = udp.send(&query, timeout).await?;
        let response = Self::checked(id, &reply.bytes)?;
        if !response.truncated {
            debug!(
                domain = %domain,
                record_type = %record_type,
                protocol = reply.protocol_used,
                "Answer received"
            );
            return Ok(response);
        }

        debug!(
            domain = %domain,
            record_type = %record_type,
            server = %server,
            "Truncated UDP response, retrying over TCP"
        );

        let tcp = TcpTransport::new(server, self.dial_timeout);
        let reply = tcp.send(&query, timeout).await?;
        let response = Self::checked(id, &reply.bytes)?;
        debug!(
            domain = %domain,
            record_type = %record_type,
            protocol = reply.protocol_used,
            "Answer received"
        );
        Ok(response)
    }

    fn checked(id: u16, bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let response = ResponseParser::parse(bytes)?;
        if response.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response ID {} does not match query ID {}",
                response.id, id
            )));
        }
        response.check_rcode()
    }

    async fn resolve_host(
        &self,
        domain: &str,
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<Vec<String>, DomainError> {
        if let Ok(ip) = domain.parse::<IpAddr>() {
            return Ok(vec![ip.to_string()]);
        }

        let mut addresses = Vec::new();
        let mut first_error = None;

        for record_type in [RecordType::A, RecordType::AAAA] {
            match self.exchange(domain, record_type, server, timeout).await {
                Ok(response) => {
                    addresses.extend(response.addresses.iter().map(IpAddr::to_string));
                }
                // The name does not exist for any type.
                Err(DomainError::NxDomain) => return Err(DomainError::NxDomain),
                Err(e) => {
                    debug!(domain = %domain, record_type = %record_type, error = %e, "Address query failed");
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        if !addresses.is_empty() {
            return Ok(addresses);
        }
        Err(first_error.unwrap_or_else(|| DomainError::NoRecords(domain.to_string())))
    }

    async fn resolve_ns(
        &self,
        domain: &str,
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<Vec<String>, DomainError> {
        let response = self
            .exchange(domain, RecordType::NS, server, timeout)
            .await?;

        if response.ns_hosts.is_empty() {
            return Err(DomainError::NoRecords(domain.to_string()));
        }
        Ok(response.ns_hosts)
    }
}

#[async_trait]
impl DnsLookup for WireDnsLookup {
    async fn lookup_host(
        &self,
        domain: &str,
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<Vec<String>, DomainError> {
        tokio::time::timeout(timeout, self.resolve_host(domain, server, timeout))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
    }

    async fn lookup_ns(
        &self,
        domain: &str,
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<Vec<String>, DomainError> {
        tokio::time::timeout(timeout, self.resolve_ns(domain, server, timeout))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
    }
}

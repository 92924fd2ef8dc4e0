use dnsv_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use std::net::IpAddr;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    pub addresses: Vec<IpAddr>,

    /// NS targets in fully-qualified form, trailing dot included.
    pub ns_hosts: Vec<String>,
}

impl DnsResponse {
    /// Maps a non-zero rcode to its error; `NOERROR` passes the response on.
    pub fn check_rcode(self) -> Result<Self, DomainError> {
        match self.rcode {
            ResponseCode::NoError => Ok(self),
            ResponseCode::NXDomain => Err(DomainError::NxDomain),
            rcode => Err(DomainError::ServerFailure(ResponseParser::rcode_to_status(
                rcode,
            ))),
        }
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let id = Self::wire_id(response_bytes).ok_or_else(|| {
            DomainError::InvalidDnsResponse(format!(
                "Response too short: {} bytes",
                response_bytes.len()
            ))
        })?;

        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();

        let mut addresses = Vec::new();
        let mut ns_hosts = Vec::new();

        for record in message.answers() {
            match record.data() {
                RData::A(a) => addresses.push(IpAddr::V4(a.0)),
                RData::AAAA(aaaa) => addresses.push(IpAddr::V6(aaaa.0)),
                RData::NS(ns) => ns_hosts.push(ns.to_utf8()),
                _ => {}
            }
        }

        debug!(
            id = id,
            rcode = ?rcode,
            addresses = addresses.len(),
            ns_hosts = ns_hosts.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id,
            rcode,
            truncated,
            addresses,
            ns_hosts,
        })
    }

    /// Transaction ID from the first two header bytes.
    pub fn wire_id(bytes: &[u8]) -> Option<u16> {
        match bytes {
            [hi, lo, ..] => Some(u16::from_be_bytes([*hi, *lo])),
            _ => None,
        }
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

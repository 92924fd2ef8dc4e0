//! TCP Transport for DNS queries (RFC 1035 §4.2.2)
//!
//! Each message is prefixed with its two-byte length. One connection per query.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use dnsv_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

pub struct TcpTransport {
    server_addr: SocketAddr,
    dial_timeout: Duration,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr, dial_timeout: Duration) -> Self {
        Self {
            server_addr,
            dial_timeout,
        }
    }

    async fn connect(&self) -> Result<TcpStream, DomainError> {
        let stream = tokio::time::timeout(self.dial_timeout, TcpStream::connect(self.server_addr))
            .await
            .map_err(|_| DomainError::transport(self.server_addr, "connect timed out"))?
            .map_err(|e| DomainError::transport(self.server_addr, e))?;

        stream
            .set_nodelay(true)
            .map_err(|e| DomainError::transport(self.server_addr, e))?;

        Ok(stream)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let mut stream = self.connect().await?;

        tokio::time::timeout(timeout, send_with_length_prefix(&mut stream, message_bytes))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| DomainError::transport(self.server_addr, e))?;

        debug!(
            server = %self.server_addr,
            message_len = message_bytes.len(),
            "TCP query sent"
        );

        let bytes = tokio::time::timeout(timeout, read_with_length_prefix(&mut stream))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| DomainError::transport(self.server_addr, e))?;

        debug!(
            server = %self.server_addr,
            response_len = bytes.len(),
            "TCP response received"
        );

        Ok(TransportResponse {
            bytes,
            protocol_used: "TCP",
        })
    }
}

pub(crate) fn length_prefixed(message_bytes: &[u8]) -> Result<Vec<u8>, std::io::Error> {
    let len = u16::try_from(message_bytes.len()).map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "DNS message exceeds 65535 bytes",
        )
    })?;
    let mut framed = Vec::with_capacity(message_bytes.len() + 2);
    framed.extend_from_slice(&len.to_be_bytes());
    framed.extend_from_slice(message_bytes);
    Ok(framed)
}

async fn send_with_length_prefix(
    stream: &mut TcpStream,
    message_bytes: &[u8],
) -> Result<(), std::io::Error> {
    let framed = length_prefixed(message_bytes)?;
    stream.write_all(&framed).await?;
    stream.flush().await
}

async fn read_with_length_prefix(stream: &mut TcpStream) -> Result<Vec<u8>, std::io::Error> {
    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf).await?;
    let len = u16::from_be_bytes(len_buf) as usize;

    let mut buf = vec![0u8; len];
    stream.read_exact(&mut buf).await?;
    Ok(buf)
}

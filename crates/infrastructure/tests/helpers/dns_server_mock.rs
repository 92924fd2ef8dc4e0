#![allow(dead_code)]
//! Scripted DNS server on 127.0.0.1 (UDP and TCP on the same port).
//!
//! Behavior is keyed on the first label of the question name:
//! - `nxdomain.*`  → NXDOMAIN
//! - `servfail.*`  → SERVFAIL
//! - `truncated.*` → TC bit over UDP, full answer over TCP
//! - `badid.*`     → answer with a mismatched transaction ID
//! - `dual.*`      → A and AAAA answers
//! - `nons.*`      → NOERROR with no NS answers
//! - `silent.*`    → never answers
//! - anything else → A 93.184.216.34, no AAAA, NS ns1/ns2.example.com.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

const TYPE_A: u16 = 1;
const TYPE_NS: u16 = 2;
const TYPE_AAAA: u16 = 28;

pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start() -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_count = Arc::clone(&udp_queries);
        let tcp_count = Arc::clone(&tcp_queries);

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_count.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = Self::build_response(&buf[..len], false) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    accepted = listener.accept() => {
                        if let Ok((mut stream, _)) = accepted {
                            tcp_count.fetch_add(1, Ordering::SeqCst);
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                if let Some(response) = Self::build_response(&query, true) {
                                    let mut framed = (response.len() as u16).to_be_bytes().to_vec();
                                    framed.extend_from_slice(&response);
                                    let _ = stream.write_all(&framed).await;
                                }
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            udp_queries,
            tcp_queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    /// Returns the question name (dotted, no trailing dot), QTYPE and the
    /// offset just past the question.
    fn parse_question(query: &[u8]) -> Option<(String, u16, usize)> {
        let mut pos = 12;
        let mut labels = Vec::new();
        loop {
            let len = *query.get(pos)? as usize;
            pos += 1;
            if len == 0 {
                break;
            }
            let label = query.get(pos..pos + len)?;
            labels.push(String::from_utf8_lossy(label).to_lowercase());
            pos += len;
        }
        let qtype = u16::from_be_bytes([*query.get(pos)?, *query.get(pos + 1)?]);
        Some((labels.join("."), qtype, pos + 4))
    }

    fn build_response(query: &[u8], over_tcp: bool) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }
        let (name, qtype, question_end) = Self::parse_question(query)?;
        let first_label = name.split('.').next().unwrap_or_default().to_string();

        let mut rcode = 0u8;
        let mut truncated = false;
        let mut answers: Vec<(u16, Vec<u8>)> = Vec::new();

        match first_label.as_str() {
            "silent" => return None,
            "nxdomain" => rcode = 3,
            "servfail" => rcode = 2,
            "truncated" if !over_tcp => truncated = true,
            _ => match qtype {
                TYPE_A => answers.push((TYPE_A, vec![93, 184, 216, 34])),
                TYPE_AAAA if first_label == "dual" => {
                    let mut v6 = vec![0x20, 0x01, 0x0d, 0xb8];
                    v6.extend_from_slice(&[0; 11]);
                    v6.push(1);
                    answers.push((TYPE_AAAA, v6));
                }
                TYPE_NS if first_label != "nons" => {
                    answers.push((TYPE_NS, encode_name("ns1.example.com")));
                    answers.push((TYPE_NS, encode_name("ns2.example.com")));
                }
                _ => {}
            },
        }

        let mut response = Vec::with_capacity(512);

        if first_label == "badid" {
            response.extend_from_slice(&[query[0] ^ 0xff, query[1]]);
        } else {
            response.extend_from_slice(&query[0..2]);
        }

        // QR + RD, TC when truncated; RA + rcode
        response.push(if truncated { 0x83 } else { 0x81 });
        response.push(0x80 | rcode);

        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&(answers.len() as u16).to_be_bytes());
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&query[12..question_end]);

        for (rtype, rdata) in answers {
            response.extend_from_slice(&[0xc0, 0x0c]);
            response.extend_from_slice(&rtype.to_be_bytes());
            response.extend_from_slice(&[0x00, 0x01]);
            response.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]);
            response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
            response.extend_from_slice(&rdata);
        }

        Some(response)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.split('.') {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_name() {
        assert_eq!(
            encode_name("ns1.example.com"),
            b"\x03ns1\x07example\x03com\x00".to_vec()
        );
    }

    #[test]
    fn test_parse_question() {
        let mut query = vec![0x12, 0x34, 0x01, 0x00, 0x00, 0x01, 0, 0, 0, 0, 0, 0];
        query.extend_from_slice(&encode_name("example.com"));
        query.extend_from_slice(&[0x00, 0x02, 0x00, 0x01]);

        let (name, qtype, end) = MockDnsServer::parse_question(&query).unwrap();
        assert_eq!(name, "example.com");
        assert_eq!(qtype, TYPE_NS);
        assert_eq!(end, query.len());
    }
}

//! dnsv Infrastructure Layer
pub mod dns;

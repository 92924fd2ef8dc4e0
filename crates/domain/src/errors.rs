use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid resolver address: {0}")]
    InvalidServerAddress(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Domain not found (NXDOMAIN)")]
    NxDomain,

    #[error("No records found for {0}")]
    NoRecords(String),

    #[error("Server failure: {0}")]
    ServerFailure(&'static str),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },
}

impl DomainError {
    pub fn transport(server: impl ToString, reason: impl ToString) -> Self {
        Self::Transport {
            server: server.to_string(),
            reason: reason.to_string(),
        }
    }
}

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Kind of lookup a trace step performs.
///
/// Only `"NS"` (exact, case-sensitive) selects a nameserver lookup. Every other
/// string is a host-address lookup that keeps its original text for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryType {
    Ns,
    Host { label: Arc<str> },
}

impl QueryType {
    pub const NS_LABEL: &'static str = "NS";

    pub fn host(label: impl Into<Arc<str>>) -> Self {
        Self::Host {
            label: label.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            QueryType::Ns => Self::NS_LABEL,
            QueryType::Host { label } => label,
        }
    }

    pub fn is_ns(&self) -> bool {
        matches!(self, QueryType::Ns)
    }
}

impl From<&str> for QueryType {
    fn from(s: &str) -> Self {
        if s == Self::NS_LABEL {
            QueryType::Ns
        } else {
            QueryType::host(s)
        }
    }
}

impl FromStr for QueryType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

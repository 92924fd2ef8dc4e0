use super::{DomainError, QueryType};
use std::sync::Arc;
use std::time::Duration;

/// Response text shown for every failed lookup, whatever the cause.
pub const FAILURE_SENTINEL: &str = "NXDOMAIN";

pub const RECORD_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Answered { records: Vec<String> },
    Failed { error: DomainError },
}

/// One lookup of a trace, alive only until it has been reported.
#[derive(Debug, Clone)]
pub struct ResolutionStep {
    pub query: Arc<str>,
    pub server: Arc<str>,
    pub query_type: QueryType,
    pub elapsed: Duration,
    pub outcome: StepOutcome,
}

impl ResolutionStep {
    pub fn answered(
        query: impl Into<Arc<str>>,
        server: impl Into<Arc<str>>,
        query_type: QueryType,
        elapsed: Duration,
        records: Vec<String>,
    ) -> Self {
        Self {
            query: query.into(),
            server: server.into(),
            query_type,
            elapsed,
            outcome: StepOutcome::Answered { records },
        }
    }

    pub fn failed(
        query: impl Into<Arc<str>>,
        server: impl Into<Arc<str>>,
        query_type: QueryType,
        elapsed: Duration,
        error: DomainError,
    ) -> Self {
        Self {
            query: query.into(),
            server: server.into(),
            query_type,
            elapsed,
            outcome: StepOutcome::Failed { error },
        }
    }

    pub fn response_text(&self) -> String {
        match &self.outcome {
            StepOutcome::Answered { records } => records.join(RECORD_SEPARATOR),
            StepOutcome::Failed { .. } => FAILURE_SENTINEL.to_string(),
        }
    }

    pub fn error(&self) -> Option<&DomainError> {
        match &self.outcome {
            StepOutcome::Answered { .. } => None,
            StepOutcome::Failed { error } => Some(error),
        }
    }

    pub fn records(&self) -> &[String] {
        match &self.outcome {
            StepOutcome::Answered { records } => records,
            StepOutcome::Failed { .. } => &[],
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, StepOutcome::Failed { .. })
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

use std::fmt;
use std::time::Duration;

/// Remaining time budget of a trace.
///
/// Signed: spending more than what is left drives it negative. It is only ever
/// compared against a threshold, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeBudget {
    remaining_nanos: i64,
}

impl TimeBudget {
    pub fn new(remaining: Duration) -> Self {
        Self {
            remaining_nanos: duration_to_nanos(remaining),
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn spend(self, elapsed: Duration) -> Self {
        Self {
            remaining_nanos: self
                .remaining_nanos
                .saturating_sub(duration_to_nanos(elapsed)),
        }
    }

    pub fn is_below(&self, threshold: Duration) -> bool {
        self.remaining_nanos < duration_to_nanos(threshold)
    }

    pub fn as_millis(&self) -> i64 {
        self.remaining_nanos / 1_000_000
    }
}

impl From<Duration> for TimeBudget {
    fn from(remaining: Duration) -> Self {
        Self::new(remaining)
    }
}

impl fmt::Display for TimeBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.as_millis())
    }
}

fn duration_to_nanos(d: Duration) -> i64 {
    i64::try_from(d.as_nanos()).unwrap_or(i64::MAX)
}

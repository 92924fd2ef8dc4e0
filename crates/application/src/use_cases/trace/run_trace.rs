use super::PerformLookupUseCase;
use crate::ports::StepReporter;
use dnsv_domain::{QueryType, TimeBudget, TraceConfig};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The next depth would exceed `max_depth`.
    DepthExceeded,
    /// The budget fell under the cancel threshold before the last step.
    Canceled,
    LookupFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceReport {
    pub steps: u32,
    pub stop_reason: StopReason,
}

/// `true` once the remaining budget is under the threshold.
pub fn is_canceled(budget: TimeBudget, threshold: Duration) -> bool {
    budget.is_below(threshold)
}

/// Drives a depth-bounded trace: look up, report, then continue one level
/// deeper with an NS query while nothing failed and the budget holds.
pub struct RunTraceUseCase {
    lookup: Arc<PerformLookupUseCase>,
    reporter: Arc<dyn StepReporter>,
    settings: TraceConfig,
}

impl RunTraceUseCase {
    pub fn new(
        lookup: Arc<PerformLookupUseCase>,
        reporter: Arc<dyn StepReporter>,
        settings: TraceConfig,
    ) -> Self {
        Self {
            lookup,
            reporter,
            settings,
        }
    }

    /// The cancel flag only gates continuation: a step flagged canceled still
    /// runs its lookup to completion.
    pub async fn execute(
        &self,
        domain: &str,
        query_type: QueryType,
        depth: u32,
        budget: TimeBudget,
    ) -> TraceReport {
        let mut depth = if depth == 0 {
            warn!("Trace depth is 1-based, starting at 1");
            1
        } else {
            depth
        };
        let mut query_type = query_type;
        let mut budget = budget;
        let mut steps = 0;

        let server = self.lookup.default_server();
        let threshold = self.settings.cancel_threshold();

        loop {
            if depth > self.settings.max_depth {
                return self.finish(steps, StopReason::DepthExceeded);
            }

            let canceled = is_canceled(budget, threshold);
            let step = self.lookup.execute(domain, server, &query_type).await;
            self.reporter.report(server, &step, depth, canceled);
            steps += 1;

            if canceled {
                return self.finish(steps, StopReason::Canceled);
            }
            if step.is_failure() {
                return self.finish(steps, StopReason::LookupFailed);
            }

            budget = budget.spend(step.elapsed);
            depth += 1;
            query_type = QueryType::Ns;

            debug!(depth, budget = %budget, "Descending");
        }
    }

    fn finish(&self, steps: u32, stop_reason: StopReason) -> TraceReport {
        debug!(steps, stop_reason = ?stop_reason, "Trace finished");
        TraceReport { steps, stop_reason }
    }
}

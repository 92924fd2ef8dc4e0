mod perform_lookup;
mod run_trace;

pub use perform_lookup::{PerformLookupUseCase, ROOT_SERVER_LABEL};
pub use run_trace::{is_canceled, RunTraceUseCase, StopReason, TraceReport};

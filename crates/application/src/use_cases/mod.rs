pub mod trace;

pub use trace::{PerformLookupUseCase, RunTraceUseCase, StopReason, TraceReport};

mod trace;

pub use trace::TraceServices;

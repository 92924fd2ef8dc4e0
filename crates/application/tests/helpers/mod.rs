
pub use mock_lookup::{LookupCall, MockDnsLookup, MockReply};
pub use recording_reporter::{RecordingReporter, ReportedStep};

use dnsv_domain::ResolutionStep;

pub trait StepReporter: Send + Sync {
    /// `server` is the resolver the whole trace runs against.
    fn report(&self, server: &str, step: &ResolutionStep, depth: u32, canceled: bool);
}

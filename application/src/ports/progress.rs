//! Attempt progress port
//!
//! Defines the interface for reporting fallback attempts as they happen.

use fortune_domain::Model;

/// Callback for per-attempt updates during a fallback invocation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain log lines, etc.)
pub trait AttemptObserver: Send + Sync {
    /// Called before a candidate is tried
    fn on_attempt_start(&self, model: &Model, index: usize, total: usize);

    /// Called when an attempt fails, with a human-readable reason
    fn on_attempt_failed(&self, model: &Model, reason: &str);

    /// Called once when a candidate's content is accepted
    fn on_accepted(&self, model: &Model, attempts: usize);
}

/// No-op observer for when progress reporting is not needed
pub struct NoProgress;

impl AttemptObserver for NoProgress {
    fn on_attempt_start(&self, _model: &Model, _index: usize, _total: usize) {}
    fn on_attempt_failed(&self, _model: &Model, _reason: &str) {}
    fn on_accepted(&self, _model: &Model, _attempts: usize) {}
}

//! The verification pipeline: condition, reason, deferred failure report.

use std::fmt::Display;

use crate::message;
use crate::reason::Reason;

/// Receives fully rendered failure messages.
///
/// Passing assertions are silent; only failures reach the sink. How a
/// failure is ultimately surfaced (panic, accumulation, host test runner) is
/// the sink's policy, not this crate's.
pub trait FailureSink {
    /// Reports one rendered failure message.
    fn fail(&mut self, message: String);
}

/// A sink that accumulates failure messages for later inspection.
///
/// # Example
///
/// ```
/// use veritype::{CollectingSink, FailureSink};
///
/// let mut sink = CollectingSink::new();
/// sink.fail("boom".to_string());
/// assert_eq!(sink.failures(), ["boom"]);
/// ```
#[derive(Debug, Default)]
pub struct CollectingSink {
    failures: Vec<String>,
}

impl CollectingSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        CollectingSink::default()
    }

    /// Returns the recorded failure messages, in report order.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Returns true if no failure was reported.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

impl FailureSink for CollectingSink {
    fn fail(&mut self, message: String) {
        self.failures.push(message);
    }
}

/// A sink that panics with the rendered message, aborting the surrounding
/// test on the first failure.
#[derive(Debug, Default)]
pub struct PanicSink;

impl FailureSink for PanicSink {
    fn fail(&mut self, message: String) {
        panic!("{message}");
    }
}

/// One condition check flowing towards a sink.
///
/// Built per assertion: `Verification::on(sink).for_condition(..)
/// .because_of(..).fail_with(template, args)`. Nothing is formatted unless
/// the condition is false; the builder records a failure but never raises,
/// so the caller's fluent chain continues regardless of outcome.
pub(crate) struct Verification<'s> {
    sink: &'s mut dyn FailureSink,
    condition: bool,
    reason: Reason,
}

impl<'s> Verification<'s> {
    pub(crate) fn on(sink: &'s mut dyn FailureSink) -> Self {
        Verification {
            sink,
            condition: true,
            reason: Reason::none(),
        }
    }

    pub(crate) fn for_condition(mut self, condition: bool) -> Self {
        self.condition = condition;
        self
    }

    pub(crate) fn because_of(mut self, reason: Reason) -> Self {
        self.reason = reason;
        self
    }

    /// Renders and reports the failure message if the condition is false.
    /// Returns whether the condition held.
    pub(crate) fn fail_with(self, template: &str, args: &[&dyn Display]) -> bool {
        if !self.condition {
            let rendered = message::render(template, args, &self.reason);
            tracing::debug!(message = %rendered, "type assertion failed");
            self.sink.fail(rendered);
        }
        self.condition
    }
}

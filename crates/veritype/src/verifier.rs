//! The fluent assertion surface.

use std::fmt::Display;

use veritype_core::{MarkerConstraintSet, MarkerMatcher, MarkerSource, TypeToken};

use crate::message;
use crate::reason::Reason;
use crate::verification::{FailureSink, Verification};

const EQUALS: &str = "Expected type to be {0}{reason}, but found {1}.";
const NOT_EQUALS: &str = "Expected type not to be [{0}]{reason}.";
const DECORATED: &str =
    "Expected type {0} to be decorated with {1}{reason}, but the marker was not found.";
const DECORATED_CONSTRAINT: &str =
    "Expected type {0} to be decorated with {1} ({2} = {3}){reason}, but found ({2} = {4}).";
const NOT_DECORATED: &str =
    "Expected type {0} to not be decorated with {1}{reason}, but the marker was found.";
const NOT_DECORATED_MATCHING: &str =
    "Expected type {0} to not be decorated with {1} ({2}){reason}, but a matching marker was found.";

/// What a marker-property failure reports when no value was observed.
const MISSING: &str = "<missing>";

/// Fluent assertions over one subject type.
///
/// Every operation evaluates its condition, reports a failure to the sink
/// when it does not hold, and returns `&mut Self` so further operations can
/// chain on the same subject. A failed operation never aborts the chain —
/// failure surfacing is the sink's policy.
///
/// # Example
///
/// ```
/// use veritype::prelude::*;
///
/// let subject = TypeToken::new("api::Order", "shop");
/// let registry = MarkerRegistry::new();
/// let mut sink = CollectingSink::new();
///
/// TypeVerifier::new(subject.clone(), &registry, &mut sink)
///     .equals(&subject, "the route owns it")
///     .not_equals(&TypeToken::new("api::Invoice", "shop"), Reason::none());
/// assert!(sink.is_empty());
/// ```
pub struct TypeVerifier<'a> {
    subject: TypeToken,
    source: &'a dyn MarkerSource,
    sink: &'a mut dyn FailureSink,
}

impl<'a> TypeVerifier<'a> {
    /// Creates a verifier for `subject`, reading markers from `source` and
    /// reporting failures to `sink`.
    pub fn new(
        subject: TypeToken,
        source: &'a dyn MarkerSource,
        sink: &'a mut dyn FailureSink,
    ) -> Self {
        TypeVerifier {
            subject,
            source,
            sink,
        }
    }

    /// Returns the subject under test.
    pub fn subject(&self) -> &TypeToken {
        &self.subject
    }

    /// Asserts that the subject is the identical type identity as
    /// `expected`.
    ///
    /// On failure the message shows both display names; if two distinct
    /// identities share a display name, both fall back to fully-qualified
    /// names.
    pub fn equals(&mut self, expected: &TypeToken, reason: impl Into<Reason>) -> &mut Self {
        let condition = self.subject == *expected;
        if !condition {
            if let Some((expected_name, actual_name)) =
                message::difference_operands(&self.subject, expected)
            {
                Verification::on(&mut *self.sink)
                    .for_condition(false)
                    .because_of(reason.into())
                    .fail_with(EQUALS, &[&expected_name, &actual_name]);
            }
        }
        self
    }

    /// Asserts that the subject is not the type identity `unexpected`.
    /// The failure message names the unexpected operand by its
    /// fully-qualified identity.
    pub fn not_equals(&mut self, unexpected: &TypeToken, reason: impl Into<Reason>) -> &mut Self {
        Verification::on(&mut *self.sink)
            .for_condition(self.subject != *unexpected)
            .because_of(reason.into())
            .fail_with(NOT_EQUALS, &[&unexpected.qualified_name()]);
        self
    }

    /// [`equals`](Self::equals) with the expected identity derived from a
    /// type parameter.
    pub fn equals_type<T: ?Sized + 'static>(&mut self, reason: impl Into<Reason>) -> &mut Self {
        let expected = TypeToken::of::<T>();
        self.equals(&expected, reason)
    }

    /// [`not_equals`](Self::not_equals) with the unexpected identity derived
    /// from a type parameter.
    pub fn not_equals_type<T: ?Sized + 'static>(&mut self, reason: impl Into<Reason>) -> &mut Self {
        let unexpected = TypeToken::of::<T>();
        self.not_equals(&unexpected, reason)
    }

    /// Asserts that at least one marker of `kind` decorates the subject.
    pub fn is_decorated_with(&mut self, kind: &TypeToken, reason: impl Into<Reason>) -> &mut Self {
        let matcher = MarkerMatcher::new(self.source);
        Verification::on(&mut *self.sink)
            .for_condition(matcher.exists(&self.subject, kind))
            .because_of(reason.into())
            .fail_with(DECORATED, &[&self.subject, kind]);
        self
    }

    /// Asserts that a marker of `kind` decorates the subject and satisfies
    /// the given property constraints.
    ///
    /// Presence is checked first; if the marker is absent this fails exactly
    /// like [`is_decorated_with`](Self::is_decorated_with) and the
    /// constraints are not evaluated. If present, every constraint is
    /// checked in configuration order with no short-circuit, and each
    /// unsatisfied constraint is reported independently with the actual
    /// value the matcher observed. An empty constraint set behaves exactly
    /// like the plain presence check.
    pub fn is_decorated_with_matching(
        &mut self,
        kind: &TypeToken,
        constraints: &MarkerConstraintSet,
        reason: impl Into<Reason>,
    ) -> &mut Self {
        let reason = reason.into();
        let matcher = MarkerMatcher::new(self.source);
        tracing::trace!(
            subject = %self.subject,
            kind = %kind,
            constraints = constraints.len(),
            "checking decoration"
        );
        let present = Verification::on(&mut *self.sink)
            .for_condition(matcher.exists(&self.subject, kind))
            .because_of(reason.clone())
            .fail_with(DECORATED, &[&self.subject, kind]);
        if present {
            for (property, expected) in constraints.iter() {
                let outcome = matcher.match_property(&self.subject, kind, property, expected);
                let found: &dyn Display = match &outcome.actual {
                    Some(value) => value,
                    None => &MISSING,
                };
                Verification::on(&mut *self.sink)
                    .for_condition(outcome.matched)
                    .because_of(reason.clone())
                    .fail_with(
                        DECORATED_CONSTRAINT,
                        &[&self.subject, kind, &property, expected, found],
                    );
            }
        }
        self
    }

    /// Asserts that no marker of `kind` decorates the subject.
    pub fn is_not_decorated_with(
        &mut self,
        kind: &TypeToken,
        reason: impl Into<Reason>,
    ) -> &mut Self {
        let matcher = MarkerMatcher::new(self.source);
        Verification::on(&mut *self.sink)
            .for_condition(!matcher.exists(&self.subject, kind))
            .because_of(reason.into())
            .fail_with(NOT_DECORATED, &[&self.subject, kind]);
        self
    }

    /// Asserts that no single marker of `kind` on the subject satisfies all
    /// of the given property constraints.
    pub fn is_not_decorated_with_matching(
        &mut self,
        kind: &TypeToken,
        constraints: &MarkerConstraintSet,
        reason: impl Into<Reason>,
    ) -> &mut Self {
        let matcher = MarkerMatcher::new(self.source);
        Verification::on(&mut *self.sink)
            .for_condition(!matcher.matches_all(&self.subject, kind, constraints))
            .because_of(reason.into())
            .fail_with(NOT_DECORATED_MATCHING, &[&self.subject, kind, constraints]);
        self
    }
}

//! Marker presence and constraint matching.

use crate::constraint::MarkerConstraintSet;
use crate::marker::{MarkerSource, MarkerValue};
use crate::token::TypeToken;

/// Outcome of matching one property constraint against a type's markers.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyMatch {
    /// Whether some marker carried the expected value.
    pub matched: bool,
    /// On a match, the matching value. Otherwise the value read from the
    /// last marker scanned, or `None` if no marker carried the property (or
    /// no marker was found at all). This is what failure messages report as
    /// "found".
    pub actual: Option<MarkerValue>,
}

/// Evaluates marker presence and property constraints against a
/// [`MarkerSource`].
pub struct MarkerMatcher<'a> {
    source: &'a dyn MarkerSource,
}

impl<'a> MarkerMatcher<'a> {
    /// Creates a matcher over the given source.
    pub fn new(source: &'a dyn MarkerSource) -> Self {
        MarkerMatcher { source }
    }

    /// Returns true iff at least one marker of `kind` is attached to
    /// `subject`.
    pub fn exists(&self, subject: &TypeToken, kind: &TypeToken) -> bool {
        !self.source.markers(subject, kind).is_empty()
    }

    /// Scans markers of `kind` on `subject` in source order for one whose
    /// `property` equals `expected`, returning on the first match.
    ///
    /// A marker that does not carry the property never matches.
    pub fn match_property(
        &self,
        subject: &TypeToken,
        kind: &TypeToken,
        property: &str,
        expected: &MarkerValue,
    ) -> PropertyMatch {
        let mut last_observed = None;
        for marker in self.source.markers(subject, kind) {
            let actual = marker.property(property).cloned();
            if actual.as_ref() == Some(expected) {
                return PropertyMatch {
                    matched: true,
                    actual,
                };
            }
            last_observed = actual;
        }
        PropertyMatch {
            matched: false,
            actual: last_observed,
        }
    }

    /// Returns true iff some single marker of `kind` on `subject` satisfies
    /// every constraint in the set. An empty set degenerates to
    /// [`exists`](Self::exists).
    pub fn matches_all(
        &self,
        subject: &TypeToken,
        kind: &TypeToken,
        constraints: &MarkerConstraintSet,
    ) -> bool {
        self.source.markers(subject, kind).iter().any(|marker| {
            constraints
                .iter()
                .all(|(property, expected)| marker.property(property) == Some(expected))
        })
    }
}

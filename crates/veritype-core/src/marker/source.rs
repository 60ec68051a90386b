//! Marker introspection sources.

use indexmap::IndexMap;

use super::MarkerHandle;
use crate::token::TypeToken;

/// Capability for looking up the markers attached to a type.
///
/// Matching logic only ever talks to this trait, so it stays pure and can be
/// exercised against fake sources in tests. Implementations must yield
/// markers in a stable order; that order decides which marker instance a
/// failure message reports.
pub trait MarkerSource {
    /// Returns the markers of `kind` attached to `subject`, in source order.
    fn markers(&self, subject: &TypeToken, kind: &TypeToken) -> Vec<MarkerHandle>;
}

/// In-process [`MarkerSource`] backed by explicit registration.
///
/// Rust has no attribute reflection, so decorations are declared up front:
/// each `register` call attaches one marker to a type, and lookups filter the
/// registered markers by kind identity in registration order.
///
/// # Example
///
/// ```
/// use veritype_core::{MarkerHandle, MarkerRegistry, MarkerSource, TypeToken};
///
/// let subject = TypeToken::new("api::Order", "shop");
/// let audited = TypeToken::new("markers::Audited", "policy");
///
/// let mut registry = MarkerRegistry::new();
/// registry.register(
///     subject.clone(),
///     MarkerHandle::new(audited.clone()).with_property("level", 2),
/// );
/// assert_eq!(registry.markers(&subject, &audited).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarkerRegistry {
    by_type: IndexMap<TypeToken, Vec<MarkerHandle>>,
}

impl MarkerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        MarkerRegistry::default()
    }

    /// Attaches a marker to a type. Multiple markers of the same kind may be
    /// attached; they are yielded in registration order.
    pub fn register(&mut self, subject: TypeToken, marker: MarkerHandle) {
        self.by_type.entry(subject).or_default().push(marker);
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_marker(mut self, subject: TypeToken, marker: MarkerHandle) -> Self {
        self.register(subject, marker);
        self
    }
}

impl MarkerSource for MarkerRegistry {
    fn markers(&self, subject: &TypeToken, kind: &TypeToken) -> Vec<MarkerHandle> {
        self.by_type
            .get(subject)
            .map(|markers| {
                markers
                    .iter()
                    .filter(|m| m.kind() == kind)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

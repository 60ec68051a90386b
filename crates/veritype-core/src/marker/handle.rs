//! Marker instances.

use indexmap::IndexMap;

use super::MarkerValue;
use crate::token::TypeToken;

/// One marker (decoration) instance attached to a type.
///
/// A marker has a kind — the token of the decorating metadata category — and
/// named property values. Property order is the order properties were added,
/// which is the order they are reported in.
///
/// # Example
///
/// ```
/// use veritype_core::{MarkerHandle, MarkerValue, TypeToken};
///
/// let marker = MarkerHandle::new(TypeToken::new("markers::Retention", "policy"))
///     .with_property("days", 30)
///     .with_property("archived", true);
/// assert_eq!(marker.property("days"), Some(&MarkerValue::Int(30)));
/// assert_eq!(marker.property("owner"), None);
/// ```
#[derive(Debug, Clone)]
pub struct MarkerHandle {
    kind: TypeToken,
    properties: IndexMap<String, MarkerValue>,
}

impl MarkerHandle {
    /// Creates a marker of the given kind with no properties.
    pub fn new(kind: TypeToken) -> Self {
        MarkerHandle {
            kind,
            properties: IndexMap::new(),
        }
    }

    /// Adds a property value. Re-adding a name replaces its value.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<MarkerValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Returns the marker kind.
    pub fn kind(&self) -> &TypeToken {
        &self.kind
    }

    /// Reads a property value, or `None` if the marker does not carry it.
    pub fn property(&self, name: &str) -> Option<&MarkerValue> {
        self.properties.get(name)
    }

    /// Iterates properties in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &MarkerValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}

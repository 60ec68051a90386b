//! Property constraints over markers.

use std::fmt;

use indexmap::IndexMap;

use crate::marker::MarkerValue;

/// A set of `(property, expected value)` pairs to check against a marker.
///
/// Built once through the fluent configurator, then read-only. Iteration
/// follows insertion order so that failure reports are deterministic.
/// Registering the same property twice replaces the expected value (last
/// write wins); the property keeps its original position in the iteration
/// order.
///
/// # Example
///
/// ```
/// use veritype_core::MarkerConstraintSet;
///
/// let constraints = MarkerConstraintSet::new()
///     .with("level", 2)
///     .with("channel", "ops");
/// assert_eq!(constraints.len(), 2);
/// assert_eq!(constraints.to_string(), "level = 2, channel = \"ops\"");
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkerConstraintSet {
    entries: IndexMap<String, MarkerValue>,
}

impl MarkerConstraintSet {
    /// Creates an empty constraint set.
    pub fn new() -> Self {
        MarkerConstraintSet::default()
    }

    /// Adds an expected value for a property.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<MarkerValue>) -> Self {
        self.entries.insert(property.into(), value.into());
        self
    }

    /// Iterates the constraints in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MarkerValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of constraints.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no constraints were configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for MarkerConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (property, value) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{property} = {value}")?;
            first = false;
        }
        Ok(())
    }
}

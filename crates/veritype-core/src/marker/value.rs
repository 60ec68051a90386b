//! Marker property values.

use std::fmt;

/// A property value carried by a marker.
///
/// Comparison uses each variant's natural equality; values of different
/// variants never compare equal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarkerValue {
    /// Boolean flag.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Text.
    Str(String),
}

impl fmt::Display for MarkerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerValue::Bool(v) => write!(f, "{v}"),
            MarkerValue::Int(v) => write!(f, "{v}"),
            MarkerValue::Float(v) => write!(f, "{v}"),
            MarkerValue::Str(v) => write!(f, "\"{v}\""),
        }
    }
}

impl From<bool> for MarkerValue {
    fn from(v: bool) -> Self {
        MarkerValue::Bool(v)
    }
}

impl From<i32> for MarkerValue {
    fn from(v: i32) -> Self {
        MarkerValue::Int(i64::from(v))
    }
}

impl From<i64> for MarkerValue {
    fn from(v: i64) -> Self {
        MarkerValue::Int(v)
    }
}

impl From<f64> for MarkerValue {
    fn from(v: f64) -> Self {
        MarkerValue::Float(v)
    }
}

impl From<&str> for MarkerValue {
    fn from(v: &str) -> Self {
        MarkerValue::Str(v.to_string())
    }
}

impl From<String> for MarkerValue {
    fn from(v: String) -> Self {
        MarkerValue::Str(v)
    }
}

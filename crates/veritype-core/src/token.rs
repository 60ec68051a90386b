//! Run-time type identity.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Identifies a type at runtime.
///
/// A token carries two pieces of text: a `display` name (the
/// namespace-qualified name a human reads) and an `origin` tag (the defining
/// crate or module). Identity is equality of both fields, so two tokens may
/// share a display name while remaining distinct identities — same-named
/// types from different origins.
///
/// # Example
///
/// ```
/// use veritype_core::TypeToken;
///
/// let a = TypeToken::new("routing::Stop", "dispatch");
/// let b = TypeToken::new("routing::Stop", "planner");
/// assert_ne!(a, b);
/// assert_eq!(a.display_name(), b.display_name());
/// assert_eq!(a.qualified_name(), "routing::Stop [dispatch]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeToken {
    display: Cow<'static, str>,
    origin: Cow<'static, str>,
}

impl TypeToken {
    /// Derives a token from a compile-time type.
    ///
    /// The display name is the full module path of `T` and the origin is its
    /// leading path segment (the defining crate).
    pub fn of<T: ?Sized + 'static>() -> Self {
        let display = std::any::type_name::<T>();
        let origin = leading_segment(display);
        TypeToken {
            display: Cow::Borrowed(display),
            origin: Cow::Borrowed(origin),
        }
    }

    /// Creates a synthetic token, e.g. for descriptors produced by an
    /// external introspection source.
    pub fn new(
        display: impl Into<Cow<'static, str>>,
        origin: impl Into<Cow<'static, str>>,
    ) -> Self {
        TypeToken {
            display: display.into(),
            origin: origin.into(),
        }
    }

    /// Returns the namespace-qualified display name.
    pub fn display_name(&self) -> &str {
        &self.display
    }

    /// Returns the origin tag (defining crate or module).
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the fully-qualified identity: the display name with the
    /// origin tag bracketed after it.
    pub fn qualified_name(&self) -> String {
        format!("{} [{}]", self.display, self.origin)
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

fn leading_segment(path: &str) -> &str {
    path.split("::").next().unwrap_or(path)
}

/// Error parsing a [`TypeToken`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid type token {input:?}: {message}")]
pub struct TokenParseError {
    /// The rejected input.
    pub input: String,
    /// What was wrong with it.
    pub message: &'static str,
}

impl TokenParseError {
    fn new(input: &str, message: &'static str) -> Self {
        TokenParseError {
            input: input.to_string(),
            message,
        }
    }
}

impl FromStr for TypeToken {
    type Err = TokenParseError;

    /// Parses `"display [origin]"` as produced by
    /// [`qualified_name`](TypeToken::qualified_name), or a bare display name
    /// (origin then falls back to the leading path segment).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TokenParseError::new(s, "empty"));
        }
        if let Some(rest) = s.strip_suffix(']') {
            let Some((display, origin)) = rest.rsplit_once(" [") else {
                return Err(TokenParseError::new(s, "unmatched ']'"));
            };
            let display = display.trim();
            if display.is_empty() {
                return Err(TokenParseError::new(s, "missing display name"));
            }
            return Ok(TypeToken::new(display.to_string(), origin.to_string()));
        }
        if s.contains('[') {
            return Err(TokenParseError::new(s, "unmatched '['"));
        }
        Ok(TypeToken::new(
            s.to_string(),
            leading_segment(s).to_string(),
        ))
    }
}

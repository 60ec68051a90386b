//! Caller-supplied reasons for assertions.

use std::fmt::Display;

/// Why an assertion is expected to hold.
///
/// A reason is a format string with positional `{0}`, `{1}`, … placeholders
/// plus already-realized arguments. It is rendered only when an assertion
/// fails, spliced into the failure message's `{reason}` token.
///
/// # Example
///
/// ```
/// use veritype::Reason;
///
/// let reason = Reason::new("handler {0} requires it").arg("on_close");
/// // Renders with a "because " prefix unless the text already starts
/// // with one.
/// ```
#[derive(Debug, Clone, Default)]
pub struct Reason {
    template: String,
    args: Vec<String>,
}

impl Reason {
    /// The empty reason: renders as nothing.
    pub fn none() -> Self {
        Reason::default()
    }

    /// Creates a reason from a format string with positional placeholders.
    pub fn new(template: impl Into<String>) -> Self {
        Reason {
            template: template.into(),
            args: Vec::new(),
        }
    }

    /// Adds the next positional argument.
    pub fn arg(mut self, value: impl Display) -> Self {
        self.args.push(value.to_string());
        self
    }

    /// Renders the reason for splicing into a `{reason}` token: positional
    /// arguments substituted, prefixed with "because " unless the text
    /// already starts with it (case-insensitive), and carrying a leading
    /// space. The empty reason renders as the empty string.
    pub(crate) fn render(&self) -> String {
        let mut text = self.template.clone();
        for (index, value) in self.args.iter().enumerate() {
            text = text.replace(&format!("{{{index}}}"), value);
        }
        let text = text.trim();
        if text.is_empty() {
            return String::new();
        }
        let already_prefixed = text
            .get(..7)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("because"));
        if already_prefixed {
            format!(" {text}")
        } else {
            format!(" because {text}")
        }
    }
}

impl From<&str> for Reason {
    fn from(template: &str) -> Self {
        Reason::new(template)
    }
}

impl From<String> for Reason {
    fn from(template: String) -> Self {
        Reason::new(template)
    }
}

//! Failure-message templates.
//!
//! Templates contain positional `{0}`, `{1}`, … placeholders plus one
//! `{reason}` token. Positional placeholders are substituted first (each may
//! appear more than once), then the rendered reason is spliced in; an
//! unmatched placeholder stays literal.

use std::fmt::Display;

use veritype_core::TypeToken;

use crate::reason::Reason;

/// Renders a failure message from a template, realized arguments, and the
/// caller's reason.
pub(crate) fn render(template: &str, args: &[&dyn Display], reason: &Reason) -> String {
    let mut message = template.to_string();
    for (index, value) in args.iter().enumerate() {
        message = message.replace(&format!("{{{index}}}"), &value.to_string());
    }
    message.replace("{reason}", &reason.render())
}

/// Picks the `(expected, actual)` names for an equality-failure message.
///
/// Returns `None` when the identities are equal (the caller never reaches
/// the failure path then). Display names are used when they differ; when two
/// distinct identities print the same display name, both fall back to their
/// fully-qualified forms so the message never shows two identical-looking
/// names.
pub(crate) fn difference_operands(
    actual: &TypeToken,
    expected: &TypeToken,
) -> Option<(String, String)> {
    if actual == expected {
        return None;
    }
    if actual.display_name() != expected.display_name() {
        Some((
            expected.display_name().to_string(),
            actual.display_name().to_string(),
        ))
    } else {
        Some((expected.qualified_name(), actual.qualified_name()))
    }
}

//! Typed descriptor field paths.

use owo_colors::OwoColorize;
use std::fmt;

/// A typed wrapper for descriptor field paths (e.g. `meta.base_url`).
///
/// Each section struct exposes a `FIELDS` constant with one `FieldPath`
/// per field, so diagnostics always name real fields instead of ad-hoc
/// strings.
///
/// # Example
///
/// ```ignore
/// diag.error(MetaConfig::FIELDS.url, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

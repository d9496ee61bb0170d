//! `[[nav]]` header links.
//!
//! Each entry points either at an internal documentation page (`doc`) or
//! an external URL (`href`), never both. Author order is significant and
//! preserved through to the render context.
//!
//! # Example
//!
//! ```toml
//! [[nav]]
//! label = "Docs"
//! doc = "getting-started"
//!
//! [[nav]]
//! label = "GitHub"
//! href = "https://github.com/scalameta/metaconfig"
//! external = true
//! ```

use crate::descriptor::types::{Diagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// A single navigation entry in the site header.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderLink {
    /// Link text shown in the header.
    pub label: String,

    /// Internal documentation page id (e.g., "getting-started").
    pub doc: Option<String>,

    /// External URL target.
    pub href: Option<String>,

    /// Open in a new tab; only meaningful for `href` entries.
    pub external: bool,
}

/// Field paths for diagnostics.
pub struct NavFields {
    pub label: FieldPath,
    pub target: FieldPath,
    pub external: FieldPath,
}

impl HeaderLink {
    pub const FIELDS: NavFields = NavFields {
        label: FieldPath::new("nav.label"),
        target: FieldPath::new("nav.doc/nav.href"),
        external: FieldPath::new("nav.external"),
    };

    /// Whether this entry points at an internal documentation page.
    pub fn is_doc(&self) -> bool {
        self.doc.is_some()
    }

    /// Validate a single entry: exactly one of `doc` / `href`.
    pub fn validate(&self, index: usize, diag: &mut Diagnostics) {
        if self.label.is_empty() {
            diag.error(
                Self::FIELDS.label,
                format!("nav entry #{index} has no label"),
            );
        }

        match (&self.doc, &self.href) {
            (Some(_), Some(_)) => diag.error_with_hint(
                Self::FIELDS.target,
                format!("nav entry #{index} ('{}') sets both doc and href", self.label),
                "keep exactly one target per entry",
            ),
            (None, None) => diag.error_with_hint(
                Self::FIELDS.target,
                format!("nav entry #{index} ('{}') has no target", self.label),
                "set doc = \"page-id\" or href = \"https://...\"",
            ),
            _ => {}
        }

        if self.external && self.is_doc() {
            diag.warn(
                Self::FIELDS.external,
                format!(
                    "nav entry #{index} ('{}') is a doc link, external is ignored",
                    self.label
                ),
            );
        }
    }
}

/// Validate all header links in author order.
pub fn validate_links(links: &[HeaderLink], diag: &mut Diagnostics) {
    for (index, link) in links.iter().enumerate() {
        link.validate(index, diag);
    }
}

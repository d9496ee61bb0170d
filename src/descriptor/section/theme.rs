//! `[theme]` section: colors and stylesheets.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! stylesheets = ["css/custom.css"]
//!
//! [theme.colors]
//! primary = "#058772"
//! secondary = "#045C4D"
//! ```

use crate::descriptor::types::{Diagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Theme settings for the render context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Color pair; when present, both keys are required.
    pub colors: Option<ColorsConfig>,

    /// Stylesheet paths relative to `base_url`, in author order.
    pub stylesheets: Vec<String>,
}

/// Primary/secondary color pair.
///
/// No `#[serde(default)]` here on purpose: a `[theme.colors]` table with
/// only one of the two keys is a parse error, which keeps the pair
/// all-or-nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorsConfig {
    /// Primary theme color as a hex code (e.g., "#058772").
    pub primary: String,

    /// Secondary theme color as a hex code.
    pub secondary: String,
}

/// Field paths for diagnostics.
pub struct ThemeFields {
    pub primary: FieldPath,
    pub secondary: FieldPath,
    pub stylesheets: FieldPath,
}

impl ThemeConfig {
    pub const FIELDS: ThemeFields = ThemeFields {
        primary: FieldPath::new("theme.colors.primary"),
        secondary: FieldPath::new("theme.colors.secondary"),
        stylesheets: FieldPath::new("theme.stylesheets"),
    };

    /// Validate theme settings.
    ///
    /// # Checks
    /// - both colors are well-formed hex codes
    /// - stylesheet entries are relative paths (they get `base_url`
    ///   prefixed when the render context is built)
    pub fn validate(&self, diag: &mut Diagnostics) {
        if let Some(colors) = &self.colors {
            Self::check_hex(&colors.primary, Self::FIELDS.primary, diag);
            Self::check_hex(&colors.secondary, Self::FIELDS.secondary, diag);
        }

        for sheet in &self.stylesheets {
            if sheet.starts_with('/') {
                diag.error_with_hint(
                    Self::FIELDS.stylesheets,
                    format!("stylesheet '{}' must be relative", sheet),
                    "paths are joined with base_url at emit time",
                );
            }
        }
    }

    fn check_hex(value: &str, field: FieldPath, diag: &mut Diagnostics) {
        if !is_hex_color(value) {
            diag.error_with_hint(
                field,
                format!("'{}' is not a hex color", value),
                "use format like #058772 or #fff",
            );
        }
    }
}

/// Check for `#RGB` or `#RRGGBB` hex notation.
fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

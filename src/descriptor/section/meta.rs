//! `[meta]` section: site identity.
//!
//! Title, tagline, canonical URL, base path, and the identifiers used by
//! the publishing target. These values are passed verbatim to the external
//! renderer, except `copyright_holder` which feeds the computed copyright
//! line.

use crate::descriptor::types::{Diagnostics, FieldPath};
use crate::descriptor::util::extract_url_path;
use serde::{Deserialize, Serialize};

/// Site identity for the render context.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaConfig {
    /// Display name of the site.
    pub title: String,

    /// Short description shown next to the title.
    pub tagline: String,

    /// Canonical site root (e.g., "https://scalameta.org/metaconfig").
    pub url: Option<String>,

    /// Site base path; must start and end with `/` (e.g., "/metaconfig/").
    pub base_url: String,

    /// Project identifier for the publishing target.
    pub project_name: String,

    /// Organization identifier for the publishing target.
    pub organization_name: String,

    /// Google Analytics tracking id.
    pub ga_tracking_id: Option<String>,

    /// Copyright holder; falls back to `organization_name` when unset.
    pub copyright_holder: Option<String>,
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            url: None,
            base_url: "/".into(),
            project_name: String::new(),
            organization_name: String::new(),
            ga_tracking_id: None,
            copyright_holder: None,
        }
    }
}

/// Field paths for diagnostics.
pub struct MetaFields {
    pub title: FieldPath,
    pub url: FieldPath,
    pub base_url: FieldPath,
    pub project_name: FieldPath,
    pub organization_name: FieldPath,
}

impl MetaConfig {
    pub const FIELDS: MetaFields = MetaFields {
        title: FieldPath::new("meta.title"),
        url: FieldPath::new("meta.url"),
        base_url: FieldPath::new("meta.base_url"),
        project_name: FieldPath::new("meta.project_name"),
        organization_name: FieldPath::new("meta.organization_name"),
    };

    /// Copyright holder with the `organization_name` fallback.
    pub fn copyright_holder(&self) -> &str {
        self.copyright_holder
            .as_deref()
            .unwrap_or(&self.organization_name)
    }

    /// Validate site identity.
    ///
    /// # Checks
    /// - `title` must be set
    /// - `url` must be a valid http(s) URL with a host
    /// - `base_url` must start and end with `/`
    /// - hint when the path of `url` disagrees with `base_url`
    pub fn validate(&self, diag: &mut Diagnostics) {
        if self.title.is_empty() {
            diag.error(Self::FIELDS.title, "site title is required");
        }

        self.validate_base_url(diag);

        // URL format check using url crate for strict validation
        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    // Must be http or https
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    // Must have a valid host
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }

                    self.check_base_url_consistency(url_str, diag);
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }
    }

    /// `base_url` is a well-formed absolute path: non-empty, `/`-wrapped.
    fn validate_base_url(&self, diag: &mut Diagnostics) {
        if self.base_url.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.base_url,
                "base_url must not be empty",
                "use \"/\" for a root deployment",
            );
            return;
        }
        if !self.base_url.starts_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base_url,
                format!("base_url '{}' must start with '/'", self.base_url),
                format!("use \"/{}\"", self.base_url.trim_end_matches('/')),
            );
        }
        if !self.base_url.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base_url,
                format!("base_url '{}' must end with '/'", self.base_url),
                format!("use \"{}/\"", self.base_url),
            );
        }
    }

    /// Hint when `url` carries a path component that `base_url` does not
    /// reflect (common for project pages served under a subdirectory).
    fn check_base_url_consistency(&self, url_str: &str, diag: &mut Diagnostics) {
        if let Some(url_path) = extract_url_path(url_str)
            && !url_path.is_empty()
        {
            let base = self.base_url.trim_matches('/');
            if base != url_path {
                diag.hint(
                    Self::FIELDS.base_url,
                    format!(
                        "url path '/{}' differs from base_url '{}'",
                        url_path, self.base_url
                    ),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::test_parse_descriptor;

    fn validate(meta: &MetaConfig) -> Diagnostics {
        let mut diag = Diagnostics::new();
        meta.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults() {
        let meta = MetaConfig::default();
        assert_eq!(meta.base_url, "/");
        assert!(meta.url.is_none());
        assert!(meta.ga_tracking_id.is_none());
    }

    #[test]
    fn test_parse_full_section() {
        let desc = test_parse_descriptor(
            r#"
[meta]
tagline = "Library to build configurable applications"
url = "https://scalameta.org/metaconfig"
base_url = "/metaconfig/"
project_name = "metaconfig"
organization_name = "scalameta"
ga_tracking_id = "UA-140140828-1"
"#,
        );
        assert_eq!(desc.meta.project_name, "metaconfig");
        assert_eq!(desc.meta.organization_name, "scalameta");
        assert_eq!(
            desc.meta.ga_tracking_id.as_deref(),
            Some("UA-140140828-1")
        );
    }

    #[test]
    fn test_copyright_holder_fallback() {
        let mut meta = MetaConfig {
            organization_name: "scalameta".into(),
            ..MetaConfig::default()
        };
        assert_eq!(meta.copyright_holder(), "scalameta");

        meta.copyright_holder = Some("Scalameta".into());
        assert_eq!(meta.copyright_holder(), "Scalameta");
    }

    #[test]
    fn test_valid_url_passes() {
        let meta = MetaConfig {
            title: "Metaconfig".into(),
            url: Some("https://scalameta.org/metaconfig".into()),
            base_url: "/metaconfig/".into(),
            ..MetaConfig::default()
        };
        assert!(!validate(&meta).has_errors());
    }

    #[test]
    fn test_invalid_url_scheme() {
        let meta = MetaConfig {
            title: "t".into(),
            url: Some("ftp://example.com".into()),
            ..MetaConfig::default()
        };
        assert!(validate(&meta).has_errors());
    }

    #[test]
    fn test_unparseable_url() {
        let meta = MetaConfig {
            title: "t".into(),
            url: Some("not a url".into()),
            ..MetaConfig::default()
        };
        assert!(validate(&meta).has_errors());
    }

    #[test]
    fn test_base_url_missing_leading_slash() {
        let meta = MetaConfig {
            title: "t".into(),
            base_url: "docs/".into(),
            ..MetaConfig::default()
        };
        assert!(validate(&meta).has_errors());
    }

    #[test]
    fn test_base_url_missing_trailing_slash() {
        let meta = MetaConfig {
            title: "t".into(),
            base_url: "/docs".into(),
            ..MetaConfig::default()
        };
        assert!(validate(&meta).has_errors());
    }

    #[test]
    fn test_base_url_empty() {
        let meta = MetaConfig {
            title: "t".into(),
            base_url: String::new(),
            ..MetaConfig::default()
        };
        assert!(validate(&meta).has_errors());
    }

    #[test]
    fn test_missing_title_is_error() {
        let meta = MetaConfig::default();
        assert!(validate(&meta).has_errors());
    }
}

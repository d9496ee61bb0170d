//! `[repo]` section: source repository links.
//!
//! # Example
//!
//! ```toml
//! [repo]
//! url = "https://github.com/scalameta/metaconfig"
//! edit_branch = "master"
//! docs_dir = "docs"
//! ```

use crate::descriptor::types::{Diagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Source repository settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoConfig {
    /// Repository URL (e.g., "https://github.com/scalameta/metaconfig").
    pub url: Option<String>,

    /// Branch used for edit links.
    pub edit_branch: String,

    /// Documentation directory inside the repository.
    pub docs_dir: String,

    /// Edit link base; derived from `url`, `edit_branch`, and `docs_dir`
    /// when not set explicitly.
    pub edit_url: Option<String>,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            url: None,
            edit_branch: "master".into(),
            docs_dir: "docs".into(),
            edit_url: None,
        }
    }
}

/// Field paths for diagnostics.
pub struct RepoFields {
    pub url: FieldPath,
}

impl RepoConfig {
    pub const FIELDS: RepoFields = RepoFields {
        url: FieldPath::new("repo.url"),
    };

    /// Fill in `edit_url` from the other fields when unset.
    pub fn resolve_edit_url(&mut self) {
        if self.edit_url.is_none()
            && let Some(url) = &self.url
        {
            let base = url.trim_end_matches('/');
            self.edit_url = Some(format!(
                "{}/edit/{}/{}/",
                base, self.edit_branch, self.docs_dir
            ));
        }
    }

    /// Validate the repository URL.
    pub fn validate(&self, diag: &mut Diagnostics) {
        if let Some(url_str) = &self.url
            && url::Url::parse(url_str).is_err()
        {
            diag.error_with_hint(
                Self::FIELDS.url,
                format!("invalid repository URL: '{}'", url_str),
                "use format like https://github.com/org/project",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::test_parse_descriptor;

    #[test]
    fn test_defaults() {
        let repo = RepoConfig::default();
        assert_eq!(repo.edit_branch, "master");
        assert_eq!(repo.docs_dir, "docs");
        assert!(repo.url.is_none());
        assert!(repo.edit_url.is_none());
    }

    #[test]
    fn test_resolve_edit_url() {
        let mut repo = RepoConfig {
            url: Some("https://github.com/scalameta/metaconfig".into()),
            ..RepoConfig::default()
        };
        repo.resolve_edit_url();
        assert_eq!(
            repo.edit_url.as_deref(),
            Some("https://github.com/scalameta/metaconfig/edit/master/docs/")
        );
    }

    #[test]
    fn test_resolve_edit_url_keeps_explicit_value() {
        let mut repo = RepoConfig {
            url: Some("https://github.com/scalameta/metaconfig".into()),
            edit_url: Some("https://example.com/edit/".into()),
            ..RepoConfig::default()
        };
        repo.resolve_edit_url();
        assert_eq!(repo.edit_url.as_deref(), Some("https://example.com/edit/"));
    }

    #[test]
    fn test_resolve_edit_url_without_repo_url() {
        let mut repo = RepoConfig::default();
        repo.resolve_edit_url();
        assert!(repo.edit_url.is_none());
    }

    #[test]
    fn test_custom_branch_and_dir() {
        let desc = test_parse_descriptor(
            "[repo]\nurl = \"https://github.com/org/proj\"\nedit_branch = \"main\"\ndocs_dir = \"website/docs\"",
        );
        assert_eq!(
            desc.repo.edit_url.as_deref(),
            Some("https://github.com/org/proj/edit/main/website/docs/")
        );
    }

    #[test]
    fn test_invalid_url_rejected() {
        let repo = RepoConfig {
            url: Some("not a url".into()),
            ..RepoConfig::default()
        };
        let mut diag = Diagnostics::new();
        repo.validate(&mut diag);
        assert!(diag.has_errors());
    }
}

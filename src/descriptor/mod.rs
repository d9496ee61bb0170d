//! Site descriptor management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! descriptor/
//! ├── section/       # Descriptor section definitions
//! │   ├── meta       # [meta]
//! │   ├── nav        # [[nav]]
//! │   ├── theme      # [theme]
//! │   ├── features   # [[features]]
//! │   ├── images     # [images]
//! │   └── repo       # [repo]
//! ├── types/         # Utility types
//! │   ├── error      # DescriptorError, Diagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteDescriptor (this file)
//! ```
//!
//! The descriptor is constructed exactly once: load, finalize (the only
//! dynamic computation is the copyright year plus the derived edit URL),
//! validate, and then hand it to the renderer read-only. Nothing mutates
//! it afterwards.

pub mod section;
pub mod types;
mod util;

use util::find_descriptor_file;

// Re-export from section/
pub use section::{
    ColorsConfig, FeatureBlock, HeaderLink, ImageAlign, ImagesConfig, MetaConfig, RepoConfig,
    ThemeConfig,
};

// Re-export from types/
pub use types::{DescriptorError, Diagnostic, Diagnostics, FieldPath};

use crate::{
    cli::Cli,
    log,
    utils::date::{copyright_line, current_year},
};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root descriptor
// ============================================================================

/// Root descriptor structure representing site.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteDescriptor {
    /// Absolute path to the descriptor file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Resolved copyright line (internal; computed in `finalize`)
    #[serde(skip)]
    copyright: String,

    /// Site identity (title, tagline, URLs, identifiers)
    pub meta: MetaConfig,

    /// Header navigation links, in author order
    pub nav: Vec<HeaderLink>,

    /// Colors and stylesheets
    pub theme: ThemeConfig,

    /// Landing page feature blocks, in author order
    pub features: Vec<FeatureBlock>,

    /// Icons and social card images
    pub images: ImagesConfig,

    /// Source repository links
    pub repo: RepoConfig,
}

impl Default for SiteDescriptor {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            copyright: String::new(),
            meta: MetaConfig::default(),
            nav: Vec::new(),
            theme: ThemeConfig::default(),
            features: Vec::new(),
            images: ImagesConfig::default(),
            repo: RepoConfig::default(),
        }
    }
}

impl SiteDescriptor {
    /// Load the descriptor from CLI arguments.
    ///
    /// Searches upward from cwd to find the descriptor file.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = match find_descriptor_file(&cli.config) {
            Some(path) => path,
            None => {
                bail!(
                    "descriptor file '{}' not found. Run 'sitedesc init' to create one.",
                    cli.config.display()
                );
            }
        };

        let mut descriptor = Self::from_path(&config_path)?;

        descriptor.config_path = config_path;
        descriptor.finalize();
        descriptor.validate()?;

        Ok(descriptor)
    }

    /// Finalize the descriptor after loading.
    ///
    /// This is the only place dynamic values enter: the current calendar
    /// year for the copyright line, and the derived edit URL.
    fn finalize(&mut self) {
        self.finalize_derived(current_year());
    }

    /// Resolve derived fields for a given year (split out for tests).
    fn finalize_derived(&mut self, year: u16) {
        self.copyright = copyright_line(year, self.meta.copyright_holder());
        self.repo.resolve_edit_url();
    }

    /// The resolved copyright line.
    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    /// Parse a descriptor from a TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let descriptor: Self = toml::from_str(content)?;
        Ok(descriptor)
    }

    /// Load the descriptor from a file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| DescriptorError::Io(path.to_path_buf(), err))?;

        let (descriptor, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown descriptor fields");
            }
        }

        Ok(descriptor)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let descriptor = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((descriptor, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only the filename since the descriptor sits at the site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the descriptor.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = Diagnostics::new();

        self.meta.validate(&mut diag);
        section::validate_links(&self.nav, &mut diag);
        self.theme.validate(&mut diag);
        section::validate_features(&self.features, &mut diag);
        self.repo.validate(&mut diag);

        // Print collected warnings (grouped display)
        diag.print_warnings();

        // Return all collected errors
        diag.into_result()
            .map_err(|e| DescriptorError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::descriptor::test_*`)
// ============================================================================

/// Parse a descriptor from TOML and resolve derived fields with a fixed
/// year (2024), keeping tests independent of the wall clock.
/// Panics on unknown fields (to catch descriptor typos in tests).
#[cfg(test)]
pub fn test_parse_descriptor(content: &str) -> SiteDescriptor {
    let (mut parsed, ignored) = SiteDescriptor::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test descriptor has unknown fields: {:?}",
        ignored
    );
    parsed.finalize_derived(2024);
    parsed
}

// ============================================================================
// tests
// ============================================================================

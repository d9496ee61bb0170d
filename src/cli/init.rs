//! Init command: write a starter descriptor file.

use crate::log;
use anyhow::{Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

/// Starter descriptor with every section present, commented where a
/// value has no universal default.
const TEMPLATE: &str = r##"[meta]
title = "My Project"
tagline = "Short description of the project"
url = "https://example.com/my-project"
base_url = "/my-project/"
project_name = "my-project"
organization_name = "my-org"
# ga_tracking_id = "UA-000000-0"
# copyright_holder = "My Org"

[[nav]]
label = "Docs"
doc = "getting-started"

[[nav]]
label = "GitHub"
href = "https://github.com/my-org/my-project"
external = true

[theme]
stylesheets = ["css/custom.css"]

[theme.colors]
primary = "#058772"
secondary = "#045C4D"

[[features]]
title = "First feature"
content = "What makes this project worth using."
image = "img/feature.png"
align = "left"

[images]
header_icon = "img/logo.png"
footer_icon = "img/logo.png"
favicon = "img/favicon.ico"

[repo]
url = "https://github.com/my-org/my-project"
edit_branch = "master"
docs_dir = "docs"
"##;

/// Create a starter `site.toml`.
///
/// With a `name`, the descriptor goes into that (possibly new) directory;
/// without one, into the current directory. Never overwrites an existing
/// descriptor. `dry_run` prints the template to stdout instead.
pub fn new_descriptor(
    name: Option<&Path>,
    descriptor_name: &Path,
    dry_run: bool,
) -> Result<()> {
    if dry_run {
        print!("{TEMPLATE}");
        return Ok(());
    }

    let target_dir = match name {
        Some(name) => PathBuf::from(name),
        None => std::env::current_dir()?,
    };
    let target = target_dir.join(descriptor_name);

    if target.exists() {
        bail!("'{}' already exists, not overwriting", target.display());
    }

    fs::create_dir_all(&target_dir)?;
    fs::write(&target, TEMPLATE)?;

    log!("init"; "wrote {}", target.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::SiteDescriptor;
    use std::path::Path;

    #[test]
    fn test_template_parses_and_validates() {
        let descriptor = SiteDescriptor::from_str(TEMPLATE).unwrap();
        assert_eq!(descriptor.meta.title, "My Project");
        assert!(descriptor.validate().is_ok());
    }

    #[test]
    fn test_writes_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let site = dir.path().join("newsite");
        new_descriptor(Some(&site), Path::new("site.toml"), false).unwrap();
        assert!(site.join("site.toml").exists());
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("site.toml");
        std::fs::write(&target, "[meta]\ntitle = \"existing\"\n").unwrap();

        let result = new_descriptor(Some(dir.path()), Path::new("site.toml"), false);
        assert!(result.is_err());
        // Existing content untouched
        let content = std::fs::read_to_string(&target).unwrap();
        assert!(content.contains("existing"));
    }
}

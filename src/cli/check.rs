//! Check command: load and validate the descriptor.

use crate::descriptor::SiteDescriptor;
use crate::{debug, log};
use anyhow::Result;

/// Report a successfully loaded descriptor.
///
/// Validation already happened in `SiteDescriptor::load`; this only
/// summarizes what was found.
pub fn check_descriptor(descriptor: &SiteDescriptor) -> Result<()> {
    debug!("check"; "descriptor at {}", descriptor.config_path.display());

    log!(
        "check";
        "'{}' is valid: {} nav link{}, {} feature{}",
        descriptor.meta.title,
        descriptor.nav.len(),
        if descriptor.nav.len() == 1 { "" } else { "s" },
        descriptor.features.len(),
        if descriptor.features.len() == 1 { "" } else { "s" },
    );
    Ok(())
}

//! Emit command: print the render context for the external renderer.

use crate::cli::EmitArgs;
use crate::descriptor::SiteDescriptor;
use crate::render::RenderContext;
use crate::{debug, log};
use anyhow::{Context, Result};
use std::fs;

/// Build the render context and write it to stdout or a file.
pub fn emit_context(args: &EmitArgs, descriptor: &SiteDescriptor) -> Result<()> {
    let context = RenderContext::build(descriptor);
    let json = context.to_json(args.pretty)?;

    debug!(
        "emit";
        "{} top-level keys",
        context.as_value().as_object().map_or(0, |o| o.len())
    );

    match &args.output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            log!("emit"; "wrote {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

//! Sitedesc - a site descriptor tool for documentation websites.
//!
//! Loads one `site.toml`, validates it, and emits the render context the
//! external renderer consumes.

mod cli;
mod descriptor;
mod logger;
mod render;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use descriptor::SiteDescriptor;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { name, dry } => {
            cli::init::new_descriptor(name.as_deref(), &cli.config, *dry)
        }
        Commands::Check => {
            let descriptor = SiteDescriptor::load(&cli)?;
            cli::check::check_descriptor(&descriptor)
        }
        Commands::Emit { args } => {
            let descriptor = SiteDescriptor::load(&cli)?;
            cli::emit::emit_context(args, &descriptor)
        }
    }
}

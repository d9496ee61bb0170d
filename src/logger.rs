//! Logging utilities with colored output.
//!
//! Provides the `log!` and `debug!` macros for formatted terminal output
//! with colored module prefixes.
//!
//! # Example
//!
//! ```ignore
//! log!("check"; "validating {}", path.display());
//! debug!("emit"; "context has {} keys", n);
//! ```

use owo_colors::{OwoColorize, Stream, Style};
use std::sync::atomic::{AtomicBool, Ordering};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module, &module.to_ascii_lowercase());
    eprintln!("{prefix} {message}");
}

/// Apply color to a module prefix based on module type.
///
/// Styling goes through `if_supports_color` so the global owo-colors
/// override (set from `--color`) and TTY detection are both honored.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "check" => prefix
            .if_supports_color(Stream::Stderr, |p| {
                p.style(Style::new().bright_blue().bold())
            })
            .to_string(),
        "emit" => prefix
            .if_supports_color(Stream::Stderr, |p| {
                p.style(Style::new().bright_green().bold())
            })
            .to_string(),
        "error" => prefix
            .if_supports_color(Stream::Stderr, |p| {
                p.style(Style::new().bright_red().bold())
            })
            .to_string(),
        _ => prefix
            .if_supports_color(Stream::Stderr, |p| {
                p.style(Style::new().bright_yellow().bold())
            })
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_flag_round_trip() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }

    #[test]
    fn test_color_override_disables_styling() {
        // --color never must leave prefixes unstyled for every module kind
        owo_colors::set_override(false);
        assert_eq!(colorize_prefix("check", "check"), "[check]");
        assert_eq!(colorize_prefix("emit", "emit"), "[emit]");
        assert_eq!(colorize_prefix("error", "error"), "[error]");
        assert_eq!(colorize_prefix("warning", "warning"), "[warning]");
        owo_colors::unset_override();
    }
}

//! Descriptor utility types.
//!
//! | Module   | Purpose                                  |
//! |----------|------------------------------------------|
//! | `error`  | Descriptor error types and diagnostics   |
//! | `field`  | Typed field paths for diagnostics        |

mod error;
mod field;

pub use error::{DescriptorError, Diagnostic, Diagnostics};
pub use field::FieldPath;

//! Descriptor section definitions.
//!
//! Each module corresponds to a section in `site.toml`:
//!
//! | Module     | TOML Section    | Purpose                            |
//! |------------|-----------------|------------------------------------|
//! | `meta`     | `[meta]`        | Title, tagline, URLs, identifiers  |
//! | `nav`      | `[[nav]]`       | Header navigation links            |
//! | `theme`    | `[theme]`       | Colors and stylesheets             |
//! | `features` | `[[features]]`  | Landing page feature blocks        |
//! | `images`   | `[images]`      | Icons and social card images       |
//! | `repo`     | `[repo]`        | Source repository links            |

mod features;
mod images;
mod meta;
mod nav;
mod repo;
mod theme;

pub use features::{FeatureBlock, ImageAlign, validate_features};
pub use images::ImagesConfig;
pub use meta::MetaConfig;
pub use nav::{HeaderLink, validate_links};
pub use repo::RepoConfig;
pub use theme::{ColorsConfig, ThemeConfig};

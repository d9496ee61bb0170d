//! `[images]` section: header/footer icons and social card images.

use serde::{Deserialize, Serialize};

/// Image paths for header, footer, favicon, and social cards.
///
/// All paths are relative to the site root and passed through to the
/// render context untouched; the external renderer resolves them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    /// Logo shown in the page header.
    pub header_icon: Option<String>,

    /// Logo shown in the page footer.
    pub footer_icon: Option<String>,

    /// Favicon path.
    pub favicon: Option<String>,

    /// Open Graph card image.
    pub og_image: Option<String>,

    /// Twitter card image.
    pub twitter_image: Option<String>,
}

//! `[[features]]` marketing blocks for the landing page.
//!
//! # Example
//!
//! ```toml
//! [[features]]
//! title = "HOCON and JSON support"
//! content = "Support user configuration in HOCON or JSON syntax"
//! image = "https://i.imgur.com/goYdJhw.png"
//! align = "left"
//! ```

use crate::descriptor::types::{Diagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// A single feature block, rendered in author order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureBlock {
    /// Feature headline.
    pub title: String,

    /// Descriptive text.
    pub content: String,

    /// Illustration URL or site-relative path.
    pub image: String,

    /// Which side of the text the image sits on.
    pub align: ImageAlign,
}

/// Image placement for a feature block.
///
/// Only two placements exist; anything else in the descriptor file is a
/// parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageAlign {
    #[default]
    Left,
    Right,
}

impl ImageAlign {
    /// Renderer-facing name ("left" / "right").
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Field paths for diagnostics.
pub struct FeatureFields {
    pub title: FieldPath,
    pub image: FieldPath,
}

impl FeatureBlock {
    pub const FIELDS: FeatureFields = FeatureFields {
        title: FieldPath::new("features.title"),
        image: FieldPath::new("features.image"),
    };

    /// Validate a single block.
    pub fn validate(&self, index: usize, diag: &mut Diagnostics) {
        if self.title.is_empty() {
            diag.error(
                Self::FIELDS.title,
                format!("feature #{index} has no title"),
            );
        }
        if self.image.is_empty() {
            diag.error(
                Self::FIELDS.image,
                format!("feature #{index} ('{}') has no image", self.title),
            );
        }
    }
}

/// Validate all feature blocks in author order.
pub fn validate_features(features: &[FeatureBlock], diag: &mut Diagnostics) {
    for (index, feature) in features.iter().enumerate() {
        feature.validate(index, diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::test_parse_descriptor;

    #[test]
    fn test_order_preserved() {
        let desc = test_parse_descriptor(
            r#"
[[features]]
title = "HOCON and JSON support"
content = "Support user configuration in HOCON or JSON syntax"
image = "img/parsing.png"
align = "left"

[[features]]
title = "Command-line parsing"
content = "Parse command-line arguments with the same machinery."
image = "img/cli.png"
align = "right"
"#,
        );
        assert_eq!(desc.features.len(), 2);
        assert_eq!(desc.features[0].title, "HOCON and JSON support");
        assert_eq!(desc.features[0].align, ImageAlign::Left);
        assert_eq!(desc.features[1].align, ImageAlign::Right);
    }

    #[test]
    fn test_align_rejects_unknown_value() {
        let result: Result<FeatureBlock, _> = toml::from_str(
            "title = \"t\"\ncontent = \"c\"\nimage = \"i\"\nalign = \"center\"",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_align_default_is_left() {
        let block: FeatureBlock =
            toml::from_str("title = \"t\"\ncontent = \"c\"\nimage = \"i\"").unwrap();
        assert_eq!(block.align, ImageAlign::Left);
    }

    #[test]
    fn test_align_as_str() {
        assert_eq!(ImageAlign::Left.as_str(), "left");
        assert_eq!(ImageAlign::Right.as_str(), "right");
    }

    #[test]
    fn test_missing_title_rejected() {
        let block = FeatureBlock {
            image: "img/x.png".into(),
            ..FeatureBlock::default()
        };
        let mut diag = Diagnostics::new();
        block.validate(0, &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_missing_image_rejected() {
        let block = FeatureBlock {
            title: "t".into(),
            ..FeatureBlock::default()
        };
        let mut diag = Diagnostics::new();
        block.validate(0, &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_complete_block_passes() {
        let block = FeatureBlock {
            title: "Documentation generation".into(),
            content: "Generate documentation of all supported options.".into(),
            image: "https://i.imgur.com/goYdJhw.png".into(),
            align: ImageAlign::Left,
        };
        let mut diag = Diagnostics::new();
        block.validate(0, &mut diag);
        assert!(!diag.has_errors());
    }
}

//! Render context emission.
//!
//! The descriptor's sole interface surface: an external renderer consumes
//! a JSON object with the field names it expects (`baseUrl`,
//! `headerLinks`, `colors.primaryColor`, ...). This module maps the
//! snake_case `site.toml` sections onto that shape, applying the derived
//! values along the way:
//!
//! - `stylesheets` entries are prefixed with `baseUrl`
//! - `copyright` is the resolved line from `finalize`
//! - `colors` carries both keys or is absent entirely

use crate::descriptor::SiteDescriptor;
use anyhow::Result;
use serde_json::{Map, Value, json};

/// The JSON object handed to the external renderer.
#[derive(Debug, Clone)]
pub struct RenderContext {
    value: Value,
}

impl RenderContext {
    /// Build the render context from a validated descriptor.
    pub fn build(descriptor: &SiteDescriptor) -> Self {
        let meta = &descriptor.meta;
        let mut ctx = Map::new();

        ctx.insert("title".into(), json!(meta.title));
        ctx.insert("tagline".into(), json!(meta.tagline));
        if let Some(url) = &meta.url {
            ctx.insert("url".into(), json!(url));
        }
        ctx.insert("baseUrl".into(), json!(meta.base_url));
        ctx.insert("projectName".into(), json!(meta.project_name));
        ctx.insert("organizationName".into(), json!(meta.organization_name));
        if let Some(id) = &meta.ga_tracking_id {
            ctx.insert("gaTrackingId".into(), json!(id));
        }

        ctx.insert("headerLinks".into(), Self::header_links(descriptor));

        if let Some(colors) = &descriptor.theme.colors {
            ctx.insert(
                "colors".into(),
                json!({
                    "primaryColor": colors.primary,
                    "secondaryColor": colors.secondary,
                }),
            );
        }

        ctx.insert("stylesheets".into(), Self::stylesheets(descriptor));
        ctx.insert("features".into(), Self::features(descriptor));
        Self::images(descriptor, &mut ctx);

        ctx.insert("copyright".into(), json!(descriptor.copyright()));
        if let Some(edit_url) = &descriptor.repo.edit_url {
            ctx.insert("editUrl".into(), json!(edit_url));
        }
        if let Some(repo_url) = &descriptor.repo.url {
            ctx.insert("repoUrl".into(), json!(repo_url));
        }

        Self {
            value: Value::Object(ctx),
        }
    }

    /// Header links in author order; doc and href entries keep their
    /// distinct shapes.
    fn header_links(descriptor: &SiteDescriptor) -> Value {
        let links: Vec<Value> = descriptor
            .nav
            .iter()
            .map(|link| {
                if let Some(doc) = &link.doc {
                    json!({ "doc": doc, "label": link.label })
                } else {
                    json!({
                        "href": link.href,
                        "label": link.label,
                        "external": link.external,
                    })
                }
            })
            .collect();
        Value::Array(links)
    }

    /// Stylesheets with the `base_url` prefix applied.
    fn stylesheets(descriptor: &SiteDescriptor) -> Value {
        let base = &descriptor.meta.base_url;
        let sheets: Vec<Value> = descriptor
            .theme
            .stylesheets
            .iter()
            .map(|sheet| json!(format!("{base}{sheet}")))
            .collect();
        Value::Array(sheets)
    }

    /// Feature blocks in author order.
    fn features(descriptor: &SiteDescriptor) -> Value {
        let features: Vec<Value> = descriptor
            .features
            .iter()
            .map(|feature| {
                json!({
                    "title": feature.title,
                    "content": feature.content,
                    "image": feature.image,
                    "imageAlign": feature.align.as_str(),
                })
            })
            .collect();
        Value::Array(features)
    }

    /// Optional image fields, emitted only when set.
    fn images(descriptor: &SiteDescriptor, ctx: &mut Map<String, Value>) {
        let images = &descriptor.images;
        let fields = [
            ("headerIcon", &images.header_icon),
            ("footerIcon", &images.footer_icon),
            ("favicon", &images.favicon),
            ("ogImage", &images.og_image),
            ("twitterImage", &images.twitter_image),
        ];
        for (key, value) in fields {
            if let Some(path) = value {
                ctx.insert(key.into(), json!(path));
            }
        }
    }

    /// The underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let out = if pretty {
            serde_json::to_string_pretty(&self.value)?
        } else {
            serde_json::to_string(&self.value)?
        };
        Ok(out)
    }
}

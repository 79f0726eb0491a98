use serde::Deserialize;

use crate::attrs::{Attrs, HtmlAttrs};
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::node::{Component, render_element};
use crate::types::{BgColor, PlaceholderAnimation, Size, TagName, Variant};

/// Loading placeholder block.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Placeholder {
    #[serde(rename = "as")]
    pub tag: TagName,
    pub size: Option<Size>,
    pub bg: Option<BgColor>,
    pub animation: Option<PlaceholderAnimation>,
    /// Width in grid columns.
    pub xs: Option<u8>,
    pub attrs: Attrs,
}

impl Default for Placeholder {
    fn default() -> Self {
        Self {
            tag: TagName::from_static("span"),
            size: None,
            bg: None,
            animation: None,
            xs: None,
            attrs: Attrs::new(),
        }
    }
}

impl Component for Placeholder {
    const NAME: &'static str = "Placeholder";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("placeholder")
            .class_opt(self.size.map(|size| format!("placeholder-{size}")))
            .class_opt(self.bg.map(|bg| format!("bg-{bg}")))
            .class_opt(self.animation.map(|animation| format!("placeholder-{animation}")))
            .class_opt(self.xs.map(|xs| format!("col-{xs}")));
        render_element(self.tag.as_str(), attrs, &[], ctx, out)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaceholderButton {
    pub variant: Variant,
    pub xs: Option<u8>,
    pub attrs: Attrs,
}

impl Component for PlaceholderButton {
    const NAME: &'static str = "PlaceholderButton";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs)
            .class(format!("btn btn-{} placeholder", self.variant))
            .class_opt(self.xs.map(|xs| format!("col-{xs}")))
            .set("disabled", true)
            .set("aria-hidden", "true");
        render_element("button", attrs, &[], ctx, out)
    }
}

#[cfg(test)]
mod tests {
    use crate::components::test_util::render_yaml;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_placeholder_classes() {
        assert_eq!(
            render_yaml("- {component: Placeholder, size: lg, bg: secondary, animation: glow, xs: 6}"),
            r#"<span class="placeholder placeholder-lg bg-secondary placeholder-glow col-6"></span>"#
        );
    }

    #[test]
    fn test_placeholder_tag() {
        assert_eq!(
            render_yaml("- {component: Placeholder, as: div, attrs: {class: w-75}}"),
            r#"<div class="placeholder w-75"></div>"#
        );
    }

    #[test]
    fn test_placeholder_button() {
        assert_eq!(
            render_yaml("- {component: PlaceholderButton, variant: success, xs: 4}"),
            r#"<button class="btn btn-success placeholder col-4" disabled aria-hidden="true"></button>"#
        );
    }
}

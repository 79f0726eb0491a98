//! Popovers and tooltips.
//!
//! Both only write the `data-bs-*` attributes; Bootstrap's script builds
//! the overlay itself.

use serde::Deserialize;

use crate::attrs::{Attrs, HtmlAttrs};
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::node::{Component, Node, render_element};
use crate::types::{OverlayPlacement, TagName, Trigger};

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Popover {
    pub content: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub placement: OverlayPlacement,
    #[serde(default = "click")]
    pub trigger: Trigger,
    #[serde(rename = "as", default = "button_tag")]
    pub tag: TagName,
    #[serde(default)]
    pub attrs: Attrs,
    #[serde(default)]
    pub children: Vec<Node>,
}

fn click() -> Trigger {
    Trigger::Click
}

fn button_tag() -> TagName {
    TagName::from_static("button")
}

impl Component for Popover {
    const NAME: &'static str = "Popover";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs)
            .default("data-bs-toggle", "popover")
            .default("data-bs-placement", self.placement.as_str())
            .default("data-bs-content", self.content.as_str())
            .default("data-bs-trigger", self.trigger.as_str())
            .default_opt("data-bs-title", self.title.as_deref())
            .default_opt("type", (self.tag.as_str() == "button").then_some("button"));
        render_element(self.tag.as_str(), attrs, &self.children, ctx, out)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tooltip {
    pub text: String,
    #[serde(default)]
    pub placement: OverlayPlacement,
    #[serde(default = "hover")]
    pub trigger: Trigger,
    #[serde(default)]
    pub attrs: Attrs,
    #[serde(default)]
    pub children: Vec<Node>,
}

fn hover() -> Trigger {
    Trigger::Hover
}

impl Component for Tooltip {
    const NAME: &'static str = "Tooltip";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs)
            .set("data-bs-toggle", "tooltip")
            .set("data-bs-title", self.text.as_str())
            .set("data-bs-placement", self.placement.as_str())
            .set("data-bs-trigger", self.trigger.as_str());
        render_element("span", attrs, &self.children, ctx, out)
    }
}

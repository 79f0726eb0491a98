//! Images and figures.

use std::fmt::Write;

use serde::Deserialize;

use crate::attrs::{Attrs, HtmlAttrs};
use crate::components::enabled;
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::node::{Component, Node, render_element};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Figure {
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for Figure {
    const NAME: &'static str = "Figure";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).class("figure");
        render_element("figure", attrs, &self.children, ctx, out)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FigureImage {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default = "enabled")]
    pub fluid: bool,
    #[serde(default)]
    pub attrs: Attrs,
}

impl Component for FigureImage {
    const NAME: &'static str = "FigureImage";

    fn render(&self, _ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("figure-img")
            .class_if(self.fluid, "img-fluid")
            .set("src", self.src.as_str())
            .set("alt", self.alt.as_str());
        let _ = write!(out, "<img{attrs}>");
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FigureCaption {
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for FigureCaption {
    const NAME: &'static str = "FigureCaption";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).class("figure-caption");
        render_element("figcaption", attrs, &self.children, ctx, out)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Image {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub fluid: bool,
    #[serde(default)]
    pub rounded: bool,
    #[serde(default)]
    pub rounded_circle: bool,
    #[serde(default)]
    pub thumbnail: bool,
    #[serde(default)]
    pub attrs: Attrs,
}

impl Component for Image {
    const NAME: &'static str = "Image";

    fn render(&self, _ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs)
            .class_if(self.fluid, "img-fluid")
            .class_if(self.rounded, "rounded")
            .class_if(self.rounded_circle, "rounded-circle")
            .class_if(self.thumbnail, "img-thumbnail")
            .default("src", self.src.as_str())
            .default("alt", self.alt.as_str());
        let _ = write!(out, "<img{attrs}>");
        Ok(())
    }
}

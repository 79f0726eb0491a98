use std::fmt::Write;

use serde::Deserialize;

use crate::attrs::{Attrs, HtmlAttrs};
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::html::escape_html;
use crate::node::{Component, Node, render_children, render_element};
use crate::types::TagName;

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Breadcrumb {
    #[serde(rename = "as")]
    pub tag: TagName,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for Breadcrumb {
    fn default() -> Self {
        Self {
            tag: TagName::from_static("nav"),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl Component for Breadcrumb {
    const NAME: &'static str = "Breadcrumb";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).default("aria-label", "breadcrumb");
        let _ = write!(out, r#"<{}{attrs}><ol class="breadcrumb">"#, self.tag);
        render_children(&self.children, ctx, out)?;
        let _ = write!(out, "</ol></{}>", self.tag);
        Ok(())
    }
}

/// Breadcrumb entry. Inactive entries with an `href` are rendered as links.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BreadcrumbItem {
    pub active: bool,
    pub href: Option<String>,
    #[serde(rename = "as")]
    pub tag: TagName,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for BreadcrumbItem {
    fn default() -> Self {
        Self {
            active: false,
            href: None,
            tag: TagName::from_static("li"),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl Component for BreadcrumbItem {
    const NAME: &'static str = "BreadcrumbItem";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("breadcrumb-item")
            .class_if(self.active, "active")
            .set_opt("aria-current", self.active.then_some("page"));

        match self.href.as_deref().filter(|_| !self.active) {
            Some(href) => {
                let _ = write!(out, r#"<{}{attrs}><a href="{}">"#, self.tag, escape_html(href));
                render_children(&self.children, ctx, out)?;
                let _ = write!(out, "</a></{}>", self.tag);
                Ok(())
            }
            None => render_element(self.tag.as_str(), attrs, &self.children, ctx, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::components::test_util::render_yaml;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_breadcrumb_trail() {
        let html = render_yaml(
            r"
- component: Breadcrumb
  children:
    - {component: BreadcrumbItem, href: /, children: [Home]}
    - {component: BreadcrumbItem, href: /lib, active: true, children: [Library]}
",
        );
        assert_eq!(
            html,
            r#"<nav aria-label="breadcrumb"><ol class="breadcrumb"><li class="breadcrumb-item"><a href="/">Home</a></li><li class="breadcrumb-item active" aria-current="page">Library</li></ol></nav>"#
        );
    }

    #[test]
    fn test_breadcrumb_item_without_href() {
        assert_eq!(
            render_yaml("- {component: BreadcrumbItem, children: [Plain]}"),
            r#"<li class="breadcrumb-item">Plain</li>"#
        );
    }
}

//! Alerts.

use std::fmt::Write;

use serde::Deserialize;

use crate::attrs::{Attrs, HtmlAttrs};
use crate::components::button::write_dismiss_button;
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::node::{Component, Node, render_children, render_element};
use crate::types::{CloseVariant, TagName, Variant};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Alert {
    pub variant: Variant,
    /// Adds a close button and the fade classes.
    pub dismissible: bool,
    pub close_label: Option<String>,
    pub close_variant: Option<CloseVariant>,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for Alert {
    const NAME: &'static str = "Alert";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("alert")
            .class(format!("alert-{}", self.variant))
            .class_if(self.dismissible, "alert-dismissible fade show")
            .default("role", "alert");

        let _ = write!(out, "<div{attrs}>");
        render_children(&self.children, ctx, out)?;
        if self.dismissible {
            let label = self.close_label.as_deref().unwrap_or("Close alert");
            write_dismiss_button(out, "alert", label, self.close_variant);
        }
        out.push_str("</div>");
        Ok(())
    }
}

/// Link styled to match the enclosing alert.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlertLink {
    pub href: Option<String>,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for AlertLink {
    const NAME: &'static str = "AlertLink";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs)
            .default_class("alert-link")
            .default("href", self.href.as_deref().unwrap_or("#"));
        render_element("a", attrs, &self.children, ctx, out)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlertHeading {
    #[serde(rename = "as")]
    pub tag: TagName,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for AlertHeading {
    fn default() -> Self {
        Self {
            tag: TagName::from_static("h4"),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl Component for AlertHeading {
    const NAME: &'static str = "AlertHeading";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).default_class("alert-heading");
        render_element(self.tag.as_str(), attrs, &self.children, ctx, out)
    }
}

#[cfg(test)]
mod tests {
    use crate::components::test_util::render_yaml;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_basic_alert() {
        assert_eq!(
            render_yaml("- {component: Alert, variant: warning, children: [Careful]}"),
            r#"<div class="alert alert-warning" role="alert">Careful</div>"#
        );
    }

    #[test]
    fn test_dismissible_alert() {
        assert_eq!(
            render_yaml("- {component: Alert, dismissible: true, close_variant: white, children: [Hi]}"),
            r#"<div class="alert alert-primary alert-dismissible fade show" role="alert">Hi<button class="btn-close btn-close-white" type="button" data-bs-dismiss="alert" aria-label="Close alert"></button></div>"#
        );
    }

    #[test]
    fn test_alert_heading_and_link() {
        let html = render_yaml(
            r"
- component: Alert
  attrs: {role: status}
  children:
    - {component: AlertHeading, as: h5, children: [Done]}
    - {component: AlertLink, attrs: {class: fw-bold}, children: [more]}
",
        );
        assert_eq!(
            html,
            r##"<div class="alert alert-primary" role="status"><h5 class="alert-heading">Done</h5><a class="fw-bold" href="#">more</a></div>"##
        );
    }
}

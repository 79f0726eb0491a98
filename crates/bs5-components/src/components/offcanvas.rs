//! Offcanvas side panels.

use std::fmt::Write;

use serde::Deserialize;

use crate::attrs::{Attrs, HtmlAttrs};
use crate::components::button::write_dismiss_button;
use crate::components::enabled;
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::node::{Component, Node, render_children, render_element};
use crate::types::{
    Backdrop, Breakpoint, ButtonTag, CloseVariant, HeadingLevel, OffcanvasPlacement,
};

const OFFCANVAS: &str = "offcanvas";

#[derive(Clone, Debug)]
struct OffcanvasFrame {
    id: String,
}

/// Panel sliding in from an edge of the viewport.
///
/// Nodes in `toggle` render just before the panel and can target it with
/// [`OffcanvasToggle`].
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Offcanvas {
    pub placement: OffcanvasPlacement,
    pub backdrop: Option<Backdrop>,
    /// Keep body scrolling while open.
    pub scroll: bool,
    #[serde(default = "enabled")]
    pub keyboard: bool,
    /// Breakpoint above which the content shows inline.
    pub responsive: Option<Breakpoint>,
    pub toggle: Vec<Node>,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for Offcanvas {
    fn default() -> Self {
        Self {
            placement: OffcanvasPlacement::Start,
            backdrop: None,
            scroll: false,
            keyboard: true,
            responsive: None,
            toggle: Vec::new(),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl Component for Offcanvas {
    const NAME: &'static str = "Offcanvas";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let id = self.attrs.id_or(|| format!("offcanvas-{}", ctx.next_id()));
        let base = match self.responsive {
            Some(bp) => format!("offcanvas-{bp}"),
            None => "offcanvas".to_owned(),
        };
        let attrs = HtmlAttrs::new(&self.attrs)
            .class(base)
            .class(format!("offcanvas-{}", self.placement))
            .set("id", id.clone())
            .set("tabindex", "-1")
            .default("aria-labelledby", format!("{id}-label"))
            .default_opt("data-bs-backdrop", self.backdrop.map(Backdrop::as_str))
            .default_opt("data-bs-scroll", self.scroll.then_some("true"))
            .default_opt("data-bs-keyboard", (!self.keyboard).then_some("false"));

        ctx.provide(OFFCANVAS, OffcanvasFrame { id }, |ctx| {
            render_children(&self.toggle, ctx, out)?;
            render_element("div", attrs, &self.children, ctx, out)
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OffcanvasHeader {
    #[serde(default = "enabled")]
    pub close_button: bool,
    pub close_label: String,
    pub close_variant: Option<CloseVariant>,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for OffcanvasHeader {
    fn default() -> Self {
        Self {
            close_button: true,
            close_label: "Close".to_owned(),
            close_variant: None,
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl Component for OffcanvasHeader {
    const NAME: &'static str = "OffcanvasHeader";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).class("offcanvas-header");
        let _ = write!(out, "<div{attrs}>");
        render_children(&self.children, ctx, out)?;
        if self.close_button {
            write_dismiss_button(out, OFFCANVAS, &self.close_label, self.close_variant);
        }
        out.push_str("</div>");
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OffcanvasBody {
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for OffcanvasBody {
    const NAME: &'static str = "OffcanvasBody";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).class("offcanvas-body");
        render_element("div", attrs, &self.children, ctx, out)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OffcanvasTitle {
    #[serde(rename = "as")]
    pub tag: HeadingLevel,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for OffcanvasTitle {
    fn default() -> Self {
        Self {
            tag: HeadingLevel::H5,
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl Component for OffcanvasTitle {
    const NAME: &'static str = "OffcanvasTitle";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let offcanvas: &OffcanvasFrame = ctx.inject(OFFCANVAS, Self::NAME, Offcanvas::NAME)?;
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("offcanvas-title")
            .set("id", format!("{}-label", offcanvas.id));
        render_element(self.tag.as_str(), attrs, &self.children, ctx, out)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OffcanvasToggle {
    #[serde(rename = "as")]
    pub tag: ButtonTag,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for OffcanvasToggle {
    const NAME: &'static str = "OffcanvasToggle";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let offcanvas: &OffcanvasFrame = ctx.inject(OFFCANVAS, Self::NAME, Offcanvas::NAME)?;
        let target = offcanvas.id.clone();
        let attrs = HtmlAttrs::new(&self.attrs)
            .set("data-bs-toggle", "offcanvas")
            .set("data-bs-target", format!("#{target}"))
            .default("aria-controls", target);
        render_element(self.tag.as_str(), attrs, &self.children, ctx, out)
    }
}

#[cfg(test)]
mod tests {
    use crate::components::test_util::{render_yaml, render_yaml_err};
    use crate::error::RenderError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_toggle_slot_renders_before_panel() {
        let html = render_yaml(
            r"
- component: Offcanvas
  placement: end
  toggle:
    - {component: OffcanvasToggle, attrs: {class: btn btn-primary}, children: [Open]}
  children:
    - component: OffcanvasHeader
      children:
        - {component: OffcanvasTitle, children: [Menu]}
    - {component: OffcanvasBody, children: [Content]}
",
        );
        assert_eq!(
            html,
            concat!(
                r##"<button class="btn btn-primary" data-bs-toggle="offcanvas" data-bs-target="#offcanvas-c1" aria-controls="offcanvas-c1">Open</button>"##,
                r#"<div class="offcanvas offcanvas-end" id="offcanvas-c1" tabindex="-1" aria-labelledby="offcanvas-c1-label">"#,
                r#"<div class="offcanvas-header"><h5 class="offcanvas-title" id="offcanvas-c1-label">Menu</h5>"#,
                r#"<button class="btn-close" type="button" data-bs-dismiss="offcanvas" aria-label="Close"></button></div>"#,
                r#"<div class="offcanvas-body">Content</div>"#,
                "</div>",
            )
        );
    }

    #[test]
    fn test_panel_options() {
        assert_eq!(
            render_yaml(
                "- {component: Offcanvas, placement: bottom, responsive: lg, backdrop: static, scroll: true, keyboard: false}"
            ),
            r#"<div class="offcanvas-lg offcanvas-bottom" id="offcanvas-c1" tabindex="-1" aria-labelledby="offcanvas-c1-label" data-bs-backdrop="static" data-bs-scroll="true" data-bs-keyboard="false"></div>"#
        );
    }

    #[test]
    fn test_header_close_variant() {
        assert_eq!(
            render_yaml("- {component: OffcanvasHeader, close_label: Hide, close_variant: white}"),
            r#"<div class="offcanvas-header"><button class="btn-close btn-close-white" type="button" data-bs-dismiss="offcanvas" aria-label="Hide"></button></div>"#
        );
    }

    #[test]
    fn test_toggle_requires_offcanvas() {
        assert_eq!(
            render_yaml_err("- {component: OffcanvasToggle}"),
            RenderError::MissingContext {
                component: "OffcanvasToggle",
                ancestor: "Offcanvas"
            }
        );
    }
}

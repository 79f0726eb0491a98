//! Responsive navigation header.
//!
//! [`Navbar`] allocates the id of its collapsible region so that the
//! toggler and the collapse it opens agree without the caller naming it.

use std::fmt::Write;

use serde::Deserialize;

use crate::attrs::{Attrs, HtmlAttrs};
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::node::{Component, Node, render_children, render_element};
use crate::types::{BrandTag, Breakpoint, NavbarContainer, NavbarPlacement, Theme};

const NAVBAR: &str = "navbar";

#[derive(Clone, Debug)]
struct NavbarFrame {
    collapse_id: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Navbar {
    /// Breakpoint from which the navbar is expanded.
    pub expand: Option<Breakpoint>,
    /// Background utility suffix, e.g. `body-tertiary`.
    pub bg: Option<String>,
    pub theme: Option<Theme>,
    pub placement: Option<NavbarPlacement>,
    pub container: NavbarContainer,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for Navbar {
    const NAME: &'static str = "Navbar";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let frame = NavbarFrame {
            collapse_id: format!("navbar-collapse-{}", ctx.next_id()),
        };
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("navbar")
            .class_opt(self.expand.map(|bp| format!("navbar-expand-{bp}")))
            .class_opt(
                self.bg
                    .as_deref()
                    .filter(|bg| !bg.is_empty())
                    .map(|bg| format!("bg-{bg}")),
            )
            .class_opt(self.placement.map(NavbarPlacement::as_str))
            .default_opt("data-bs-theme", self.theme.map(Theme::as_str));
        let container = self.container.class();

        let _ = write!(out, "<nav{attrs}>");
        if let Some(class) = &container {
            let _ = write!(out, r#"<div class="{class}">"#);
        }
        ctx.provide(NAVBAR, frame, |ctx| render_children(&self.children, ctx, out))?;
        if container.is_some() {
            out.push_str("</div>");
        }
        out.push_str("</nav>");
        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavbarBrand {
    #[serde(rename = "as")]
    pub tag: BrandTag,
    pub href: String,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for NavbarBrand {
    fn default() -> Self {
        Self {
            tag: BrandTag::A,
            href: "#".to_owned(),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl Component for NavbarBrand {
    const NAME: &'static str = "NavbarBrand";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).class("navbar-brand");
        let attrs = match self.tag {
            BrandTag::A => attrs.set("href", self.href.as_str()),
            BrandTag::Span => attrs,
        };
        render_element(self.tag.as_str(), attrs, &self.children, ctx, out)
    }
}

/// Collapse toggle. Shows the hamburger icon when it has no children.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavbarToggler {
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for NavbarToggler {
    const NAME: &'static str = "NavbarToggler";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let navbar: &NavbarFrame = ctx.inject(NAVBAR, Self::NAME, Navbar::NAME)?;
        let target = navbar.collapse_id.clone();
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("navbar-toggler")
            .set("type", "button")
            .set("data-bs-toggle", "collapse")
            .set("data-bs-target", format!("#{target}"))
            .default("aria-controls", target)
            .default("aria-expanded", "false")
            .default("aria-label", "Toggle navigation");

        let _ = write!(out, "<button{attrs}>");
        if self.children.is_empty() {
            out.push_str(r#"<span class="navbar-toggler-icon"></span>"#);
        } else {
            render_children(&self.children, ctx, out)?;
        }
        out.push_str("</button>");
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavbarCollapse {
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for NavbarCollapse {
    const NAME: &'static str = "NavbarCollapse";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let navbar: &NavbarFrame = ctx.inject(NAVBAR, Self::NAME, Navbar::NAME)?;
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("collapse navbar-collapse")
            .set("id", navbar.collapse_id.clone());
        render_element("div", attrs, &self.children, ctx, out)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavbarNav {
    /// Scrollable when the collapsed content overflows.
    pub scroll: bool,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for NavbarNav {
    const NAME: &'static str = "NavbarNav";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("navbar-nav")
            .class_if(self.scroll, "navbar-nav-scroll");
        render_element("ul", attrs, &self.children, ctx, out)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavbarText {
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for NavbarText {
    const NAME: &'static str = "NavbarText";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).class("navbar-text");
        render_element("span", attrs, &self.children, ctx, out)
    }
}

#[cfg(test)]
mod tests {
    use crate::components::test_util::{render_yaml, render_yaml_err};
    use crate::error::RenderError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_navbar_wires_toggler_to_collapse() {
        let html = render_yaml(
            r"
- component: Navbar
  expand: lg
  bg: body
  theme: dark
  children:
    - {component: NavbarBrand, children: [Site]}
    - {component: NavbarToggler}
    - component: NavbarCollapse
      children:
        - component: NavbarNav
          children:
            - component: NavItem
              children:
                - {component: NavLink, href: /docs, children: [Docs]}
        - {component: NavbarText, children: [Hi]}
",
        );
        assert_eq!(
            html,
            concat!(
                r#"<nav class="navbar navbar-expand-lg bg-body" data-bs-theme="dark"><div class="container-fluid">"#,
                r##"<a class="navbar-brand" href="#">Site</a>"##,
                r##"<button class="navbar-toggler" type="button" data-bs-toggle="collapse" data-bs-target="#navbar-collapse-c1" aria-controls="navbar-collapse-c1" aria-expanded="false" aria-label="Toggle navigation"><span class="navbar-toggler-icon"></span></button>"##,
                r#"<div class="collapse navbar-collapse" id="navbar-collapse-c1">"#,
                r#"<ul class="navbar-nav"><li class="nav-item"><a class="nav-link" href="/docs">Docs</a></li></ul>"#,
                r#"<span class="navbar-text">Hi</span>"#,
                "</div></div></nav>",
            )
        );
    }

    #[test]
    fn test_free_form_background() {
        let html = render_yaml("- {component: Navbar, bg: body-tertiary, container: false}");
        assert_eq!(html, r#"<nav class="navbar bg-body-tertiary"></nav>"#);
    }

    #[test]
    fn test_container_variants() {
        assert_eq!(
            render_yaml("- {component: Navbar, container: false, placement: fixed-top}"),
            r#"<nav class="navbar fixed-top"></nav>"#
        );
        assert_eq!(
            render_yaml("- {component: Navbar, container: true}"),
            r#"<nav class="navbar"><div class="container"></div></nav>"#
        );
        assert_eq!(
            render_yaml("- {component: Navbar, container: md}"),
            r#"<nav class="navbar"><div class="container-md"></div></nav>"#
        );
    }

    #[test]
    fn test_brand_as_span_with_scrolling_nav() {
        assert_eq!(
            render_yaml("- {component: NavbarBrand, as: span, children: [Logo]}"),
            r#"<span class="navbar-brand">Logo</span>"#
        );
        assert_eq!(
            render_yaml("- {component: NavbarNav, scroll: true}"),
            r#"<ul class="navbar-nav navbar-nav-scroll"></ul>"#
        );
    }

    #[test]
    fn test_toggler_requires_navbar() {
        assert_eq!(
            render_yaml_err("- {component: NavbarToggler}"),
            RenderError::MissingContext {
                component: "NavbarToggler",
                ancestor: "Navbar"
            }
        );
    }
}

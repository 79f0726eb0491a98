//! Navs and their links.

use std::fmt::Write;

use serde::Deserialize;

use crate::attrs::{Attrs, HtmlAttrs};
use crate::components::dropdown::DropdownMenu;
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::html::escape_html;
use crate::node::{Component, Node, render_children, render_element};
use crate::types::{Align, AutoClose, ButtonTag, NavItemTag, NavTag, NavVariant};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Nav {
    pub variant: Option<NavVariant>,
    pub fill: bool,
    pub justified: bool,
    pub vertical: bool,
    #[serde(rename = "as")]
    pub tag: NavTag,
    pub role: Option<String>,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for Nav {
    const NAME: &'static str = "Nav";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("nav")
            .class_opt(self.variant.map(|variant| format!("nav-{variant}")))
            .class_if(self.fill, "nav-fill")
            .class_if(self.justified, "nav-justified")
            .class_if(self.vertical, "flex-column")
            .default_opt("role", self.role.as_deref());
        render_element(self.tag.as_str(), attrs, &self.children, ctx, out)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavItem {
    #[serde(rename = "as")]
    pub tag: NavItemTag,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for NavItem {
    const NAME: &'static str = "NavItem";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).default_class("nav-item");
        render_element(self.tag.as_str(), attrs, &self.children, ctx, out)
    }
}

/// A nav link. Anchors by default; `as: button` for in-page toggles.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavLink {
    #[serde(rename = "as")]
    pub tag: ButtonTag,
    pub href: String,
    pub active: bool,
    pub disabled: bool,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for NavLink {
    fn default() -> Self {
        Self {
            tag: ButtonTag::A,
            href: "#".to_owned(),
            active: false,
            disabled: false,
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl NavLink {
    fn html_attrs<'a>(&'a self, caller: &'a Attrs) -> HtmlAttrs<'a> {
        let attrs = HtmlAttrs::new(caller)
            .class("nav-link")
            .class_if(self.active, "active")
            .class_if(self.disabled, "disabled");
        let attrs = match self.tag {
            ButtonTag::A if self.disabled => attrs
                .default("aria-disabled", "true")
                .default("tabindex", "-1"),
            ButtonTag::A => attrs.default("href", self.href.as_str()),
            ButtonTag::Button => attrs
                .default("type", "button")
                .default("disabled", self.disabled),
        };
        attrs.default_opt("aria-current", self.active.then_some("page"))
    }
}

impl Component for NavLink {
    const NAME: &'static str = "NavLink";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = self.html_attrs(&self.attrs);
        render_element(self.tag.as_str(), attrs, &self.children, ctx, out)
    }
}

/// Nav item holding a dropdown. Caller attributes apply to the toggle.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavDropdown {
    pub title: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub auto_close: Option<AutoClose>,
    #[serde(default)]
    pub align: Option<Align>,
    #[serde(default)]
    pub dark: bool,
    #[serde(default)]
    pub attrs: Attrs,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Component for NavDropdown {
    const NAME: &'static str = "NavDropdown";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let toggle = NavLink {
            tag: ButtonTag::Button,
            active: self.active,
            disabled: self.disabled,
            ..NavLink::default()
        };
        let menu = DropdownMenu {
            align: self.align,
            dark: self.dark,
            ..DropdownMenu::default()
        };

        let id = self.attrs.id_or(|| format!("nav-dropdown-{}", ctx.next_id()));
        let attrs = toggle
            .html_attrs(&self.attrs)
            .class("dropdown-toggle")
            .set("id", id)
            .default("data-bs-toggle", "dropdown")
            .default("aria-expanded", "false")
            .default_opt("data-bs-auto-close", self.auto_close.map(AutoClose::as_str));

        let _ = write!(
            out,
            r#"<li class="nav-item dropdown"><button{attrs}>{}</button><ul class="{}">"#,
            escape_html(&self.title),
            menu.classes()
        );
        render_children(&self.children, ctx, out)?;
        out.push_str("</ul></li>");
        Ok(())
    }
}

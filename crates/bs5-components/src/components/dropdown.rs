//! Dropdown menus.

use std::fmt::Write;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::attrs::{Attrs, HtmlAttrs};
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::html::escape_html;
use crate::node::{Component, Node, render_children, render_element};
use crate::types::{
    Align, AutoClose, Breakpoint, ButtonTag, ButtonType, ButtonVariant, DropdownDirection,
    HeadingLevel, Size,
};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Dropdown {
    pub direction: DropdownDirection,
    pub centered: bool,
    pub auto_close: Option<AutoClose>,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

fn wrapper_class(direction: DropdownDirection, centered: bool) -> &'static str {
    match (direction, centered) {
        (DropdownDirection::Up, true) => "dropup dropup-center",
        (_, true) => "dropdown dropdown-center",
        (DropdownDirection::Up, false) => "dropup",
        (DropdownDirection::End, false) => "dropend",
        (DropdownDirection::Start, false) => "dropstart",
        (DropdownDirection::Down, false) => "dropdown",
    }
}

fn menu_classes(align: Option<Align>, dark: bool) -> String {
    let mut classes = String::from("dropdown-menu");
    if align == Some(Align::End) {
        classes.push_str(" dropdown-menu-end");
    }
    if dark {
        classes.push_str(" dropdown-menu-dark");
    }
    classes
}

impl Component for Dropdown {
    const NAME: &'static str = "Dropdown";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs)
            .class(wrapper_class(self.direction, self.centered))
            .default_opt("data-bs-auto-close", self.auto_close.map(AutoClose::as_str));
        render_element("div", attrs, &self.children, ctx, out)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DropdownToggle {
    pub variant: ButtonVariant,
    /// Caret-only half of a split button.
    pub split: bool,
    pub size: Option<Size>,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for DropdownToggle {
    const NAME: &'static str = "DropdownToggle";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs)
            .class(format!("btn btn-{} dropdown-toggle", self.variant))
            .class_if(self.split, "dropdown-toggle-split")
            .class_opt(self.size.map(|size| format!("btn-{size}")))
            .default("type", "button")
            .default("data-bs-toggle", "dropdown")
            .default("aria-expanded", "false");
        render_element("button", attrs, &self.children, ctx, out)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DropdownMenu {
    pub align: Option<Align>,
    /// Per-breakpoint alignment, e.g. `{lg: end}`.
    pub align_responsive: IndexMap<Breakpoint, Align>,
    pub dark: bool,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl DropdownMenu {
    pub(crate) fn classes(&self) -> String {
        let mut classes = menu_classes(self.align, false);
        for (breakpoint, align) in &self.align_responsive {
            let _ = write!(classes, " dropdown-menu-{breakpoint}-{align}");
        }
        if self.dark {
            classes.push_str(" dropdown-menu-dark");
        }
        classes
    }
}

impl Component for DropdownMenu {
    const NAME: &'static str = "DropdownMenu";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).class(self.classes());
        render_element("ul", attrs, &self.children, ctx, out)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DropdownItem {
    #[serde(rename = "as")]
    pub tag: Option<ButtonTag>,
    pub href: Option<String>,
    pub active: bool,
    pub disabled: bool,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for DropdownItem {
    const NAME: &'static str = "DropdownItem";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let tag = self.tag.unwrap_or(ButtonTag::A);
        let mut attrs = HtmlAttrs::new(&self.attrs)
            .class("dropdown-item")
            .class_if(self.active, "active")
            .class_if(self.disabled, "disabled");

        attrs = match tag {
            ButtonTag::A => {
                let attrs = attrs.default("href", self.href.as_deref().unwrap_or("#"));
                if self.disabled {
                    attrs.default("aria-disabled", "true").default("tabindex", "-1")
                } else {
                    attrs
                }
            }
            ButtonTag::Button => attrs.default("type", "button").default("disabled", self.disabled),
        };
        let attrs = attrs.default_opt("aria-current", self.active.then_some("true"));

        out.push_str("<li>");
        render_element(tag.as_str(), attrs, &self.children, ctx, out)?;
        out.push_str("</li>");
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DropdownDivider {
    pub attrs: Attrs,
}

impl Component for DropdownDivider {
    const NAME: &'static str = "DropdownDivider";

    fn render(&self, _ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).default_class("dropdown-divider");
        let _ = write!(out, "<li><hr{attrs}></li>");
        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DropdownHeader {
    #[serde(rename = "as")]
    pub tag: HeadingLevel,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for DropdownHeader {
    fn default() -> Self {
        Self {
            tag: HeadingLevel::H6,
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl Component for DropdownHeader {
    const NAME: &'static str = "DropdownHeader";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).default_class("dropdown-header");
        out.push_str("<li>");
        render_element(self.tag.as_str(), attrs, &self.children, ctx, out)?;
        out.push_str("</li>");
        Ok(())
    }
}

/// Non-interactive text inside a menu.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DropdownItemText {
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for DropdownItemText {
    const NAME: &'static str = "DropdownItemText";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).default_class("dropdown-item-text");
        let _ = write!(out, "<li><span{attrs}>");
        render_children(&self.children, ctx, out)?;
        out.push_str("</span></li>");
        Ok(())
    }
}

/// Toggle button and menu in one component; children are the menu items.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DropdownButton {
    pub title: String,
    pub variant: ButtonVariant,
    pub size: Option<Size>,
    pub direction: DropdownDirection,
    pub centered: bool,
    pub auto_close: Option<AutoClose>,
    /// Menu alignment.
    pub align: Option<Align>,
    pub dark: bool,
    pub disabled: bool,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for DropdownButton {
    const NAME: &'static str = "DropdownButton";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let wrapper = HtmlAttrs::new(&self.attrs).class(wrapper_class(self.direction, self.centered));
        let none = Attrs::new();
        let toggle = HtmlAttrs::new(&none)
            .class(format!("btn btn-{} dropdown-toggle", self.variant))
            .class_opt(self.size.map(|size| format!("btn-{size}")))
            .set("type", "button")
            .set("data-bs-toggle", "dropdown")
            .set("aria-expanded", "false")
            .set_opt("data-bs-auto-close", self.auto_close.map(AutoClose::as_str))
            .set("disabled", self.disabled);

        let _ = write!(
            out,
            r#"<div{wrapper}><button{toggle}>{}</button><ul class="{}">"#,
            escape_html(&self.title),
            menu_classes(self.align, self.dark)
        );
        render_children(&self.children, ctx, out)?;
        out.push_str("</ul></div>");
        Ok(())
    }
}

/// Primary action button with a caret toggle beside it.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplitButton {
    pub title: String,
    pub variant: ButtonVariant,
    pub size: Option<Size>,
    /// Renders the action as a link.
    pub href: Option<String>,
    #[serde(rename = "type")]
    pub kind: ButtonType,
    /// Screen-reader text of the toggle.
    pub toggle_label: String,
    pub align: Option<Align>,
    pub dark: bool,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for SplitButton {
    fn default() -> Self {
        Self {
            title: String::new(),
            variant: ButtonVariant::default(),
            size: None,
            href: None,
            kind: ButtonType::default(),
            toggle_label: "Toggle dropdown".to_owned(),
            align: None,
            dark: false,
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl Component for SplitButton {
    const NAME: &'static str = "SplitButton";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let size = self.size.map(|size| format!("btn-{size}"));
        let wrapper = HtmlAttrs::new(&self.attrs).class("dropdown");
        let none = Attrs::new();
        let action = HtmlAttrs::new(&none)
            .class(format!("btn btn-{}", self.variant))
            .class_opt(size.as_deref());
        let action = match &self.href {
            Some(href) => action.set("href", href.as_str()).set("role", "button"),
            None => action.set("type", self.kind.as_str()),
        };
        let action_tag = if self.href.is_some() { "a" } else { "button" };
        let toggle = HtmlAttrs::new(&none)
            .class(format!("btn btn-{} dropdown-toggle dropdown-toggle-split", self.variant))
            .class_opt(size.as_deref())
            .set("type", "button")
            .set("data-bs-toggle", "dropdown")
            .set("aria-expanded", "false");

        let _ = write!(
            out,
            r#"<div{wrapper}><div class="btn-group" role="group"><{action_tag}{action}>{}</{action_tag}>"#,
            escape_html(&self.title)
        );
        let _ = write!(
            out,
            r#"<button{toggle}><span class="visually-hidden">{}</span></button><ul class="{}">"#,
            escape_html(&self.toggle_label),
            menu_classes(self.align, self.dark)
        );
        render_children(&self.children, ctx, out)?;
        out.push_str("</ul></div></div>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::components::test_util::render_yaml;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dropdown_menu() {
        let html = render_yaml(
            r"
- component: Dropdown
  children:
    - {component: DropdownToggle, variant: secondary, children: [Menu]}
    - component: DropdownMenu
      children:
        - {component: DropdownHeader, children: [Actions]}
        - {component: DropdownItem, href: /edit, active: true, children: [Edit]}
        - {component: DropdownItem, disabled: true, children: [Delete]}
        - {component: DropdownDivider}
        - {component: DropdownItem, as: button, disabled: true, children: [Run]}
        - {component: DropdownItemText, children: [Note]}
",
        );
        assert_eq!(
            html,
            concat!(
                r#"<div class="dropdown">"#,
                r#"<button class="btn btn-secondary dropdown-toggle" type="button" data-bs-toggle="dropdown" aria-expanded="false">Menu</button>"#,
                r#"<ul class="dropdown-menu">"#,
                r#"<li><h6 class="dropdown-header">Actions</h6></li>"#,
                r#"<li><a class="dropdown-item active" href="/edit" aria-current="true">Edit</a></li>"#,
                r##"<li><a class="dropdown-item disabled" href="#" aria-disabled="true" tabindex="-1">Delete</a></li>"##,
                r#"<li><hr class="dropdown-divider"></li>"#,
                r#"<li><button class="dropdown-item disabled" type="button" disabled>Run</button></li>"#,
                r#"<li><span class="dropdown-item-text">Note</span></li>"#,
                "</ul></div>",
            )
        );
    }

    #[test]
    fn test_directions() {
        let cases = [
            ("up", false, "dropup"),
            ("up", true, "dropup dropup-center"),
            ("down", true, "dropdown dropdown-center"),
            ("end", false, "dropend"),
            ("start", false, "dropstart"),
        ];
        for (direction, centered, class) in cases {
            let html = render_yaml(&format!(
                "- {{component: Dropdown, direction: {direction}, centered: {centered}}}"
            ));
            assert_eq!(html, format!(r#"<div class="{class}"></div>"#));
        }
    }

    #[test]
    fn test_auto_close() {
        assert_eq!(
            render_yaml("- {component: Dropdown, auto_close: outside}"),
            r#"<div class="dropdown" data-bs-auto-close="outside"></div>"#
        );
        assert_eq!(
            render_yaml("- {component: Dropdown, auto_close: false}"),
            r#"<div class="dropdown" data-bs-auto-close="false"></div>"#
        );
    }

    #[test]
    fn test_menu_alignment() {
        assert_eq!(
            render_yaml(
                "- {component: DropdownMenu, align: end, align_responsive: {lg: start, sm: end}, dark: true}"
            ),
            r#"<ul class="dropdown-menu dropdown-menu-end dropdown-menu-lg-start dropdown-menu-sm-end dropdown-menu-dark"></ul>"#
        );
    }

    #[test]
    fn test_split_toggle() {
        assert_eq!(
            render_yaml("- {component: DropdownToggle, split: true, size: sm}"),
            r#"<button class="btn btn-primary dropdown-toggle dropdown-toggle-split btn-sm" type="button" data-bs-toggle="dropdown" aria-expanded="false"></button>"#
        );
    }

    #[test]
    fn test_dropdown_button() {
        let html = render_yaml(
            r"
- component: DropdownButton
  title: Dropdown button
  variant: secondary
  children:
    - {component: DropdownItem, children: [Action]}
    - {component: DropdownItem, children: [Another action]}
",
        );
        assert_eq!(
            html,
            concat!(
                r#"<div class="dropdown">"#,
                r#"<button class="btn btn-secondary dropdown-toggle" type="button" data-bs-toggle="dropdown" aria-expanded="false">Dropdown button</button>"#,
                r#"<ul class="dropdown-menu">"#,
                r##"<li><a class="dropdown-item" href="#">Action</a></li>"##,
                r##"<li><a class="dropdown-item" href="#">Another action</a></li>"##,
                "</ul></div>",
            )
        );
    }

    #[test]
    fn test_dropdown_button_size_and_menu() {
        let html = render_yaml(
            "- {component: DropdownButton, title: Big, variant: secondary, size: lg, align: end, dark: true}",
        );
        assert_eq!(
            html,
            concat!(
                r#"<div class="dropdown">"#,
                r#"<button class="btn btn-secondary dropdown-toggle btn-lg" type="button" data-bs-toggle="dropdown" aria-expanded="false">Big</button>"#,
                r#"<ul class="dropdown-menu dropdown-menu-end dropdown-menu-dark"></ul>"#,
                "</div>",
            )
        );
    }

    #[test]
    fn test_dropdown_button_direction() {
        let html = render_yaml("- {component: DropdownButton, title: Up, direction: up, centered: true}");
        assert!(html.starts_with(r#"<div class="dropup dropup-center"><button class="btn btn-primary dropdown-toggle""#));
    }

    #[test]
    fn test_split_button() {
        let html = render_yaml(
            r"
- component: SplitButton
  title: Primary
  variant: primary
  size: sm
  children:
    - {component: DropdownItem, children: [Action]}
",
        );
        assert_eq!(
            html,
            concat!(
                r#"<div class="dropdown"><div class="btn-group" role="group">"#,
                r#"<button class="btn btn-primary btn-sm" type="button">Primary</button>"#,
                r#"<button class="btn btn-primary dropdown-toggle dropdown-toggle-split btn-sm" type="button" data-bs-toggle="dropdown" aria-expanded="false">"#,
                r#"<span class="visually-hidden">Toggle dropdown</span></button>"#,
                r#"<ul class="dropdown-menu">"#,
                r##"<li><a class="dropdown-item" href="#">Action</a></li>"##,
                "</ul></div></div>",
            )
        );
    }

    #[test]
    fn test_split_button_link_and_toggle_label() {
        let html = render_yaml(
            "- {component: SplitButton, title: Go, variant: danger, href: /go, toggle_label: Custom toggle}",
        );
        assert!(html.contains(r#"<a class="btn btn-danger" href="/go" role="button">Go</a>"#));
        assert!(html.contains(r#"<span class="visually-hidden">Custom toggle</span>"#));
    }
}

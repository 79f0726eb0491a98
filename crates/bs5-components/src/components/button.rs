//! Buttons and the close button.

use std::fmt::Write;

use serde::Deserialize;

use crate::attrs::{Attrs, HtmlAttrs};
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::node::{Component, Node, render_element};
use crate::types::{ButtonTag, ButtonType, ButtonVariant, CloseVariant, Size};

/// Button rendered as `<button>` or as an anchor styled like a button.
///
/// The tag is `as` when given, otherwise `a` when `href` is set or the
/// variant is `link`, otherwise `button`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Button {
    #[serde(rename = "as")]
    pub tag: Option<ButtonTag>,
    pub variant: ButtonVariant,
    pub outline: bool,
    pub size: Option<Size>,
    pub active: bool,
    pub disabled: bool,
    #[serde(rename = "type")]
    pub kind: ButtonType,
    pub href: Option<String>,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Button {
    fn tag(&self) -> ButtonTag {
        match self.tag {
            Some(tag) => tag,
            None if self.href.is_some() || self.variant == ButtonVariant::Link => ButtonTag::A,
            None => ButtonTag::Button,
        }
    }

    fn variant_class(&self) -> String {
        match self.variant {
            ButtonVariant::Link => "btn-link".to_owned(),
            variant if self.outline => format!("btn-outline-{variant}"),
            variant => format!("btn-{variant}"),
        }
    }
}

impl Component for Button {
    const NAME: &'static str = "Button";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let tag = self.tag();
        let is_link = tag == ButtonTag::A;

        let mut attrs = HtmlAttrs::new(&self.attrs)
            .class("btn")
            .class(self.variant_class())
            .class_opt(self.size.map(|size| format!("btn-{size}")))
            .class_if(self.active, "active")
            .class_if(self.disabled && is_link, "disabled");

        if is_link {
            attrs = attrs
                .default("href", self.href.as_deref().unwrap_or("#"))
                .default("role", "button");
            if self.disabled {
                attrs = attrs.default("aria-disabled", "true").default("tabindex", "-1");
            }
        } else {
            attrs = attrs
                .default("type", self.kind.as_str())
                .default("disabled", self.disabled);
        }

        render_element(tag.as_str(), attrs, &self.children, ctx, out)
    }
}

/// Dismiss button with the `btn-close` icon.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CloseButton {
    pub variant: Option<CloseVariant>,
    pub disabled: bool,
    pub aria_label: Option<String>,
    pub attrs: Attrs,
}

impl Component for CloseButton {
    const NAME: &'static str = "CloseButton";

    fn render(&self, _ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("btn-close")
            .class_opt(self.variant.map(|variant| format!("btn-close-{variant}")))
            .set("type", "button")
            .default("aria-label", self.aria_label.as_deref().unwrap_or("Close"))
            .set("disabled", self.disabled);
        let _ = write!(out, "<button{attrs}></button>");
        Ok(())
    }
}

/// Close button dismissing the enclosing `target` (`alert`, `modal`, ...).
pub(crate) fn write_dismiss_button(
    out: &mut String,
    target: &str,
    label: &str,
    variant: Option<CloseVariant>,
) {
    let caller = Attrs::new();
    let attrs = HtmlAttrs::new(&caller)
        .class("btn-close")
        .class_opt(variant.map(|variant| format!("btn-close-{variant}")))
        .set("type", "button")
        .set("data-bs-dismiss", target.to_owned())
        .set("aria-label", label);
    let _ = write!(out, "<button{attrs}></button>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::{render_one, render_yaml};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_button() {
        let html = render_one(Button {
            children: vec![Node::text("Save")],
            ..Button::default()
        });
        assert_eq!(html, r#"<button class="btn btn-primary" type="button">Save</button>"#);
    }

    #[test]
    fn test_outline_size_active_disabled() {
        let html = render_yaml(
            "- {component: Button, variant: danger, outline: true, size: lg, active: true, disabled: true, type: submit}",
        );
        assert_eq!(
            html,
            r#"<button class="btn btn-outline-danger btn-lg active" type="submit" disabled></button>"#
        );
    }

    #[test]
    fn test_href_selects_anchor() {
        let html = render_yaml("- {component: Button, href: /docs, children: [Docs]}");
        assert_eq!(
            html,
            r#"<a class="btn btn-primary" href="/docs" role="button">Docs</a>"#
        );
    }

    #[test]
    fn test_link_variant_selects_anchor() {
        let html = render_yaml("- {component: Button, variant: link, outline: true}");
        assert_eq!(html, r##"<a class="btn btn-link" href="#" role="button"></a>"##);
    }

    #[test]
    fn test_explicit_tag_wins_over_href() {
        let html = render_yaml("- {component: Button, as: button, href: /x}");
        assert_eq!(html, r#"<button class="btn btn-primary" type="button"></button>"#);
    }

    #[test]
    fn test_disabled_link() {
        let html = render_yaml("- {component: Button, as: a, disabled: true}");
        assert_eq!(
            html,
            r##"<a class="btn btn-primary disabled" href="#" role="button" aria-disabled="true" tabindex="-1"></a>"##
        );
    }

    #[test]
    fn test_caller_attrs_override_defaults() {
        let html = render_yaml(
            "- {component: Button, attrs: {type: reset, class: w-100, data-id: '7'}}",
        );
        assert_eq!(
            html,
            r#"<button class="btn btn-primary w-100" type="reset" data-id="7"></button>"#
        );
    }

    #[test]
    fn test_close_button() {
        assert_eq!(
            render_one(CloseButton::default()),
            r#"<button class="btn-close" type="button" aria-label="Close"></button>"#
        );
        assert_eq!(
            render_yaml("- {component: CloseButton, variant: white, disabled: true, aria_label: Hide}"),
            r#"<button class="btn-close btn-close-white" type="button" aria-label="Hide" disabled></button>"#
        );
    }

    #[test]
    fn test_dismiss_button() {
        let mut out = String::new();
        write_dismiss_button(&mut out, "modal", "Close", None);
        assert_eq!(
            out,
            r#"<button class="btn-close" type="button" data-bs-dismiss="modal" aria-label="Close"></button>"#
        );
    }
}

//! Modal dialogs.

use std::fmt::Write;

use serde::Deserialize;

use crate::attrs::{Attrs, HtmlAttrs};
use crate::components::button::write_dismiss_button;
use crate::components::enabled;
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::node::{Component, Node, render_children, render_element};
use crate::types::{Backdrop, ButtonTag, CloseVariant, HeadingLevel, ModalSize, Responsive};

const MODAL: &str = "modal";

#[derive(Clone, Debug)]
struct ModalFrame {
    id: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Modal {
    pub size: Option<ModalSize>,
    /// `true` for always fullscreen, or the breakpoint below which it is.
    pub fullscreen: Option<Responsive>,
    pub centered: bool,
    pub scrollable: bool,
    pub backdrop: Option<Backdrop>,
    #[serde(default = "enabled")]
    pub keyboard: bool,
    #[serde(default = "enabled")]
    pub fade: bool,
    pub dialog_class: Option<String>,
    pub content_class: Option<String>,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for Modal {
    fn default() -> Self {
        Self {
            size: None,
            fullscreen: None,
            centered: false,
            scrollable: false,
            backdrop: None,
            keyboard: true,
            fade: true,
            dialog_class: None,
            content_class: None,
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl Modal {
    fn dialog_classes(&self) -> String {
        let mut classes = String::from("modal-dialog");
        if let Some(size) = self.size {
            let _ = write!(classes, " modal-{size}");
        }
        if let Some(class) = self
            .fullscreen
            .and_then(|fullscreen| fullscreen.class("modal-fullscreen", "-down"))
        {
            let _ = write!(classes, " {class}");
        }
        if self.centered {
            classes.push_str(" modal-dialog-centered");
        }
        if self.scrollable {
            classes.push_str(" modal-dialog-scrollable");
        }
        if let Some(class) = &self.dialog_class {
            let _ = write!(classes, " {class}");
        }
        classes
    }
}

impl Component for Modal {
    const NAME: &'static str = "Modal";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let id = self.attrs.id_or(|| format!("modal-{}", ctx.next_id()));
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("modal")
            .class_if(self.fade, "fade")
            .set("id", id.clone())
            .default("tabindex", "-1")
            .default("aria-labelledby", format!("{id}-label"))
            .default("aria-hidden", "true")
            .default_opt("data-bs-backdrop", self.backdrop.map(Backdrop::as_str))
            .default_opt("data-bs-keyboard", (!self.keyboard).then_some("false"));

        let caller = Attrs::new();
        let dialog = HtmlAttrs::new(&caller).class(self.dialog_classes());
        let content = HtmlAttrs::new(&caller)
            .class("modal-content")
            .class_opt(self.content_class.as_deref());

        let _ = write!(out, "<div{attrs}><div{dialog}><div{content}>");
        ctx.provide(MODAL, ModalFrame { id }, |ctx| {
            render_children(&self.children, ctx, out)
        })?;
        out.push_str("</div></div></div>");
        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModalHeader {
    #[serde(default = "enabled")]
    pub close_button: bool,
    pub close_label: String,
    pub close_variant: Option<CloseVariant>,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for ModalHeader {
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

impl Component for ModalHeader {
    const NAME: &'static str = "ModalHeader";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).default_class("modal-header");
        let _ = write!(out, "<div{attrs}>");
        render_children(&self.children, ctx, out)?;
        if self.close_button {
            write_dismiss_button(out, MODAL, &self.close_label, self.close_variant);
        }
        out.push_str("</div>");
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModalBody {
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for ModalBody {
    const NAME: &'static str = "ModalBody";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).default_class("modal-body");
        render_element("div", attrs, &self.children, ctx, out)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModalFooter {
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for ModalFooter {
    const NAME: &'static str = "ModalFooter";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).default_class("modal-footer");
        render_element("div", attrs, &self.children, ctx, out)
    }
}

/// Dialog title, labelled for the enclosing modal.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModalTitle {
    #[serde(rename = "as")]
    pub tag: HeadingLevel,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for ModalTitle {
    fn default() -> Self {
        Self {
            tag: HeadingLevel::H5,
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl Component for ModalTitle {
    const NAME: &'static str = "ModalTitle";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let modal: &ModalFrame = ctx.inject(MODAL, Self::NAME, Modal::NAME)?;
        let attrs = HtmlAttrs::new(&self.attrs)
            .default_class("modal-title")
            .default("id", format!("{}-label", modal.id));
        render_element(self.tag.as_str(), attrs, &self.children, ctx, out)
    }
}

/// Button or link that opens the enclosing modal.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModalToggle {
    #[serde(rename = "as")]
    pub tag: ButtonTag,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for ModalToggle {
    const NAME: &'static str = "ModalToggle";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let modal: &ModalFrame = ctx.inject(MODAL, Self::NAME, Modal::NAME)?;
        let attrs = HtmlAttrs::new(&self.attrs)
            .default("data-bs-toggle", "modal")
            .default("data-bs-target", format!("#{}", modal.id));
        render_element(self.tag.as_str(), attrs, &self.children, ctx, out)
    }
}

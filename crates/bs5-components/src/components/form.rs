//! Forms and form controls.
//!
//! [`FormGroup`] and [`FloatingLabel`] publish a control id in the
//! `form_group` context frame; labels and controls inside them use it for
//! `for` and `id` unless they set their own.

use std::fmt::Write;

use serde::Deserialize;

use crate::attrs::{Attrs, HtmlAttrs};
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::html::escape_html;
use crate::node::{Component, Node, render_children, render_element};
use crate::types::{FormCheckType, Size, TagName};

const FORM_GROUP: &str = "form_group";

/// State shared by a [`FormGroup`] or [`FloatingLabel`] with its controls.
#[derive(Clone, Debug)]
struct FormGroupFrame {
    control_id: Option<String>,
}

/// `own` when set, otherwise the control id of the enclosing group.
fn control_id(ctx: &RenderContext, own: Option<&String>) -> Result<Option<String>, RenderError> {
    if let Some(id) = own {
        return Ok(Some(id.clone()));
    }
    let frame = ctx.try_inject::<FormGroupFrame>(FORM_GROUP)?;
    Ok(frame.and_then(|frame| frame.control_id.clone()))
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Form {
    /// Show validation feedback (`was-validated`).
    pub validated: bool,
    pub novalidate: bool,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for Form {
    const NAME: &'static str = "Form";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs)
            .class_if(self.validated, "was-validated")
            .default("novalidate", self.novalidate);
        render_element("form", attrs, &self.children, ctx, out)
    }
}

/// Groups a label with its control under a shared control id.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormGroup {
    pub control_id: Option<String>,
    #[serde(rename = "as")]
    pub tag: TagName,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for FormGroup {
    fn default() -> Self {
        Self {
            control_id: None,
            tag: TagName::from_static("div"),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl Component for FormGroup {
    const NAME: &'static str = "FormGroup";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let frame = FormGroupFrame {
            control_id: self.control_id.clone().filter(|id| !id.is_empty()),
        };
        let attrs = HtmlAttrs::new(&self.attrs);
        ctx.provide(FORM_GROUP, frame, |ctx| {
            render_element(self.tag.as_str(), attrs, &self.children, ctx, out)
        })
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormLabel {
    /// Id of the labelled control; defaults to the group's control id.
    #[serde(rename = "for")]
    pub target: Option<String>,
    /// Label of a horizontal form row (`col-form-label`).
    pub column: bool,
    pub visually_hidden: bool,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for FormLabel {
    const NAME: &'static str = "FormLabel";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let target = control_id(ctx, self.target.as_ref())?;
        let attrs = HtmlAttrs::new(&self.attrs)
            .class(if self.column { "col-form-label" } else { "form-label" })
            .class_if(self.visually_hidden, "visually-hidden")
            .default_opt("for", target);
        render_element("label", attrs, &self.children, ctx, out)
    }
}

/// Text-like `<input>`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormControl {
    /// Input type; `text` when absent.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub size: Option<Size>,
    /// Read-only value styled as plain text.
    pub plaintext: bool,
    pub id: Option<String>,
    pub name: Option<String>,
    pub placeholder: Option<String>,
    pub value: Option<String>,
    pub readonly: bool,
    pub disabled: bool,
    pub attrs: Attrs,
}

impl Component for FormControl {
    const NAME: &'static str = "FormControl";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let id = control_id(ctx, self.id.as_ref())?;
        let attrs = HtmlAttrs::new(&self.attrs)
            .class(if self.plaintext { "form-control-plaintext" } else { "form-control" })
            .class_opt(self.size.map(|size| format!("form-control-{size}")))
            .default("type", self.kind.as_deref().unwrap_or("text"))
            .default_opt("id", id)
            .default_opt("name", self.name.as_deref())
            .default_opt("placeholder", self.placeholder.as_deref())
            .default_opt("value", self.value.as_deref())
            .default("readonly", self.readonly)
            .default("disabled", self.disabled);
        let _ = write!(out, "<input{attrs}>");
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormTextarea {
    pub id: Option<String>,
    pub name: Option<String>,
    pub placeholder: Option<String>,
    pub rows: Option<u32>,
    /// Initial text.
    pub value: Option<String>,
    pub readonly: bool,
    pub disabled: bool,
    pub attrs: Attrs,
}

impl Component for FormTextarea {
    const NAME: &'static str = "FormTextarea";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let id = control_id(ctx, self.id.as_ref())?;
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("form-control")
            .default_opt("id", id)
            .default_opt("name", self.name.as_deref())
            .default_opt("placeholder", self.placeholder.as_deref())
            .default_opt("rows", self.rows)
            .default("readonly", self.readonly)
            .default("disabled", self.disabled);
        let _ = write!(
            out,
            "<textarea{attrs}>{}</textarea>",
            escape_html(self.value.as_deref().unwrap_or_default())
        );
        Ok(())
    }
}

/// `<select>`; options are given as children.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormSelect {
    pub size: Option<Size>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub multiple: bool,
    pub disabled: bool,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for FormSelect {
    const NAME: &'static str = "FormSelect";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let id = control_id(ctx, self.id.as_ref())?;
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("form-select")
            .class_opt(self.size.map(|size| format!("form-select-{size}")))
            .default_opt("id", id)
            .default_opt("name", self.name.as_deref())
            .default("multiple", self.multiple)
            .default("disabled", self.disabled);
        render_element("select", attrs, &self.children, ctx, out)
    }
}

/// Checkbox, radio or switch with its label. Caller attributes apply to the
/// wrapper.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormCheck {
    #[serde(rename = "type")]
    pub kind: FormCheckType,
    pub label: Option<String>,
    pub inline: bool,
    pub reverse: bool,
    /// Input id; generated when absent.
    pub id: Option<String>,
    pub name: Option<String>,
    pub value: Option<String>,
    pub checked: bool,
    pub disabled: bool,
    pub attrs: Attrs,
}

impl Component for FormCheck {
    const NAME: &'static str = "FormCheck";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let input_id = match &self.id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => format!("formcheck-{}", ctx.next_id()),
        };
        let switch = self.kind == FormCheckType::Switch;
        let input_type = if switch { "checkbox" } else { self.kind.as_str() };

        let wrapper = HtmlAttrs::new(&self.attrs)
            .class("form-check")
            .class_if(switch, "form-switch")
            .class_if(self.inline, "form-check-inline")
            .class_if(self.reverse, "form-check-reverse");
        let none = Attrs::new();
        let input = HtmlAttrs::new(&none)
            .class("form-check-input")
            .set("type", input_type)
            .set_opt("role", switch.then_some("switch"))
            .set_opt("name", self.name.as_deref())
            .set("id", input_id.as_str())
            .set_opt("value", self.value.as_deref())
            .set("checked", self.checked)
            .set("disabled", self.disabled);

        let _ = write!(out, "<div{wrapper}><input{input}>");
        if let Some(label) = &self.label {
            let _ = write!(
                out,
                r#"<label class="form-check-label" for="{}">{}</label>"#,
                escape_html(&input_id),
                escape_html(label)
            );
        }
        out.push_str("</div>");
        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormText {
    #[serde(rename = "as")]
    pub tag: TagName,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for FormText {
    fn default() -> Self {
        Self {
            tag: TagName::from_static("div"),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl Component for FormText {
    const NAME: &'static str = "FormText";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).class("form-text");
        render_element(self.tag.as_str(), attrs, &self.children, ctx, out)
    }
}

/// Bare `.form-floating` wrapper; the label is written by the caller.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormFloating {
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for FormFloating {
    const NAME: &'static str = "FormFloating";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).class("form-floating");
        render_element("div", attrs, &self.children, ctx, out)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: Option<f64>,
    pub disabled: bool,
    pub id: Option<String>,
    pub name: Option<String>,
    pub attrs: Attrs,
}

impl Default for FormRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            value: None,
            disabled: false,
            id: None,
            name: None,
            attrs: Attrs::new(),
        }
    }
}

impl Component for FormRange {
    const NAME: &'static str = "FormRange";

    fn render(&self, _ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("form-range")
            .set("type", "range")
            .default("min", self.min)
            .default("max", self.max)
            .default("step", self.step)
            .default_opt("value", self.value)
            .default_opt("id", self.id.as_deref())
            .default_opt("name", self.name.as_deref())
            .default("disabled", self.disabled);
        let _ = write!(out, "<input{attrs}>");
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputGroup {
    pub size: Option<Size>,
    pub nowrap: bool,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for InputGroup {
    const NAME: &'static str = "InputGroup";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("input-group")
            .class_opt(self.size.map(|size| format!("input-group-{size}")))
            .class_if(self.nowrap, "flex-nowrap");
        render_element("div", attrs, &self.children, ctx, out)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputGroupText {
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for InputGroupText {
    const NAME: &'static str = "InputGroupText";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).default_class("input-group-text");
        render_element("span", attrs, &self.children, ctx, out)
    }
}

/// Radio button addon. Caller attributes apply to the input.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputGroupRadio {
    pub attrs: Attrs,
}

impl Component for InputGroupRadio {
    const NAME: &'static str = "InputGroupRadio";

    fn render(&self, _ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        write_check_addon(out, &self.attrs, "radio");
        Ok(())
    }
}

/// Checkbox addon. Caller attributes apply to the input.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputGroupCheckbox {
    pub attrs: Attrs,
}

impl Component for InputGroupCheckbox {
    const NAME: &'static str = "InputGroupCheckbox";

    fn render(&self, _ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        write_check_addon(out, &self.attrs, "checkbox");
        Ok(())
    }
}

fn write_check_addon(out: &mut String, caller: &Attrs, kind: &'static str) {
    let attrs = HtmlAttrs::new(caller)
        .default_class("form-check-input mt-0")
        .default("type", kind);
    let _ = write!(out, r#"<div class="input-group-text"><input{attrs}></div>"#);
}

/// Wraps a form control and places its label after it. `control_id` is
/// passed to the wrapped control.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FloatingLabel {
    pub label: String,
    /// Id of the wrapped control, used for the label's `for`.
    #[serde(default)]
    pub control_id: Option<String>,
    #[serde(default)]
    pub attrs: Attrs,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Component for FloatingLabel {
    const NAME: &'static str = "FloatingLabel";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let frame = FormGroupFrame {
            control_id: self.control_id.clone(),
        };
        let attrs = HtmlAttrs::new(&self.attrs).default_class("form-floating");
        let _ = write!(out, "<div{attrs}>");
        ctx.provide(FORM_GROUP, frame, |ctx| render_children(&self.children, ctx, out))?;
        match &self.control_id {
            Some(id) => {
                let _ = write!(out, r#"<label for="{}">"#, escape_html(id));
            }
            None => out.push_str("<label>"),
        }
        let _ = write!(out, "{}</label></div>", escape_html(&self.label));
        Ok(())
    }
}

//! Checkbox and radio inputs styled as buttons.

use std::fmt::Write;

use serde::Deserialize;

use crate::attrs::{Attrs, HtmlAttrs};
use crate::components::enabled;
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::node::{Component, Node, render_element};
use crate::types::{Size, ToggleType, Variant};

const TOGGLE_GROUP: &str = "toggle_button_group";

/// Input settings a group hands down to its buttons.
#[derive(Clone, Debug)]
struct ToggleGroupFrame {
    name: String,
    kind: ToggleType,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToggleButtonGroup {
    pub name: String,
    #[serde(rename = "type", default = "radio")]
    pub kind: ToggleType,
    #[serde(default)]
    pub vertical: bool,
    #[serde(default)]
    pub size: Option<Size>,
    #[serde(default)]
    pub attrs: Attrs,
    #[serde(default)]
    pub children: Vec<Node>,
}

fn radio() -> ToggleType {
    ToggleType::Radio
}

impl Component for ToggleButtonGroup {
    const NAME: &'static str = "ToggleButtonGroup";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs)
            .class(if self.vertical {
                "btn-group-vertical"
            } else {
                "btn-group"
            })
            .class_opt(self.size.map(|size| format!("btn-group-{size}")))
            .set("role", "group");
        let frame = ToggleGroupFrame {
            name: self.name.clone(),
            kind: self.kind,
        };
        ctx.provide(TOGGLE_GROUP, frame, |ctx| {
            render_element("div", attrs, &self.children, ctx, out)
        })
    }
}

/// A hidden `btn-check` input followed by its button-styled label.
///
/// Inside a [`ToggleButtonGroup`] the input's `type` and `name` default to
/// the group's. Caller attributes apply to the label.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToggleButton {
    #[serde(rename = "type")]
    pub kind: Option<ToggleType>,
    pub name: Option<String>,
    pub value: Option<String>,
    pub checked: bool,
    pub disabled: bool,
    pub variant: Variant,
    #[serde(default = "enabled")]
    pub outline: bool,
    pub size: Option<Size>,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for ToggleButton {
    fn default() -> Self {
        Self {
            kind: None,
            name: None,
            value: None,
            checked: false,
            disabled: false,
            variant: Variant::default(),
            outline: true,
            size: None,
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl Component for ToggleButton {
    const NAME: &'static str = "ToggleButton";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let group = ctx.try_inject::<ToggleGroupFrame>(TOGGLE_GROUP)?;
        let kind = self
            .kind
            .or(group.map(|group| group.kind))
            .unwrap_or_default();
        let name = self
            .name
            .clone()
            .or_else(|| group.map(|group| group.name.clone()));
        let id = format!("toggle-button-{}", ctx.next_id());

        let no_attrs = Attrs::new();
        let input = HtmlAttrs::new(&no_attrs)
            .class("btn-check")
            .set("type", kind.as_str())
            .set("id", id.clone())
            .set("autocomplete", "off")
            .set_opt("name", name)
            .set_opt("value", self.value.as_deref())
            .set("checked", self.checked)
            .set("disabled", self.disabled);
        let _ = write!(out, "<input{input}>");

        let variant = if self.outline {
            format!("btn btn-outline-{}", self.variant)
        } else {
            format!("btn btn-{}", self.variant)
        };
        let label = HtmlAttrs::new(&self.attrs)
            .class(variant)
            .class_opt(self.size.map(|size| format!("btn-{size}")))
            .set("for", id);
        render_element("label", label, &self.children, ctx, out)
    }
}

#[cfg(test)]
mod tests {
    use crate::components::test_util::render_yaml;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_standalone_checkbox() {
        assert_eq!(
            render_yaml("- {component: ToggleButton, checked: true, children: [Bold]}"),
            concat!(
                r#"<input class="btn-check" type="checkbox" id="toggle-button-c1" autocomplete="off" checked>"#,
                r#"<label class="btn btn-outline-primary" for="toggle-button-c1">Bold</label>"#,
            )
        );
    }

    #[test]
    fn test_group_supplies_type_and_name() {
        let html = render_yaml(
            r"
- component: ToggleButtonGroup
  name: align
  size: sm
  children:
    - {component: ToggleButton, value: left, checked: true, children: [Left]}
    - {component: ToggleButton, value: right, disabled: true, outline: false, variant: danger, children: [Right]}
",
        );
        assert_eq!(
            html,
            concat!(
                r#"<div class="btn-group btn-group-sm" role="group">"#,
                r#"<input class="btn-check" type="radio" id="toggle-button-c1" autocomplete="off" name="align" value="left" checked>"#,
                r#"<label class="btn btn-outline-primary" for="toggle-button-c1">Left</label>"#,
                r#"<input class="btn-check" type="radio" id="toggle-button-c2" autocomplete="off" name="align" value="right" disabled>"#,
                r#"<label class="btn btn-danger" for="toggle-button-c2">Right</label>"#,
                "</div>",
            )
        );
    }

    #[test]
    fn test_button_overrides_group() {
        let html = render_yaml(
            r"
- component: ToggleButtonGroup
  name: opts
  type: radio
  vertical: true
  children:
    - {component: ToggleButton, type: checkbox, name: own, size: lg, children: [X]}
",
        );
        assert_eq!(
            html,
            concat!(
                r#"<div class="btn-group-vertical" role="group">"#,
                r#"<input class="btn-check" type="checkbox" id="toggle-button-c1" autocomplete="off" name="own">"#,
                r#"<label class="btn btn-outline-primary btn-lg" for="toggle-button-c1">X</label>"#,
                "</div>",
            )
        );
    }
}

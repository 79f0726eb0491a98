use serde::Deserialize;

use crate::attrs::{Attrs, HtmlAttrs};
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::node::{Component, Node, render_element};
use crate::types::ButtonTag;

const COLLAPSE: &str = "collapse";

#[derive(Clone, Debug)]
struct CollapseFrame {
    id: String,
}

/// Collapsible region. Toggles inside it target it through the context.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Collapse {
    pub show: bool,
    pub horizontal: bool,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for Collapse {
    const NAME: &'static str = "Collapse";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let id = self.attrs.id_or(|| format!("collapse-{}", ctx.next_id()));
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("collapse")
            .class_if(self.horizontal, "collapse-horizontal")
            .class_if(self.show, "show")
            .set("id", id.clone());
        ctx.provide(COLLAPSE, CollapseFrame { id }, |ctx| {
            render_element("div", attrs, &self.children, ctx, out)
        })
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollapseToggle {
    #[serde(rename = "as")]
    pub tag: ButtonTag,
    pub expanded: bool,
    pub href: Option<String>,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for CollapseToggle {
    const NAME: &'static str = "CollapseToggle";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let collapse: &CollapseFrame = ctx.inject(COLLAPSE, Self::NAME, Collapse::NAME)?;
        let target = collapse.id.clone();
        let expanded = if self.expanded { "true" } else { "false" };

        let mut attrs = HtmlAttrs::new(&self.attrs);
        attrs = match self.tag {
            ButtonTag::Button => attrs
                .default("type", "button")
                .default("data-bs-toggle", "collapse")
                .default("data-bs-target", format!("#{target}")),
            ButtonTag::A => attrs
                .default(
                    "href",
                    self.href.clone().unwrap_or_else(|| format!("#{target}")),
                )
                .default("data-bs-toggle", "collapse")
                .default("role", "button"),
        };
        let attrs = attrs
            .default("aria-expanded", expanded)
            .default("aria-controls", target);
        render_element(self.tag.as_str(), attrs, &self.children, ctx, out)
    }
}

#[cfg(test)]
mod tests {
    use crate::components::test_util::render_yaml;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collapse_with_toggles() {
        let html = render_yaml(
            r"
- component: Collapse
  show: true
  children:
    - {component: CollapseToggle, children: [Toggle]}
    - {component: CollapseToggle, as: a, expanded: true, children: [Link]}
",
        );
        assert_eq!(
            html,
            concat!(
                r#"<div class="collapse show" id="collapse-c1">"#,
                r##"<button type="button" data-bs-toggle="collapse" data-bs-target="#collapse-c1" aria-expanded="false" aria-controls="collapse-c1">Toggle</button>"##,
                r##"<a href="#collapse-c1" data-bs-toggle="collapse" role="button" aria-expanded="true" aria-controls="collapse-c1">Link</a>"##,
                "</div>",
            )
        );
    }

    #[test]
    fn test_horizontal_with_caller_id() {
        assert_eq!(
            render_yaml("- {component: Collapse, horizontal: true, attrs: {id: side}}"),
            r#"<div class="collapse collapse-horizontal" id="side"></div>"#
        );
    }

    #[test]
    fn test_toggle_requires_collapse() {
        let nodes: Vec<crate::Node> =
            serde_yaml::from_str("- {component: CollapseToggle}").unwrap();
        let err = crate::render(&nodes, &mut crate::RenderContext::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'CollapseToggle' must be used as a child of 'Collapse' component"
        );
    }
}

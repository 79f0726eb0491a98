//! Accordion and its items.
//!
//! [`Accordion`] provides its id to the items so collapsing panels can name
//! their parent. Each [`AccordionItem`] provides the ids and open state its
//! header and body share.

use std::fmt::Write;

use serde::Deserialize;

use crate::attrs::{Attrs, HtmlAttrs};
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::node::{Component, Node, render_children, render_element};

const ACCORDION: &str = "accordion";
const ACCORDION_ITEM: &str = "accordion_item";

#[derive(Clone, Debug)]
struct AccordionFrame {
    id: String,
    always_open: bool,
}

#[derive(Clone, Debug)]
struct AccordionItemFrame {
    heading_id: String,
    collapse_id: String,
    open: bool,
    /// Parent selector for `data-bs-parent`, `None` when items stay open.
    parent: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Accordion {
    pub flush: bool,
    /// Opening an item leaves the others open.
    pub always_open: bool,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for Accordion {
    const NAME: &'static str = "Accordion";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let id = self.attrs.id_or(|| format!("accordion-{}", ctx.next_id()));
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("accordion")
            .class_if(self.flush, "accordion-flush")
            .set("id", id.clone());

        let frame = AccordionFrame {
            id,
            always_open: self.always_open,
        };
        ctx.provide(ACCORDION, frame, |ctx| {
            render_element("div", attrs, &self.children, ctx, out)
        })
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccordionItem {
    pub default_open: bool,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for AccordionItem {
    const NAME: &'static str = "AccordionItem";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let accordion: &AccordionFrame = ctx.inject(ACCORDION, Self::NAME, Accordion::NAME)?;
        let parent = (!accordion.always_open).then(|| format!("#{}", accordion.id));

        let item_id = ctx.next_id();
        let frame = AccordionItemFrame {
            heading_id: format!("heading-{item_id}"),
            collapse_id: format!("collapse-{item_id}"),
            open: self.default_open,
            parent,
        };

        let attrs = HtmlAttrs::new(&self.attrs).class("accordion-item");
        ctx.provide(ACCORDION_ITEM, frame, |ctx| {
            render_element("div", attrs, &self.children, ctx, out)
        })
    }
}

/// Item header wrapping an [`AccordionButton`].
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccordionHeader {
    pub disabled: bool,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for AccordionHeader {
    const NAME: &'static str = "AccordionHeader";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let item: &AccordionItemFrame = ctx.inject(ACCORDION_ITEM, Self::NAME, AccordionItem::NAME)?;
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("accordion-header")
            .set("id", item.heading_id.clone());
        let _ = write!(out, "<h2{attrs}>");
        AccordionButton::render_toggle(self.disabled, &Attrs::new(), &self.children, ctx, out)?;
        out.push_str("</h2>");
        Ok(())
    }
}

/// Button toggling the item's body.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccordionButton {
    pub disabled: bool,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl AccordionButton {
    fn render_toggle(
        disabled: bool,
        caller: &Attrs,
        children: &[Node],
        ctx: &mut RenderContext,
        out: &mut String,
    ) -> Result<(), RenderError> {
        let item: &AccordionItemFrame = ctx.inject(ACCORDION_ITEM, Self::NAME, AccordionItem::NAME)?;
        let attrs = HtmlAttrs::new(caller)
            .class("accordion-button")
            .class_if(!item.open, "collapsed")
            .set("type", "button")
            .set("data-bs-toggle", "collapse")
            .set("data-bs-target", format!("#{}", item.collapse_id))
            .default("aria-expanded", if item.open { "true" } else { "false" })
            .default("aria-controls", item.collapse_id.clone())
            .set("disabled", disabled);
        render_element("button", attrs, children, ctx, out)
    }
}

impl Component for AccordionButton {
    const NAME: &'static str = "AccordionButton";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        Self::render_toggle(self.disabled, &self.attrs, &self.children, ctx, out)
    }
}

/// Collapsible item body.
///
/// Caller attributes apply to the inner `.accordion-body`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccordionBody {
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for AccordionBody {
    const NAME: &'static str = "AccordionBody";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let item: &AccordionItemFrame = ctx.inject(ACCORDION_ITEM, Self::NAME, AccordionItem::NAME)?;
        let none = Attrs::new();
        let collapse = HtmlAttrs::new(&none)
            .class("accordion-collapse collapse")
            .class_if(item.open, "show")
            .set("id", item.collapse_id.clone())
            .set("aria-labelledby", item.heading_id.clone())
            .set_opt("data-bs-parent", item.parent.clone());
        let _ = write!(out, "<div{collapse}>");

        let attrs = HtmlAttrs::new(&self.attrs).class("accordion-body");
        let _ = write!(out, "<div{attrs}>");
        render_children(&self.children, ctx, out)?;
        out.push_str("</div></div>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::{context, render_yaml};
    use pretty_assertions::assert_eq;

    const ITEM: &str = r"
- component: Accordion
  flush: {flush}
  always_open: {always_open}
  children:
    - component: AccordionItem
      default_open: true
      children:
        - {component: AccordionHeader, children: [First]}
        - {component: AccordionBody, children: [Body]}
";

    fn accordion(flush: bool, always_open: bool) -> String {
        render_yaml(
            &ITEM
                .replace("{flush}", &flush.to_string())
                .replace("{always_open}", &always_open.to_string()),
        )
    }

    #[test]
    fn test_open_item() {
        assert_eq!(
            accordion(false, false),
            concat!(
                r#"<div class="accordion" id="accordion-c1">"#,
                r#"<div class="accordion-item">"#,
                r#"<h2 class="accordion-header" id="heading-c2">"#,
                r##"<button class="accordion-button" type="button" data-bs-toggle="collapse" data-bs-target="#collapse-c2" aria-expanded="true" aria-controls="collapse-c2">First</button>"##,
                r#"</h2>"#,
                r##"<div class="accordion-collapse collapse show" id="collapse-c2" aria-labelledby="heading-c2" data-bs-parent="#accordion-c1">"##,
                r#"<div class="accordion-body">Body</div></div>"#,
                r#"</div></div>"#,
            )
        );
    }

    #[test]
    fn test_flush_always_open_has_no_parent() {
        let html = accordion(true, true);
        assert!(html.starts_with(r#"<div class="accordion accordion-flush" id="accordion-c1">"#));
        assert!(!html.contains("data-bs-parent"));
    }

    #[test]
    fn test_closed_item_is_collapsed() {
        let html = render_yaml(
            r"
- component: Accordion
  children:
    - component: AccordionItem
      children:
        - {component: AccordionHeader, disabled: true, children: [Title]}
        - {component: AccordionBody}
",
        );
        assert!(html.contains(r#"class="accordion-button collapsed""#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(" disabled>Title</button>"));
        assert!(html.contains(r#"<div class="accordion-collapse collapse" id="#));
    }

    #[test]
    fn test_caller_id_reaches_items() {
        let html = render_yaml(
            r"
- component: Accordion
  attrs: {id: faq}
  children:
    - component: AccordionItem
      children:
        - {component: AccordionBody}
",
        );
        assert!(html.starts_with(r#"<div class="accordion" id="faq">"#));
        assert!(html.contains(r##"data-bs-parent="#faq""##));
    }

    #[test]
    fn test_item_requires_accordion() {
        let mut out = String::new();
        let err = AccordionItem::default()
            .render(&mut context(), &mut out)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "'AccordionItem' must be used as a child of 'Accordion' component"
        );
    }

    #[test]
    fn test_header_requires_item() {
        let err = crate::node::render(
            &[Accordion {
                children: vec![AccordionHeader::default().into()],
                ..Accordion::default()
            }
            .into()],
            &mut context(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RenderError::MissingContext {
                component: "AccordionHeader",
                ancestor: "AccordionItem"
            }
        );
    }
}

use serde::Deserialize;

use crate::attrs::{Attrs, HtmlAttrs};
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::node::{Component, Node, render_element};
use crate::types::{ListGroupItemTag, ListGroupTag, Responsive, Variant};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListGroup {
    /// Defaults to `ol` for numbered groups, `ul` otherwise.
    #[serde(rename = "as")]
    pub tag: Option<ListGroupTag>,
    pub flush: bool,
    pub numbered: bool,
    pub horizontal: Option<Responsive>,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for ListGroup {
    const NAME: &'static str = "ListGroup";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let tag = self.tag.unwrap_or(if self.numbered {
            ListGroupTag::Ol
        } else {
            ListGroupTag::Ul
        });
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("list-group")
            .class_if(self.flush, "list-group-flush")
            .class_if(self.numbered, "list-group-numbered")
            .class_opt(
                self.horizontal
                    .and_then(|horizontal| horizontal.class("list-group-horizontal", "")),
            );
        render_element(tag.as_str(), attrs, &self.children, ctx, out)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListGroupItem {
    /// Defaults to `a` when `href` is set, `li` otherwise.
    #[serde(rename = "as")]
    pub tag: Option<ListGroupItemTag>,
    pub variant: Option<Variant>,
    pub active: bool,
    pub disabled: bool,
    /// Hover and focus styles for interactive items.
    pub action: bool,
    pub href: Option<String>,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl ListGroupItem {
    fn tag(&self) -> ListGroupItemTag {
        match (self.tag, &self.href) {
            (Some(tag), _) => tag,
            (None, Some(_)) => ListGroupItemTag::A,
            (None, None) => ListGroupItemTag::Li,
        }
    }
}

impl Component for ListGroupItem {
    const NAME: &'static str = "ListGroupItem";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let tag = self.tag();
        let interactive = matches!(tag, ListGroupItemTag::A | ListGroupItemTag::Button);

        let mut attrs = HtmlAttrs::new(&self.attrs)
            .class("list-group-item")
            .class_if(self.action || interactive, "list-group-item-action")
            .class_opt(self.variant.map(|variant| format!("list-group-item-{variant}")))
            .class_if(self.active, "active")
            .class_if(self.disabled, "disabled");
        attrs = match tag {
            ListGroupItemTag::A => attrs.default_opt("href", self.href.as_deref()),
            ListGroupItemTag::Button => attrs
                .default("type", "button")
                .default("disabled", self.disabled),
            ListGroupItemTag::Li | ListGroupItemTag::Div => attrs,
        };
        let attrs = attrs
            .default_opt("aria-current", self.active.then_some("true"))
            .default_opt(
                "aria-disabled",
                (self.disabled && tag != ListGroupItemTag::Button).then_some("true"),
            );
        render_element(tag.as_str(), attrs, &self.children, ctx, out)
    }
}

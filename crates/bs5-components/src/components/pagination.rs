//! Pagination lists.

use std::fmt::Write;

use serde::Deserialize;

use crate::attrs::{Attrs, HtmlAttrs};
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::node::{Component, Node, render_children, render_element};
use crate::types::Size;

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Pagination {
    pub size: Option<Size>,
    pub aria_label: String,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            size: None,
            aria_label: "Page navigation".to_owned(),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl Component for Pagination {
    const NAME: &'static str = "Pagination";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).default("aria-label", self.aria_label.as_str());
        let caller = Attrs::new();
        let list = HtmlAttrs::new(&caller)
            .class("pagination")
            .class_opt(self.size.map(|size| format!("pagination-{size}")));
        let _ = write!(out, "<nav{attrs}>");
        render_element("ul", list, &self.children, ctx, out)?;
        out.push_str("</nav>");
        Ok(())
    }
}

/// Numbered page entry.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationItem {
    pub active: bool,
    pub disabled: bool,
    pub href: String,
    pub aria_label: Option<String>,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for PaginationItem {
    fn default() -> Self {
        Self {
            active: false,
            disabled: false,
            href: "#".to_owned(),
            aria_label: None,
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl Component for PaginationItem {
    const NAME: &'static str = "PaginationItem";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let item = HtmlAttrs::new(&self.attrs)
            .class("page-item")
            .class_if(self.active, "active")
            .class_if(self.disabled, "disabled");
        let caller = Attrs::new();
        let link = disabled_link(&caller, &self.href, self.disabled)
            .set_opt("aria-label", self.aria_label.as_deref())
            .set_opt("aria-current", self.active.then_some("page"));

        let _ = write!(out, "<li{item}>");
        render_element("a", link, &self.children, ctx, out)?;
        out.push_str("</li>");
        Ok(())
    }
}

/// Alias of [`PaginationItem`].
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct PageItem(pub PaginationItem);

impl Component for PageItem {
    const NAME: &'static str = "PageItem";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        self.0.render(ctx, out)
    }
}

/// Bare `page-link` anchor for custom items.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageLink {
    pub href: String,
    pub aria_label: Option<String>,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for PageLink {
    fn default() -> Self {
        Self {
            href: "#".to_owned(),
            aria_label: None,
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl Component for PageLink {
    const NAME: &'static str = "PageLink";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs)
            .default_class("page-link")
            .default("href", self.href.as_str())
            .default_opt("aria-label", self.aria_label.as_deref());
        render_element("a", attrs, &self.children, ctx, out)
    }
}

fn disabled_link<'a>(caller: &'a Attrs, href: &str, disabled: bool) -> HtmlAttrs<'a> {
    let link = HtmlAttrs::new(caller).class("page-link").set("href", href);
    if disabled {
        link.set("tabindex", "-1").set("aria-disabled", "true")
    } else {
        link
    }
}

/// First, previous, next and last entries share one layout: a glyph that
/// children may replace and a visually hidden label.
macro_rules! edge_item {
    ($(#[$meta:meta])* $name:ident, $glyph:literal, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct $name {
            pub disabled: bool,
            pub href: String,
            pub attrs: Attrs,
            /// Replaces the default glyph.
            pub children: Vec<Node>,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    disabled: false,
                    href: "#".to_owned(),
                    attrs: Attrs::new(),
                    children: Vec::new(),
                }
            }
        }

        impl Component for $name {
            const NAME: &'static str = stringify!($name);

            fn render(
                &self,
                ctx: &mut RenderContext,
                out: &mut String,
            ) -> Result<(), RenderError> {
                let item = HtmlAttrs::new(&self.attrs)
                    .class("page-item")
                    .class_if(self.disabled, "disabled");
                let caller = Attrs::new();
                let link = disabled_link(&caller, &self.href, self.disabled);
                let _ = write!(out, r#"<li{item}><a{link}><span aria-hidden="true">"#);
                write_glyph(&self.children, $glyph, ctx, out)?;
                let _ = write!(
                    out,
                    r#"</span><span class="visually-hidden">{}</span></a></li>"#,
                    $label
                );
                Ok(())
            }
        }
    };
}

edge_item!(PaginationFirst, "«", "First");
edge_item!(PaginationPrev, "‹", "Previous");
edge_item!(PaginationNext, "›", "Next");
edge_item!(PaginationLast, "»", "Last");

fn write_glyph(
    children: &[Node],
    glyph: &str,
    ctx: &mut RenderContext,
    out: &mut String,
) -> Result<(), RenderError> {
    if children.is_empty() {
        out.push_str(glyph);
        Ok(())
    } else {
        render_children(children, ctx, out)
    }
}

/// Gap marker between page ranges.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationEllipsis {
    pub disabled: bool,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for PaginationEllipsis {
    const NAME: &'static str = "PaginationEllipsis";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let item = HtmlAttrs::new(&self.attrs)
            .class("page-item")
            .class_if(self.disabled, "disabled");
        let _ = write!(
            out,
            r#"<li{item}><span class="page-link"><span aria-hidden="true">"#
        );
        write_glyph(&self.children, "…", ctx, out)?;
        out.push_str(r#"</span><span class="visually-hidden">More</span></span></li>"#);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::{render_one, render_yaml};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pagination() {
        let html = render_yaml(
            r"
- component: Pagination
  size: sm
  children:
    - {component: PaginationPrev, disabled: true}
    - {component: PaginationItem, href: '?page=1', active: true, children: ['1']}
    - {component: PageItem, href: '?page=2', children: ['2']}
    - {component: PaginationEllipsis}
    - {component: PaginationNext, href: '?page=2'}
",
        );
        assert_eq!(
            html,
            concat!(
                r#"<nav aria-label="Page navigation"><ul class="pagination pagination-sm">"#,
                r##"<li class="page-item disabled"><a class="page-link" href="#" tabindex="-1" aria-disabled="true"><span aria-hidden="true">‹</span><span class="visually-hidden">Previous</span></a></li>"##,
                r#"<li class="page-item active"><a class="page-link" href="?page=1" aria-current="page">1</a></li>"#,
                r#"<li class="page-item"><a class="page-link" href="?page=2">2</a></li>"#,
                r#"<li class="page-item"><span class="page-link"><span aria-hidden="true">…</span><span class="visually-hidden">More</span></span></li>"#,
                r#"<li class="page-item"><a class="page-link" href="?page=2"><span aria-hidden="true">›</span><span class="visually-hidden">Next</span></a></li>"#,
                "</ul></nav>",
            )
        );
    }

    #[test]
    fn test_first_and_last_glyphs() {
        let first = render_one(PaginationFirst::default());
        assert!(first.contains(
            r#"<span aria-hidden="true">«</span><span class="visually-hidden">First</span>"#
        ));
        let last = render_one(PaginationLast::default());
        assert!(last.contains(
            r#"<span aria-hidden="true">»</span><span class="visually-hidden">Last</span>"#
        ));
    }

    #[test]
    fn test_children_replace_glyph() {
        assert_eq!(
            render_yaml("- {component: PaginationFirst, href: /p/1, children: [Start]}"),
            r#"<li class="page-item"><a class="page-link" href="/p/1"><span aria-hidden="true">Start</span><span class="visually-hidden">First</span></a></li>"#
        );
    }

    #[test]
    fn test_item_aria_label_and_custom_nav_label() {
        let html = render_yaml(
            r"
- component: Pagination
  aria_label: Results pages
  attrs: {class: mt-4}
  children:
    - {component: PaginationItem, aria_label: Page 3, children: ['3']}
",
        );
        assert_eq!(
            html,
            r##"<nav class="mt-4" aria-label="Results pages"><ul class="pagination"><li class="page-item"><a class="page-link" href="#" aria-label="Page 3">3</a></li></ul></nav>"##
        );
    }

    #[test]
    fn test_page_link_defaults() {
        assert_eq!(
            render_yaml("- {component: PageLink, href: /next, aria_label: Next page, children: [Next]}"),
            r#"<a class="page-link" href="/next" aria-label="Next page">Next</a>"#
        );
    }

    #[test]
    fn test_page_item_alias_name() {
        assert_eq!(PageItem::NAME, "PageItem");
        let node: Node = serde_yaml::from_str("{component: PageItem, active: true}").unwrap();
        let Node::Element(element) = node else {
            panic!("expected element");
        };
        assert_eq!(element.name(), "PageItem");
    }
}

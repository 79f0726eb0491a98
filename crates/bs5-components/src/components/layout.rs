//! Grid layout: containers, rows and columns.

use std::fmt::Write;

use serde::Deserialize;

use crate::attrs::{Attrs, HtmlAttrs};
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::node::{Component, Node, render_element};
use crate::types::{ColSize, ContainerFluid, TagName};

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Container {
    pub fluid: ContainerFluid,
    #[serde(rename = "as")]
    pub tag: TagName,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            fluid: ContainerFluid::default(),
            tag: TagName::from_static("div"),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl Component for Container {
    const NAME: &'static str = "Container";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).class(self.fluid.class());
        render_element(self.tag.as_str(), attrs, &self.children, ctx, out)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Row {
    /// Gutter on both axes (`g-*`).
    pub gutter: Option<u8>,
    pub gutter_x: Option<u8>,
    pub gutter_y: Option<u8>,
    /// Columns per row (`row-cols-*`).
    pub cols: Option<ColSize>,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for Row {
    const NAME: &'static str = "Row";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("row")
            .class_opt(self.gutter.map(|g| format!("g-{g}")))
            .class_opt(self.gutter_x.map(|g| format!("gx-{g}")))
            .class_opt(self.gutter_y.map(|g| format!("gy-{g}")))
            .class_opt(self.cols.map(|cols| format!("row-cols-{cols}")));
        render_element("div", attrs, &self.children, ctx, out)
    }
}

/// Grid column. Without any size it is an equal-width `col`.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Col {
    /// Span at every breakpoint.
    pub col: Option<ColSize>,
    pub sm: Option<ColSize>,
    pub md: Option<ColSize>,
    pub lg: Option<ColSize>,
    pub xl: Option<ColSize>,
    pub xxl: Option<ColSize>,
    #[serde(rename = "as")]
    pub tag: TagName,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for Col {
    fn default() -> Self {
        Self {
            col: None,
            sm: None,
            md: None,
            lg: None,
            xl: None,
            xxl: None,
            tag: TagName::from_static("div"),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl Col {
    fn classes(&self) -> String {
        let mut classes = String::new();
        if let Some(size) = self.col {
            let _ = write!(classes, "col-{size}");
        }
        let breakpoints = [
            ("sm", self.sm),
            ("md", self.md),
            ("lg", self.lg),
            ("xl", self.xl),
            ("xxl", self.xxl),
        ];
        for (breakpoint, size) in breakpoints {
            if let Some(size) = size {
                if !classes.is_empty() {
                    classes.push(' ');
                }
                let _ = write!(classes, "col-{breakpoint}-{size}");
            }
        }
        if classes.is_empty() {
            classes.push_str("col");
        }
        classes
    }
}

impl Component for Col {
    const NAME: &'static str = "Col";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).class(self.classes());
        render_element(self.tag.as_str(), attrs, &self.children, ctx, out)
    }
}

#[cfg(test)]
mod tests {
    use crate::components::test_util::render_yaml;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_container_widths() {
        assert_eq!(
            render_yaml("- {component: Container, children: [Content]}"),
            r#"<div class="container">Content</div>"#
        );
        assert_eq!(
            render_yaml("- {component: Container, fluid: true}"),
            r#"<div class="container-fluid"></div>"#
        );
        assert_eq!(
            render_yaml("- {component: Container, fluid: md, as: main}"),
            r#"<main class="container-md"></main>"#
        );
    }

    #[test]
    fn test_equal_width_columns() {
        let html = render_yaml(
            r"
- component: Container
  children:
    - component: Row
      children:
        - {component: Col, children: [Column]}
        - {component: Col, children: [Column]}
",
        );
        assert_eq!(
            html,
            r#"<div class="container"><div class="row"><div class="col">Column</div><div class="col">Column</div></div></div>"#
        );
    }

    #[test]
    fn test_responsive_columns() {
        let html = render_yaml(
            r"
- component: Row
  children:
    - {component: Col, md: 8, children: [a]}
    - {component: Col, col: 6, md: 4, children: [b]}
    - {component: Col, col: auto, children: [c]}
    - {component: Col, sm: 4, xxl: auto}
",
        );
        assert_eq!(
            html,
            concat!(
                r#"<div class="row">"#,
                r#"<div class="col-md-8">a</div>"#,
                r#"<div class="col-6 col-md-4">b</div>"#,
                r#"<div class="col-auto">c</div>"#,
                r#"<div class="col-sm-4 col-xxl-auto"></div>"#,
                "</div>",
            )
        );
    }

    #[test]
    fn test_row_gutters_and_cols() {
        assert_eq!(
            render_yaml("- {component: Row, gutter: 3}"),
            r#"<div class="row g-3"></div>"#
        );
        assert_eq!(
            render_yaml("- {component: Row, cols: 2, gutter_x: 1, gutter_y: 5, attrs: {class: mt-2}}"),
            r#"<div class="row gx-1 gy-5 row-cols-2 mt-2"></div>"#
        );
    }
}

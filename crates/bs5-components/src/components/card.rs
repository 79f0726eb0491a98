//! Cards and their sections.

use std::fmt::Write;

use serde::Deserialize;

use crate::attrs::{Attrs, HtmlAttrs};
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::node::{Component, Node, render_element};
use crate::types::{CardImgPosition, TagName, TextAlign, TextColor, Variant};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Card {
    /// Background with matching text colour (`text-bg-*`).
    pub bg: Option<Variant>,
    pub text: Option<TextColor>,
    pub border: Option<Variant>,
    pub text_align: Option<TextAlign>,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for Card {
    const NAME: &'static str = "Card";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("card")
            .class_opt(self.bg.map(|bg| format!("text-bg-{bg}")))
            .class_opt(self.text.map(|text| format!("text-{text}")))
            .class_opt(self.border.map(|border| format!("border-{border}")))
            .class_opt(self.text_align.map(|align| format!("text-{align}")));
        render_element("div", attrs, &self.children, ctx, out)
    }
}

/// Card image; `position` selects the top or bottom cap.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardImg {
    pub src: String,
    pub alt: String,
    pub position: Option<CardImgPosition>,
    pub attrs: Attrs,
}

impl Component for CardImg {
    const NAME: &'static str = "CardImg";

    fn render(&self, _ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let class = match self.position {
            Some(position) => format!("card-img-{position}"),
            None => "card-img".to_owned(),
        };
        let attrs = HtmlAttrs::new(&self.attrs)
            .class(class)
            .default("src", self.src.as_str())
            .default("alt", self.alt.as_str());
        let _ = write!(out, "<img{attrs}>");
        Ok(())
    }
}

/// Declare a card section rendered as `<tag class="…">children</tag>`.
macro_rules! card_part {
    ($(#[$meta:meta])* $name:ident, $tag:literal, $class:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct $name {
            #[serde(rename = "as")]
            pub tag: TagName,
            pub attrs: Attrs,
            pub children: Vec<Node>,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    tag: TagName::from_static($tag),
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
                let attrs = HtmlAttrs::new(&self.attrs).class($class);
                render_element(self.tag.as_str(), attrs, &self.children, ctx, out)
            }
        }
    };
}

card_part!(CardHeader, "div", "card-header");
card_part!(CardBody, "div", "card-body");
card_part!(CardFooter, "div", "card-footer");
card_part!(CardTitle, "h5", "card-title");
card_part!(CardSubtitle, "h6", "card-subtitle");
card_part!(CardText, "p", "card-text");
card_part!(
    /// Image background with content laid over it.
    CardImgOverlay,
    "div",
    "card-img-overlay"
);

#[cfg(test)]
mod tests {
    use crate::components::test_util::render_yaml;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_card_with_top_image() {
        let html = render_yaml(
            r##"
- component: Card
  children:
    - {component: CardImg, src: "https://placehold.net/600x400.png", alt: Card image, position: top}
    - component: CardBody
      children:
        - {component: CardTitle, children: [Card title]}
        - {component: CardText, children: [Some quick example text.]}
        - {component: Html, html: '<a href="#" class="btn btn-primary">Go somewhere</a>'}
"##,
        );
        assert_eq!(
            html,
            concat!(
                r#"<div class="card">"#,
                r#"<img class="card-img-top" src="https://placehold.net/600x400.png" alt="Card image">"#,
                r#"<div class="card-body">"#,
                r#"<h5 class="card-title">Card title</h5>"#,
                r#"<p class="card-text">Some quick example text.</p>"#,
                r##"<a href="#" class="btn btn-primary">Go somewhere</a>"##,
                "</div></div>",
            )
        );
    }

    #[test]
    fn test_header_footer_and_alignment() {
        let html = render_yaml(
            r"
- component: Card
  text_align: center
  children:
    - {component: CardHeader, children: [Featured]}
    - {component: CardBody, children: [Body]}
    - {component: CardFooter, children: [2 days ago]}
",
        );
        assert_eq!(
            html,
            r#"<div class="card text-center"><div class="card-header">Featured</div><div class="card-body">Body</div><div class="card-footer">2 days ago</div></div>"#
        );
    }

    #[test]
    fn test_subtitle_and_bottom_image() {
        let html = render_yaml(
            r"
- component: Card
  children:
    - component: CardBody
      children:
        - {component: CardSubtitle, children: [Card subtitle]}
    - {component: CardImg, src: /a.png, alt: A, position: bottom}
",
        );
        assert_eq!(
            html,
            r#"<div class="card"><div class="card-body"><h6 class="card-subtitle">Card subtitle</h6></div><img class="card-img-bottom" src="/a.png" alt="A"></div>"#
        );
    }

    #[test]
    fn test_background_and_caller_attrs() {
        let html = render_yaml(
            r#"
- component: Card
  bg: primary
  attrs: {class: mb-3, style: "max-width: 18rem;"}
  children:
    - {component: CardHeader, children: [Header]}
"#,
        );
        assert_eq!(
            html,
            r#"<div class="card text-bg-primary mb-3" style="max-width: 18rem;"><div class="card-header">Header</div></div>"#
        );
    }

    #[test]
    fn test_border_and_text_end() {
        assert_eq!(
            render_yaml("- {component: Card, border: primary, text_align: end}"),
            r#"<div class="card border-primary text-end"></div>"#
        );
    }

    #[test]
    fn test_plain_image_and_overlay() {
        let html = render_yaml(
            r"
- component: Card
  children:
    - {component: CardImg, src: /bg.png, alt: ''}
    - component: CardImgOverlay
      children:
        - {component: CardTitle, as: h4, children: [Over]}
",
        );
        assert_eq!(
            html,
            r#"<div class="card"><img class="card-img" src="/bg.png" alt=""><div class="card-img-overlay"><h4 class="card-title">Over</h4></div></div>"#
        );
    }
}

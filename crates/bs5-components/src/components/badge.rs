use serde::Deserialize;

use crate::attrs::{Attrs, HtmlAttrs};
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::node::{Component, Node, render_element};
use crate::types::{BgColor, TagName, TextColor};

/// Small count or label.
///
/// Without a `text` colour the background uses the `text-bg-*` helper so the
/// text contrast follows the background.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Badge {
    pub bg: BgColor,
    pub text: Option<TextColor>,
    pub pill: bool,
    #[serde(rename = "as")]
    pub tag: TagName,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for Badge {
    fn default() -> Self {
        Self {
            bg: BgColor::Primary,
            text: None,
            pill: false,
            tag: TagName::from_static("span"),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl Component for Badge {
    const NAME: &'static str = "Badge";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let background = match self.text {
            None => format!("text-bg-{}", self.bg),
            Some(_) => format!("bg-{}", self.bg),
        };
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("badge")
            .class(background)
            .class_if(self.pill, "rounded-pill")
            .class_opt(self.text.map(|text| format!("text-{text}")));
        render_element(self.tag.as_str(), attrs, &self.children, ctx, out)
    }
}

#[cfg(test)]
mod tests {
    use crate::components::test_util::render_yaml;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_badge_defaults() {
        assert_eq!(
            render_yaml("- {component: Badge, children: ['4']}"),
            r#"<span class="badge text-bg-primary">4</span>"#
        );
    }

    #[test]
    fn test_badge_with_text_colour_and_pill() {
        assert_eq!(
            render_yaml("- {component: Badge, bg: light, text: dark, pill: true, as: div}"),
            r#"<div class="badge bg-light rounded-pill text-dark"></div>"#
        );
    }
}

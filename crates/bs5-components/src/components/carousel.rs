//! Carousel with indicators built from its items.
//!
//! Like [`Tabs`](super::Tabs), the carousel renders its slides first and
//! writes the indicators once it knows how many items registered.

use std::fmt::Write;

use serde::Deserialize;

use crate::attrs::{Attrs, HtmlAttrs};
use crate::components::enabled;
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::node::{Component, Node, render, render_element};
use crate::registry::Registry;
use crate::types::{Pause, Ride, Theme};

const CAROUSEL: &str = "carousel";

#[derive(Clone, Debug)]
struct CarouselFrame {
    id: String,
    registry: Registry<SlideDescriptor>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SlideDescriptor {
    active: bool,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Carousel {
    /// Crossfade instead of sliding.
    pub fade: bool,
    #[serde(default = "enabled")]
    pub controls: bool,
    #[serde(default = "enabled")]
    pub indicators: bool,
    pub ride: Ride,
    /// Delay between slides in milliseconds.
    pub interval: Option<u32>,
    #[serde(default = "enabled")]
    pub keyboard: bool,
    pub pause: Pause,
    #[serde(default = "enabled")]
    pub touch: bool,
    pub theme: Option<Theme>,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for Carousel {
    fn default() -> Self {
        Self {
            fade: false,
            controls: true,
            indicators: true,
            ride: Ride::default(),
            interval: None,
            keyboard: true,
            pause: Pause::default(),
            touch: true,
            theme: None,
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl Component for Carousel {
    const NAME: &'static str = "Carousel";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let id = self.attrs.id_or(|| format!("carousel-{}", ctx.next_id()));
        let registry = Registry::new();
        let frame = CarouselFrame {
            id: id.clone(),
            registry: registry.handle(),
        };
        let slides = ctx.provide(CAROUSEL, frame, |ctx| render(&self.children, ctx))?;
        let items = registry.take();
        tracing::debug!(carousel = %id, count = items.len(), "Rendering carousel");

        let attrs = HtmlAttrs::new(&self.attrs)
            .class("carousel slide")
            .class_if(self.fade, "carousel-fade")
            .set("id", id.clone())
            .default_opt("data-bs-ride", self.ride.attr())
            .default_opt("data-bs-interval", self.interval.filter(|ms| *ms != 0))
            .default("data-bs-keyboard", bool_str(self.keyboard))
            .default("data-bs-pause", self.pause.as_str())
            .default("data-bs-touch", bool_str(self.touch))
            .default_opt("data-bs-theme", self.theme.map(Theme::as_str));
        let _ = write!(out, "<div{attrs}>");

        if self.indicators {
            out.push_str(r#"<div class="carousel-indicators">"#);
            for (idx, item) in items.iter().enumerate() {
                let _ = write!(
                    out,
                    r##"<button type="button" data-bs-target="#{id}" data-bs-slide-to="{idx}"{} aria-label="Slide {}"></button>"##,
                    if item.active {
                        r#" class="active" aria-current="true""#
                    } else {
                        ""
                    },
                    idx + 1
                );
            }
            out.push_str("</div>");
        }

        let _ = write!(out, r#"<div class="carousel-inner">{slides}</div>"#);

        if self.controls {
            for (direction, label) in [("prev", "Previous"), ("next", "Next")] {
                let _ = write!(
                    out,
                    r##"<button class="carousel-control-{direction}" type="button" data-bs-target="#{id}" data-bs-slide="{direction}"><span class="carousel-control-{direction}-icon" aria-hidden="true"></span><span class="visually-hidden">{label}</span></button>"##
                );
            }
        }

        out.push_str("</div>");
        Ok(())
    }
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// A slide. Only slides marked `active` start visible.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselItem {
    pub active: bool,
    pub interval: Option<u32>,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for CarouselItem {
    const NAME: &'static str = "CarouselItem";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let carousel: &CarouselFrame = ctx.inject(CAROUSEL, Self::NAME, Carousel::NAME)?;
        carousel.registry.append(SlideDescriptor {
            active: self.active,
        });

        let attrs = HtmlAttrs::new(&self.attrs)
            .class("carousel-item")
            .class_if(self.active, "active")
            .default_opt("data-bs-interval", self.interval);
        render_element("div", attrs, &self.children, ctx, out)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselCaption {
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for CarouselCaption {
    const NAME: &'static str = "CarouselCaption";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).default_class("carousel-caption d-none d-md-block");
        render_element("div", attrs, &self.children, ctx, out)
    }
}

/// Standalone indicator button for custom indicator layouts.
///
/// Targets the enclosing carousel when there is one.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselIndicator {
    pub slide_to: u32,
    pub active: bool,
    pub aria_label: Option<String>,
    pub attrs: Attrs,
}

impl Component for CarouselIndicator {
    const NAME: &'static str = "CarouselIndicator";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let target = ctx
            .try_inject::<CarouselFrame>(CAROUSEL)?
            .map(|carousel| format!("#{}", carousel.id))
            .unwrap_or_default();
        let label = self
            .aria_label
            .clone()
            .unwrap_or_else(|| format!("Slide {}", self.slide_to + 1));

        let attrs = HtmlAttrs::new(&self.attrs)
            .default_class(if self.active { "active" } else { "" })
            .default("type", "button")
            .default("data-bs-target", target)
            .default("data-bs-slide-to", self.slide_to)
            .default_opt("aria-current", self.active.then_some("true"))
            .default("aria-label", label);
        let _ = write!(out, "<button{attrs}></button>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::{context, render_one, render_yaml};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_indicators_follow_items() {
        let html = render_yaml(
            r"
- component: Carousel
  children:
    - {component: CarouselItem, active: true, children: [A]}
    - {component: CarouselItem, children: [B]}
    - {component: CarouselItem, interval: 2000, children: [C]}
",
        );

        assert!(html.starts_with(
            r#"<div class="carousel slide" id="carousel-c1" data-bs-keyboard="true" data-bs-pause="hover" data-bs-touch="true">"#
        ));
        assert_eq!(html.matches("data-bs-slide-to=").count(), 3);
        assert!(html.contains(
            r##"<button type="button" data-bs-target="#carousel-c1" data-bs-slide-to="0" class="active" aria-current="true" aria-label="Slide 1"></button>"##
        ));
        assert!(html.contains(
            r##"<button type="button" data-bs-target="#carousel-c1" data-bs-slide-to="2" aria-label="Slide 3"></button>"##
        ));
        assert!(html.contains(
            r#"<div class="carousel-inner"><div class="carousel-item active">A</div><div class="carousel-item">B</div><div class="carousel-item" data-bs-interval="2000">C</div></div>"#
        ));
        assert!(html.contains(r#"data-bs-slide="prev""#));
        assert!(html.contains(r#"<span class="visually-hidden">Next</span>"#));
    }

    #[test]
    fn test_slides_rendered_once() {
        let html = render_yaml(
            r"
- component: Carousel
  children:
    - {component: CarouselItem, children: [Only]}
",
        );
        assert_eq!(html.matches("Only").count(), 1);
    }

    #[test]
    fn test_options_without_indicators_or_controls() {
        let html = render_yaml(
            r"
- component: Carousel
  fade: true
  controls: false
  indicators: false
  ride: true
  interval: 5000
  keyboard: false
  pause: false
  touch: false
  theme: dark
  attrs: {id: hero}
",
        );
        assert_eq!(
            html,
            r#"<div class="carousel slide carousel-fade" id="hero" data-bs-ride="carousel" data-bs-interval="5000" data-bs-keyboard="false" data-bs-pause="false" data-bs-touch="false" data-bs-theme="dark"><div class="carousel-inner"></div></div>"#
        );
    }

    #[test]
    fn test_zero_interval_omitted() {
        let html = render_yaml(
            r"
- component: Carousel
  interval: 0
  controls: false
  indicators: false
  attrs: {id: c}
  children:
    - {component: CarouselItem, active: true, children: [A]}
",
        );
        assert!(!html.contains("data-bs-interval"));
        assert!(html.starts_with(r#"<div class="carousel slide" id="c" data-bs-keyboard="true""#));
    }

    #[test]
    fn test_item_requires_carousel() {
        let err = CarouselItem::default()
            .render(&mut context(), &mut String::new())
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::MissingContext {
                component: "CarouselItem",
                ancestor: "Carousel"
            }
        );
    }

    #[test]
    fn test_caption_default_class() {
        assert_eq!(
            render_yaml("- {component: CarouselCaption, children: [Hi]}"),
            r#"<div class="carousel-caption d-none d-md-block">Hi</div>"#
        );
    }

    #[test]
    fn test_indicator_outside_carousel() {
        assert_eq!(
            render_one(CarouselIndicator {
                slide_to: 1,
                active: true,
                ..CarouselIndicator::default()
            }),
            r#"<button class="active" type="button" data-bs-target="" data-bs-slide-to="1" aria-current="true" aria-label="Slide 2"></button>"#
        );
    }

    #[test]
    fn test_indicator_inside_carousel_targets_it() {
        let html = render_yaml(
            r"
- component: Carousel
  indicators: false
  controls: false
  attrs: {id: gallery}
  children:
    - {component: CarouselIndicator}
",
        );
        assert!(html.contains(r##"data-bs-target="#gallery""##));
    }
}

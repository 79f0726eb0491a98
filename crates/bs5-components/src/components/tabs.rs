//! Tabs container and tab panes.
//!
//! [`Tabs`] renders in two passes. While its children render, each [`Tab`]
//! registers a [`TabDescriptor`] with the registry published in the `tabs`
//! context frame and emits no markup of its own. Once all children have
//! rendered, `Tabs` discards their direct output and writes the nav strip and
//! the panes from the collected descriptors.

use std::fmt::Write;

use serde::Deserialize;

use crate::attrs::{Attrs, HtmlAttrs};
use crate::components::enabled;
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::html::{escape_html, slugify};
use crate::node::{Component, Node, render, render_element};
use crate::registry::Registry;
use crate::types::{NavVariant, TagName};

const TABS: &str = "tabs";

/// State shared by a [`Tabs`] container with its tabs.
#[derive(Clone, Debug)]
struct TabsFrame {
    /// Namespace for derived ids.
    id: String,
    /// Key of the tab active by default.
    default: Option<String>,
    registry: Registry<TabDescriptor>,
    /// `false` inside a tab, where further tabs are not allowed.
    enabled: bool,
}

impl TabsFrame {
    /// Frame provided to the content of a tab.
    fn disabled() -> Self {
        Self {
            id: String::new(),
            default: None,
            registry: Registry::new(),
            enabled: false,
        }
    }
}

/// A tab collected by a [`Tabs`] container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabDescriptor {
    pub key: String,
    pub title: String,
    /// Id of the nav button.
    pub nav_id: String,
    /// Id of the content pane.
    pub pane_id: String,
    pub active: bool,
    pub disabled: bool,
    /// Extra classes for the nav button.
    pub class: Option<String>,
    /// Rendered content, trimmed.
    pub content: String,
}

/// Tabbed interface built from [`Tab`] children.
///
/// # Example
///
/// ```
/// use bs5_components::{render, ComponentIds, IdStrategy, Node, RenderContext, Tab, Tabs};
///
/// let tabs = Tabs {
///     id: Some("settings".to_owned()),
///     children: vec![
///         Tab::new("general", "General").with_children(vec![Node::text("A")]).into(),
///         Tab::new("advanced", "Advanced").with_children(vec![Node::text("B")]).into(),
///     ],
///     ..Tabs::default()
/// };
///
/// let mut ctx = RenderContext::with_ids(ComponentIds::new(IdStrategy::Sequential));
/// let html = render(&[tabs.into()], &mut ctx).unwrap();
/// assert!(html.contains(r#"<ul class="nav nav-tabs" id="settings" role="tablist">"#));
/// assert!(html.contains(r#"id="settings-pane-general" role="tabpanel""#));
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tabs {
    /// Id of the tab list; generated when absent.
    pub id: Option<String>,
    /// Key of the tab shown first.
    #[serde(alias = "default_active_tab")]
    pub default: Option<String>,
    pub variant: NavVariant,
    pub fill: bool,
    pub justified: bool,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for Tabs {
    const NAME: &'static str = "Tabs";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let id = match &self.id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => format!("tabs-{}", ctx.next_id()),
        };
        let default = self.default.clone().filter(|key| !key.is_empty());

        let registry = Registry::new();
        let frame = TabsFrame {
            id: id.clone(),
            default,
            registry: registry.handle(),
            enabled: true,
        };

        // Direct output of the children is whitespace or stray text; the
        // panes re-emit the tab content.
        ctx.provide(TABS, frame, |ctx| render(&self.children, ctx))?;

        let mut tabs = registry.take();
        if !tabs.is_empty() && !tabs.iter().any(|tab| tab.active) {
            tracing::warn!(
                tabs = %id,
                default = ?self.default,
                "Default tab matches no tab, activating the first one"
            );
            tabs[0].active = true;
        }

        tracing::debug!(tabs = %id, count = tabs.len(), "Rendering tabs");
        self.render_tabs(&id, &tabs, out);
        Ok(())
    }
}

impl Tabs {
    fn render_tabs(&self, id: &str, tabs: &[TabDescriptor], out: &mut String) {
        out.reserve(256 + tabs.iter().map(|tab| tab.content.len() + 384).sum::<usize>());

        let _ = write!(out, "<div{}>", HtmlAttrs::new(&self.attrs));
        let _ = write!(
            out,
            r#"<ul class="nav nav-{}{}{}" id="{}" role="tablist">"#,
            self.variant,
            if self.fill { " nav-fill" } else { "" },
            if self.justified { " nav-justified" } else { "" },
            escape_html(id)
        );
        for tab in tabs {
            render_nav_item(tab, out);
        }
        out.push_str(r#"</ul><div class="tab-content">"#);
        for tab in tabs {
            let _ = write!(
                out,
                r#"<div class="tab-pane fade{}" id="{}" role="tabpanel" aria-labelledby="{}" tabindex="0">{}</div>"#,
                if tab.active { " show active" } else { "" },
                tab.pane_id,
                tab.nav_id,
                tab.content
            );
        }
        out.push_str("</div></div>");
    }
}

fn render_nav_item(tab: &TabDescriptor, out: &mut String) {
    let mut class = String::from("nav-link");
    if tab.active {
        class.push_str(" active");
    }
    if tab.disabled {
        class.push_str(" disabled");
    }
    if let Some(extra) = tab.class.as_deref().filter(|c| !c.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }

    let _ = write!(
        out,
        r##"<li class="nav-item" role="presentation"><button class="{}" id="{}" data-bs-toggle="tab" data-bs-target="#{}" type="button" role="tab" aria-controls="{}" aria-selected="{}"{}>{}</button></li>"##,
        escape_html(&class),
        tab.nav_id,
        tab.pane_id,
        tab.pane_id,
        tab.active,
        if tab.disabled { " disabled" } else { "" },
        escape_html(&tab.title)
    );
}

/// A single tab of a [`Tabs`] container.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tab {
    /// Key unique within the container.
    #[serde(alias = "tab_id")]
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub disabled: bool,
    /// Extra classes for the nav button.
    #[serde(default, alias = "tab_class")]
    pub class: Option<String>,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Tab {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            disabled: false,
            class: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }
}

impl Component for Tab {
    const NAME: &'static str = "Tab";

    fn render(&self, ctx: &mut RenderContext, _out: &mut String) -> Result<(), RenderError> {
        let parent: &TabsFrame = ctx.inject(TABS, Self::NAME, Tabs::NAME)?;
        if !parent.enabled {
            return Err(RenderError::InvalidNesting {
                component: Self::NAME,
                ancestor: Tabs::NAME,
            });
        }

        let registry = parent.registry.handle();
        if registry.any(|tab| tab.key == self.key) {
            return Err(RenderError::DuplicateKey {
                component: Self::NAME,
                key: self.key.clone(),
            });
        }

        let namespace = slugify(&parent.id);
        let suffix = unique_suffix(&registry, &namespace, &self.key);
        let nav_id = format!("{namespace}-tab-{suffix}");
        let pane_id = format!("{namespace}-pane-{suffix}");

        let active = match &parent.default {
            Some(default) => self.key == *default,
            None => registry.is_empty(),
        };

        let content = ctx.provide(TABS, TabsFrame::disabled(), |ctx| {
            render(&self.children, ctx)
        })?;

        registry.append(TabDescriptor {
            key: self.key.clone(),
            title: self.title.clone(),
            nav_id,
            pane_id,
            active,
            disabled: self.disabled,
            class: self.class.clone(),
            content: content.trim().to_owned(),
        });
        Ok(())
    }
}

/// Id suffix for a tab key: its slug, or the tab's position when the key has
/// no slug. A suffix already taken by a sibling gets the position appended.
fn unique_suffix(registry: &Registry<TabDescriptor>, namespace: &str, key: &str) -> String {
    let index = registry.len();
    let mut suffix = slugify(key);
    if suffix.is_empty() {
        suffix = index.to_string();
    }
    while registry.any(|tab| tab.nav_id == format!("{namespace}-tab-{suffix}")) {
        suffix = format!("{suffix}-{index}");
    }
    suffix
}

/// Wrapper for manually assembled tab navigation and panes.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TabContainer {
    pub id: Option<String>,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Component for TabContainer {
    const NAME: &'static str = "TabContainer";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let id = match &self.id {
            Some(id) => id.clone(),
            None => format!("tab-container-{}", ctx.next_id()),
        };
        let attrs = HtmlAttrs::new(&self.attrs).default("id", id);
        render_element("div", attrs, &self.children, ctx, out)
    }
}

/// `.tab-content` wrapper for [`TabPane`]s.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TabContent {
    #[serde(rename = "as")]
    pub tag: TagName,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for TabContent {
    fn default() -> Self {
        Self {
            tag: TagName::from_static("div"),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl Component for TabContent {
    const NAME: &'static str = "TabContent";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs).default_class("tab-content");
        render_element(self.tag.as_str(), attrs, &self.children, ctx, out)
    }
}

/// A single pane inside a [`TabContent`].
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TabPane {
    pub active: bool,
    #[serde(default = "enabled")]
    pub fade: bool,
    #[serde(rename = "as")]
    pub tag: TagName,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Default for TabPane {
    fn default() -> Self {
        Self {
            active: false,
            fade: true,
            tag: TagName::from_static("div"),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }
}

impl Component for TabPane {
    const NAME: &'static str = "TabPane";

    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        let attrs = HtmlAttrs::new(&self.attrs)
            .class("tab-pane")
            .class_if(self.fade, "fade")
            .class_if(self.active, "show active")
            .default("role", "tabpanel")
            .default("tabindex", "0");
        render_element(self.tag.as_str(), attrs, &self.children, ctx, out)
    }
}

//! Bootstrap 5 components rendered to HTML from typed options.
//!
//! A document is a tree of [`Node`]s. Each element node holds the options of
//! one component; rendering walks the tree with a [`RenderContext`] that
//! carries ids and the values ancestors provide to their descendants.
//!
//! # Architecture
//!
//! - [`HtmlAttrs`] merges a component's computed classes and attributes
//!   with the caller's [`Attrs`].
//! - [`RenderContext::provide`] scopes a value to a subtree;
//!   [`RenderContext::inject`] reads the nearest one.
//! - Composites such as [`Tabs`] and [`Carousel`] render their children
//!   once to collect descriptors in a [`Registry`], then write the markup
//!   that depends on all of them.
//!
//! # Example
//!
//! ```
//! use bs5_components::{render, Node, RenderContext, ComponentIds, IdStrategy};
//!
//! let doc: Vec<Node> = serde_json::from_str(r#"[
//!     {"component": "Tabs", "children": [
//!         {"component": "Tab", "title": "Home", "children": ["Welcome"]},
//!         {"component": "Tab", "title": "Profile", "children": ["About me"]}
//!     ]}
//! ]"#).unwrap();
//!
//! let mut ctx = RenderContext::with_ids(ComponentIds::new(IdStrategy::Sequential));
//! let html = render(&doc, &mut ctx).unwrap();
//! assert!(html.contains(r#"id="tabs-c1-tab-home""#));
//! assert!(html.contains("About me"));
//! ```

mod attrs;
mod components;
mod context;
mod error;
mod html;
mod node;
mod registry;
mod types;

pub use attrs::{AttrValue, Attrs, HtmlAttrs};
pub use components::*;
pub use context::{ComponentIds, IdStrategy, RenderContext};
pub use error::RenderError;
pub use html::{escape_html, slugify};
pub use node::{COMPONENT_NAMES, Component, Element, Html, Node, render, render_children};
pub use registry::Registry;
pub use types::*;

//! HTML attribute collections and the merge rules between caller-supplied
//! and component-computed attributes.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::html::escape_html;

/// A single attribute value.
///
/// `true` renders as a bare attribute (`disabled`), `false` removes the
/// attribute entirely.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl AttrValue {
    /// Text of the value, or `None` for boolean values.
    fn text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Bool(_) => None,
            Self::Int(n) => Some(Cow::Owned(n.to_string())),
            Self::Float(n) => Some(Cow::Owned(n.to_string())),
            Self::Str(s) => Some(Cow::Borrowed(s)),
        }
    }

    fn write_attr(&self, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(false) => Ok(()),
            Self::Bool(true) => write!(f, " {name}"),
            other => {
                let text = other.text().unwrap_or_default();
                write!(f, r#" {name}="{}""#, escape_html(&text))
            }
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Caller-supplied attributes, kept in insertion order.
///
/// # Example
///
/// ```
/// use bs5_components::Attrs;
///
/// let attrs = Attrs::new().with("id", "main").with("class", "mb-3");
/// assert_eq!(attrs.get_str("id"), Some("main"));
/// assert_eq!(attrs.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Attrs(IndexMap<String, AttrValue>);

impl Attrs {
    /// Create an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace an attribute, keeping its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    /// Get an attribute as text. Boolean values have no text.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.0.get(name)? {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Caller-provided `id`, or `generated` when the caller left it out.
    ///
    /// Components that both render and publish an id use this so that a
    /// caller override reaches the children that reference it.
    #[must_use]
    pub fn id_or(&self, generated: impl FnOnce() -> String) -> String {
        match self.0.get("id").and_then(AttrValue::text) {
            Some(id) if !id.is_empty() => id.into_owned(),
            _ => generated(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// How a component-declared attribute combines with the caller's.
#[derive(Clone, Debug)]
enum Declared {
    /// The computed value wins.
    Forced(AttrValue),
    /// The caller's value wins when present.
    Default(AttrValue),
}

/// Attribute builder that merges computed attributes with caller attributes.
///
/// Rules:
///
/// - computed classes are concatenated with the caller's `class` (computed
///   first); default classes are only used when the caller gives no `class`
/// - [`set`](Self::set) attributes win over the caller
/// - [`default`](Self::default) attributes are replaced by a caller attribute
///   of the same name
/// - remaining caller attributes are appended in their original order
///
/// The rendered string starts with a space so it can be placed directly
/// after a tag name.
///
/// # Example
///
/// ```
/// use bs5_components::{Attrs, HtmlAttrs};
///
/// let caller = Attrs::new().with("class", "mb-3").with("role", "status");
/// let attrs = HtmlAttrs::new(&caller)
///     .class("alert alert-info")
///     .default("role", "alert")
///     .set("data-kind", "info");
///
/// assert_eq!(
///     attrs.to_string(),
///     r#" class="alert alert-info mb-3" role="status" data-kind="info""#
/// );
/// ```
#[derive(Clone, Debug)]
pub struct HtmlAttrs<'a> {
    caller: &'a Attrs,
    classes: Vec<String>,
    default_classes: Vec<String>,
    declared: Vec<(&'static str, Declared)>,
}

impl<'a> HtmlAttrs<'a> {
    #[must_use]
    pub fn new(caller: &'a Attrs) -> Self {
        Self {
            caller,
            classes: Vec::new(),
            default_classes: Vec::new(),
            declared: Vec::new(),
        }
    }

    /// Add one or more whitespace-separated classes.
    #[must_use]
    pub fn class(mut self, classes: impl AsRef<str>) -> Self {
        push_classes(&mut self.classes, classes.as_ref());
        self
    }

    /// Add classes when `condition` holds.
    #[must_use]
    pub fn class_if(self, condition: bool, classes: impl AsRef<str>) -> Self {
        if condition { self.class(classes) } else { self }
    }

    /// Add classes from an optional value.
    #[must_use]
    pub fn class_opt<S: AsRef<str>>(self, classes: Option<S>) -> Self {
        match classes {
            Some(classes) => self.class(classes),
            None => self,
        }
    }

    /// Classes used only when the caller supplies no `class`.
    #[must_use]
    pub fn default_class(mut self, classes: impl AsRef<str>) -> Self {
        push_classes(&mut self.default_classes, classes.as_ref());
        self
    }

    /// Set an attribute that wins over the caller's value.
    #[must_use]
    pub fn set(self, name: &'static str, value: impl Into<AttrValue>) -> Self {
        self.declare(name, Declared::Forced(value.into()))
    }

    /// [`set`](Self::set) when `value` is present.
    #[must_use]
    pub fn set_opt<V: Into<AttrValue>>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    /// Set an attribute the caller may override.
    #[must_use]
    pub fn default(self, name: &'static str, value: impl Into<AttrValue>) -> Self {
        self.declare(name, Declared::Default(value.into()))
    }

    /// [`default`](Self::default) when `value` is present.
    #[must_use]
    pub fn default_opt<V: Into<AttrValue>>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.default(name, value),
            None => self,
        }
    }

    fn declare(mut self, name: &'static str, declared: Declared) -> Self {
        if let Some(slot) = self.declared.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = declared;
        } else {
            self.declared.push((name, declared));
        }
        self
    }

    /// Final class list after merging with the caller.
    fn merged_classes(&self) -> Vec<&str> {
        let mut merged: Vec<&str> = self.classes.iter().map(String::as_str).collect();
        match self.caller.get("class") {
            Some(AttrValue::Str(caller)) => merged.extend(caller.split_whitespace()),
            Some(_) => {}
            None => merged.extend(self.default_classes.iter().map(String::as_str)),
        }
        merged
    }
}

impl fmt::Display for HtmlAttrs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let classes = self.merged_classes();
        if !classes.is_empty() {
            write!(f, r#" class="{}""#, escape_html(&classes.join(" ")))?;
        }

        for (name, declared) in &self.declared {
            let value = match declared {
                Declared::Forced(value) => value,
                Declared::Default(value) => self.caller.get(name).unwrap_or(value),
            };
            value.write_attr(name, f)?;
        }

        for (name, value) in self.caller.iter() {
            if name == "class" || self.declared.iter().any(|(n, _)| *n == name) {
                continue;
            }
            value.write_attr(name, f)?;
        }

        Ok(())
    }
}

fn push_classes(target: &mut Vec<String>, classes: &str) {
    target.extend(classes.split_whitespace().map(str::to_owned));
}

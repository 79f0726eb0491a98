//! Rendering context: scoped, typed values provided by ancestors to their
//! descendants, plus the id generator for the current render.

use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::RenderError;

/// Process-wide counter backing [`IdStrategy::Process`].
static PROCESS_IDS: AtomicU64 = AtomicU64::new(0);

/// How component ids are generated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// Process-wide counter, unique across renders.
    #[default]
    Process,
    /// Per-render counter starting at 1. Output is deterministic.
    Sequential,
    /// The same id for every component. Only useful for fixtures.
    Fixed(String),
}

/// Component id generator owned by a [`RenderContext`].
///
/// # Example
///
/// ```
/// use bs5_components::{ComponentIds, IdStrategy};
///
/// let mut ids = ComponentIds::new(IdStrategy::Sequential).with_prefix("tab");
/// assert_eq!(ids.next_id(), "tab1");
/// assert_eq!(ids.next_id(), "tab2");
/// ```
#[derive(Clone, Debug)]
pub struct ComponentIds {
    strategy: IdStrategy,
    prefix: String,
    issued: u64,
}

impl ComponentIds {
    pub const DEFAULT_PREFIX: &'static str = "c";

    #[must_use]
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            prefix: Self::DEFAULT_PREFIX.to_owned(),
            issued: 0,
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Issue the next id.
    pub fn next_id(&mut self) -> String {
        let n = match &self.strategy {
            IdStrategy::Process => PROCESS_IDS.fetch_add(1, Ordering::Relaxed) + 1,
            IdStrategy::Sequential => {
                self.issued += 1;
                self.issued
            }
            IdStrategy::Fixed(id) => return id.clone(),
        };
        format!("{}{n}", self.prefix)
    }
}

impl Default for ComponentIds {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}

struct Frame {
    name: &'static str,
    value: Box<dyn Any>,
}

/// Ambient state threaded through a single render.
///
/// Values are provided for the duration of a closure and are visible to
/// everything rendered inside it. The nearest frame with a given name wins.
///
/// # Example
///
/// ```
/// use bs5_components::RenderContext;
///
/// let mut ctx = RenderContext::new();
/// let seen = ctx.provide("theme", "dark", |ctx| {
///     ctx.inject::<&str>("theme", "Child", "Parent").map(|v| *v)
/// });
/// assert_eq!(seen.unwrap(), "dark");
/// assert_eq!(ctx.depth(), 0);
/// ```
#[derive(Default)]
pub struct RenderContext {
    frames: Vec<Frame>,
    ids: ComponentIds,
}

/// Pops frames above `depth` when dropped, including during unwinding.
struct Scope<'a> {
    ctx: &'a mut RenderContext,
    depth: usize,
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        self.ctx.frames.truncate(self.depth);
    }
}

impl RenderContext {
    /// Create a context with the process-wide id strategy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context using the given id generator.
    #[must_use]
    pub fn with_ids(ids: ComponentIds) -> Self {
        Self {
            frames: Vec::new(),
            ids,
        }
    }

    /// Number of frames currently provided.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Issue a component id.
    pub fn next_id(&mut self) -> String {
        self.ids.next_id()
    }

    /// Provide `value` under `name` while `f` runs.
    ///
    /// The frame is removed when `f` returns, whatever it returns.
    pub fn provide<T: Any, R>(
        &mut self,
        name: &'static str,
        value: T,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let depth = self.frames.len();
        tracing::trace!(name, depth, "Providing context");
        self.frames.push(Frame {
            name,
            value: Box::new(value),
        });
        let scope = Scope { ctx: self, depth };
        f(&mut *scope.ctx)
    }

    /// Look up the nearest value named `name`.
    ///
    /// Returns `Ok(None)` when no ancestor provided it, and
    /// [`RenderError::ContextType`] when the nearest frame holds another type.
    pub fn try_inject<T: Any>(&self, name: &str) -> Result<Option<&T>, RenderError> {
        let Some(frame) = self.frames.iter().rev().find(|frame| frame.name == name) else {
            tracing::trace!(name, "Context not provided");
            return Ok(None);
        };
        frame
            .value
            .downcast_ref::<T>()
            .map(Some)
            .ok_or_else(|| RenderError::ContextType {
                name: name.to_owned(),
            })
    }

    /// Look up a value that `component` requires from `ancestor`.
    pub fn inject<T: Any>(
        &self,
        name: &str,
        component: &'static str,
        ancestor: &'static str,
    ) -> Result<&T, RenderError> {
        self.try_inject(name)?
            .ok_or(RenderError::MissingContext {
                component,
                ancestor,
            })
    }

    /// Look up a value, falling back to `default` when absent.
    pub fn inject_or<'a, T: Any>(&'a self, name: &str, default: &'a T) -> Result<&'a T, RenderError> {
        Ok(self.try_inject(name)?.unwrap_or(default))
    }
}

impl std::fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.frames.iter().map(|frame| frame.name).collect();
        f.debug_struct("RenderContext")
            .field("frames", &names)
            .field("ids", &self.ids)
            .finish()
    }
}

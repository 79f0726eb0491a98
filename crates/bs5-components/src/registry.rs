//! Ordered descriptor list shared between a container and its children.

use std::cell::RefCell;
use std::rc::Rc;

/// Append-only list of child descriptors.
///
/// The container keeps one owner and hands a [`handle`](Self::handle) to its
/// children through the rendering context. Descriptors stay in the order the
/// children rendered.
///
/// # Example
///
/// ```
/// use bs5_components::Registry;
///
/// let registry = Registry::new();
/// let handle = registry.handle();
/// handle.append("first");
/// handle.append("second");
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.take(), vec!["first", "second"]);
/// ```
#[derive(Debug)]
pub struct Registry<D> {
    entries: Rc<RefCell<Vec<D>>>,
}

impl<D> Registry<D> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Another owner of the same list.
    #[must_use]
    pub fn handle(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
        }
    }

    pub fn append(&self, descriptor: D) {
        self.entries.borrow_mut().push(descriptor);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Whether any registered descriptor matches `predicate`.
    pub fn any(&self, predicate: impl FnMut(&D) -> bool) -> bool {
        self.entries.borrow().iter().any(predicate)
    }

    /// Move all descriptors out, leaving the list empty.
    #[must_use]
    pub fn take(&self) -> Vec<D> {
        std::mem::take(&mut *self.entries.borrow_mut())
    }
}

impl<D> Default for Registry<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for Registry<D> {
    fn clone(&self) -> Self {
        self.handle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_is_empty() {
        let registry: Registry<u32> = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_handles_share_entries() {
        let registry = Registry::new();
        let a = registry.handle();
        let b = registry.clone();
        a.append(1);
        b.append(2);
        assert_eq!(registry.len(), 2);
        assert!(registry.any(|n| *n == 2));
    }

    #[test]
    fn test_take_drains_in_append_order() {
        let registry = Registry::new();
        for n in [3, 1, 2] {
            registry.append(n);
        }
        assert_eq!(registry.take(), vec![3, 1, 2]);
        assert!(registry.is_empty());
    }
}

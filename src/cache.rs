//! Memoizing cache module
//!
//! This module provides an in-memory, per-instance cache that stores the
//! result of a computation under a logical key so that it runs at most once.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;

/// A key-to-value store scoped to a single owner
///
/// Values of any `Clone + 'static` type can be stored, so one cache can hold
/// the decoded info text, glob results and resolved fields side by side.
/// Entries are never invalidated.
///
/// The cache uses interior mutability so that a computation running inside
/// [`MemoCache::get`] may itself call `get` for other keys. It is not `Sync`
/// and offers no single-flight guarantee.
#[derive(Default)]
pub(crate) struct MemoCache {
    entries: RefCell<HashMap<String, Box<dyn Any>>>,
}

impl MemoCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value for `key`, computing and storing it on a miss
    ///
    /// Only successful results are stored; an error from `compute` is handed
    /// back to the caller and the key stays unresolved. A stored value of a
    /// different type than `T` counts as a miss and is replaced.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let cache = MemoCache::new();
    /// let text: String = cache.get("info", || read_info(&path))?;
    /// ```
    pub fn get<T, E, F>(&self, key: &str, compute: F) -> Result<T, E>
    where
        T: Clone + 'static,
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.lookup::<T>(key) {
            tracing::debug!(key, "cache hit");
            return Ok(value);
        }

        tracing::debug!(key, "cache miss");

        // The borrow is released while computing; compute may re-enter.
        let value = compute()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), Box::new(value.clone()));

        Ok(value)
    }

    /// Returns whether a value is stored under `key`
    #[cfg(test)]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    fn lookup<T: Clone + 'static>(&self, key: &str) -> Option<T> {
        self.entries
            .borrow()
            .get(key)
            .and_then(|value| value.downcast_ref::<T>())
            .cloned()
    }
}

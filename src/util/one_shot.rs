//! One-shot subscriptions.
//!
//! A subscriber fires at most once; firing also unsubscribes it. Used by the
//! viewport observers so reveal and counter elements never re-trigger even if
//! the browser reports several intersections in one batch.

#[cfg(test)]
#[path = "one_shot_test.rs"]
mod one_shot_test;

use std::collections::HashSet;
use std::hash::Hash;

#[derive(Clone, Debug)]
pub struct OneShotSet<K> {
    pending: HashSet<K>,
}

impl<K> Default for OneShotSet<K> {
    fn default() -> Self {
        Self { pending: HashSet::new() }
    }
}

impl<K: Eq + Hash> OneShotSet<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key`. Returns `false` if it was already pending.
    pub fn subscribe(&mut self, key: K) -> bool {
        self.pending.insert(key)
    }

    /// Fire `key`. Returns `true` exactly once per subscription.
    pub fn fire(&mut self, key: &K) -> bool {
        self.pending.remove(key)
    }

    #[must_use]
    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// All subscribers have fired.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

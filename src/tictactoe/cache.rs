//! Read-through memo tables owned by a game instance
//!
//! Every memoized game operation is a pure function of its arguments and
//! states are immutable, so entries never go stale. Tables are unbounded;
//! [`super::TicTacToe::clear_caches`] drops them explicitly.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    hash::Hash,
};

/// Hit/miss counters of one memo table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Counters for every memoized game operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub actions: MemoStats,
    pub result: MemoStats,
    pub utility: MemoStats,
    pub terminal_test: MemoStats,
}

impl CacheStats {
    pub fn total_hits(&self) -> u64 {
        self.actions.hits + self.result.hits + self.utility.hits + self.terminal_test.hits
    }

    pub fn total_misses(&self) -> u64 {
        self.actions.misses + self.result.misses + self.utility.misses + self.terminal_test.misses
    }
}

pub(crate) struct Memo<K, V> {
    enabled: bool,
    table: RefCell<HashMap<K, V>>,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl<K: Eq + Hash, V: Clone> Memo<K, V> {
    pub(crate) fn new(enabled: bool) -> Self {
        Memo {
            enabled,
            table: RefCell::new(HashMap::new()),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    pub(crate) fn get_or_insert_with(&self, key: K, compute: impl FnOnce() -> V) -> V {
        if !self.enabled {
            return compute();
        }
        if let Some(value) = self.lookup(&key) {
            return value;
        }
        let value = compute();
        self.table.borrow_mut().insert(key, value.clone());
        value
    }

    /// Like [`Self::get_or_insert_with`], but failures are returned and not cached
    pub(crate) fn try_get_or_insert_with<E>(
        &self,
        key: K,
        compute: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E> {
        if !self.enabled {
            return compute();
        }
        if let Some(value) = self.lookup(&key) {
            return Ok(value);
        }
        let value = compute()?;
        self.table.borrow_mut().insert(key, value.clone());
        Ok(value)
    }

    fn lookup(&self, key: &K) -> Option<V> {
        let found = self.table.borrow().get(key).cloned();
        match found {
            Some(_) => self.hits.set(self.hits.get() + 1),
            None => self.misses.set(self.misses.get() + 1),
        }
        found
    }

    pub(crate) fn stats(&self) -> MemoStats {
        MemoStats {
            hits: self.hits.get(),
            misses: self.misses.get(),
            entries: self.table.borrow().len(),
        }
    }

    pub(crate) fn clear(&self) {
        self.table.borrow_mut().clear();
        self.hits.set(0);
        self.misses.set(0);
    }
}

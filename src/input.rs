//! Held-key tracking for terminals that may never report key releases.
//!
//! A key counts as held while its last press or repeat is at most `window`
//! frames old.  `press` reports whether the key went down just now, so
//! edge-triggered actions survive terminals that deliver auto-repeat as
//! further press events.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Clone, Debug)]
pub struct KeyHold<K> {
    last_seen: HashMap<K, u64>,
    window: u64,
}

impl<K: Hash + Eq> KeyHold<K> {
    pub fn new(window: u64) -> Self {
        Self {
            last_seen: HashMap::new(),
            window,
        }
    }

    /// Record a press at `frame`.  Returns `true` only when the key was not
    /// already held, i.e. on the key-down edge.
    pub fn press(&mut self, key: K, frame: u64) -> bool {
        let fresh = !self.is_held(&key, frame);
        self.last_seen.insert(key, frame);
        fresh
    }

    /// Refresh a held key without reporting an edge.
    pub fn repeat(&mut self, key: K, frame: u64) {
        self.last_seen.insert(key, frame);
    }

    pub fn release(&mut self, key: &K) {
        self.last_seen.remove(key);
    }

    pub fn is_held(&self, key: &K, frame: u64) -> bool {
        self.last_seen
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= self.window)
            .unwrap_or(false)
    }

    pub fn any_held(&self, keys: &[K], frame: u64) -> bool {
        keys.iter().any(|k| self.is_held(k, frame))
    }
}

//! Dirty-entry tracking for unsaved node positions

use std::collections::HashMap;

/// One unsaved position change: a node name and its latest coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirtyEntry {
    pub key: String,
    pub x: i64,
    pub y: i64,
}

impl DirtyEntry {
    pub fn new(key: impl Into<String>, x: i64, y: i64) -> Self {
        Self {
            key: key.into(),
            x,
            y,
        }
    }
}

/// The set of entities with unsaved position changes
///
/// Each key appears at most once; a later record for the same key replaces
/// the earlier coordinates (last-write-wins, no merging).
#[derive(Debug, Default)]
pub struct PendingSet {
    entries: HashMap<String, DirtyEntry>,
}

impl PendingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `entry.key`
    pub fn record(&mut self, entry: DirtyEntry) {
        self.entries.insert(entry.key.clone(), entry);
    }

    /// Remove and return every pending entry
    pub fn take_all(&mut self) -> Vec<DirtyEntry> {
        self.entries.drain().map(|(_, e)| e).collect()
    }

    /// Remove and return only the entries for the given keys; other entries
    /// stay pending
    pub fn take_keys(&mut self, keys: &[String]) -> Vec<DirtyEntry> {
        keys.iter()
            .filter_map(|k| self.entries.remove(k))
            .collect()
    }

    /// Put entries back after a failed flush
    ///
    /// An entry is only restored if its key is absent, so a newer record for
    /// the same key is never clobbered by stale coordinates.
    pub fn restore(&mut self, entries: Vec<DirtyEntry>) {
        for entry in entries {
            self.entries.entry(entry.key.clone()).or_insert(entry);
        }
    }

    pub fn get(&self, key: &str) -> Option<&DirtyEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Assigns contiguous 1-based identifiers to tracked objects across a whole
/// conversion run.
///
/// The first sighting of a `(class_id, raw_object_id)` key claims the next
/// counter value; every later sighting returns the same value. Entries are
/// never removed or renumbered, so identifiers are dense and strictly
/// increasing in order of first sighting.
///
/// Keys include the class id even when converting all classes, so two
/// unrelated objects in different classes that happen to share a raw id
/// never collide.
#[derive(Debug, Default)]
pub struct IdentityRemapper {
    assigned: HashMap<(i64, i64), i64>,
    next_id: i64,
}

impl IdentityRemapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the contiguous identifier for this object, assigning a fresh
    /// one on first sighting.
    pub fn resolve(&mut self, class_id: i64, raw_object_id: i64) -> i64 {
        match self.assigned.entry((class_id, raw_object_id)) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                self.next_id += 1;
                *entry.insert(self.next_id)
            }
        }
    }

    /// Number of distinct objects seen so far.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

//! Indexed binary min-heap with decrease-key.

use rustc_hash::FxBuildHasher;

use crate::station::StationId;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Binary min-heap of `(StationId, f64)` entries with an id → slot index,
/// so a key can be lowered in place after an edge relaxation.
///
/// Ordering uses `f64::total_cmp`; extraction order is deterministic for
/// identical push/decrease sequences.
#[derive(Debug, Default)]
pub struct IndexHeap {
    slots: Vec<(StationId, f64)>,
    positions: HashMap<StationId, usize>,
}

impl IndexHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, id: StationId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Pushes a new entry. `id` must not already be present.
    pub fn push(&mut self, id: StationId, key: f64) {
        debug_assert!(!self.contains(id), "id already in heap");
        let slot = self.slots.len();
        self.slots.push((id, key));
        self.positions.insert(id, slot);
        self.sift_up(slot);
    }

    /// Pops the minimum-key entry.
    pub fn pop(&mut self) -> Option<(StationId, f64)> {
        if self.slots.is_empty() {
            return None;
        }
        let last = self.slots.len() - 1;
        self.slots.swap(0, last);
        let top = self.slots.pop()?;
        self.positions.remove(&top.0);
        if !self.slots.is_empty() {
            self.positions.insert(self.slots[0].0, 0);
            self.sift_down(0);
        }
        Some(top)
    }

    /// Lowers the key of an existing entry. No-op (returns false) when `id`
    /// is absent or `key` is not strictly smaller than the current key.
    pub fn decrease_key(&mut self, id: StationId, key: f64) -> bool {
        let Some(&slot) = self.positions.get(&id) else {
            return false;
        };
        if key.total_cmp(&self.slots[slot].1).is_ge() {
            return false;
        }
        self.slots[slot].1 = key;
        self.sift_up(slot);
        true
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.slots[slot].1.total_cmp(&self.slots[parent].1).is_lt() {
                self.swap_slots(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < self.slots.len()
                && self.slots[left].1.total_cmp(&self.slots[smallest].1).is_lt()
            {
                smallest = left;
            }
            if right < self.slots.len()
                && self.slots[right]
                    .1
                    .total_cmp(&self.slots[smallest].1)
                    .is_lt()
            {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
        self.positions.insert(self.slots[a].0, a);
        self.positions.insert(self.slots[b].0, b);
    }
}

//! Upload slot bookkeeping
//!
//! Six fixed slots, each holding at most one accepted file. State lives in
//! one owned value with explicit methods instead of module globals; the DOM
//! layer mirrors it into previews and the hidden form input.

use crate::error::{Error, Result};
use crate::limits::SLOT_COUNT;

/// Fixed-size set of optional entries, index-aligned with the slot grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSet<T> {
    slots: Vec<Option<T>>,
}

impl<T> Default for SlotSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SlotSet<T> {
    pub fn new() -> Self {
        Self {
            slots: (0..SLOT_COUNT).map(|_| None).collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Place `item` in `index`, replacing any previous entry.
    pub fn set_slot(&mut self, index: usize, item: T) -> Result<()> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(Error::InvalidSlot(index))?;
        *slot = Some(item);
        Ok(())
    }

    /// Empty `index`, returning the removed entry if there was one.
    pub fn clear_slot(&mut self, index: usize) -> Result<Option<T>> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(Error::InvalidSlot(index))?;
        Ok(slot.take())
    }

    /// Occupied entries in slot order, gaps dropped. This is what the
    /// hidden form input receives before submission.
    pub fn compacted(&self) -> Vec<&T> {
        self.slots.iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let set: SlotSet<String> = SlotSet::new();
        assert_eq!(set.capacity(), SLOT_COUNT);
        assert_eq!(set.filled(), 0);
        assert!(set.compacted().is_empty());
    }

    #[test]
    fn test_set_and_clear() {
        let mut set = SlotSet::new();
        set.set_slot(2, "rear.jpg").unwrap();
        assert!(set.is_occupied(2));
        assert_eq!(set.get(2), Some(&"rear.jpg"));

        let removed = set.clear_slot(2).unwrap();
        assert_eq!(removed, Some("rear.jpg"));
        assert!(!set.is_occupied(2));
        assert_eq!(set.clear_slot(2).unwrap(), None);
    }

    #[test]
    fn test_out_of_range_index() {
        let mut set = SlotSet::new();
        assert!(matches!(
            set.set_slot(6, "x"),
            Err(Error::InvalidSlot(6))
        ));
        assert!(matches!(set.clear_slot(99), Err(Error::InvalidSlot(99))));
    }

    #[test]
    fn test_compacted_drops_gaps_keeps_order() {
        let mut set = SlotSet::new();
        set.set_slot(4, "e").unwrap();
        set.set_slot(0, "a").unwrap();
        set.set_slot(2, "c").unwrap();
        assert_eq!(set.compacted(), vec![&"a", &"c", &"e"]);
    }

    #[test]
    fn test_compaction_idempotent() {
        let mut set = SlotSet::new();
        for (i, name) in ["a", "b", "c"].iter().enumerate() {
            set.set_slot(i, *name).unwrap();
        }
        let once: Vec<&str> = set.compacted().into_iter().copied().collect();

        // Re-seat the compacted list into a fresh set; compacting again
        // must return the same sequence.
        let mut reseated = SlotSet::new();
        for (i, name) in once.iter().enumerate() {
            reseated.set_slot(i, *name).unwrap();
        }
        let twice: Vec<&str> = reseated.compacted().into_iter().copied().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_replace_occupied_slot() {
        let mut set = SlotSet::new();
        set.set_slot(1, "old").unwrap();
        set.set_slot(1, "new").unwrap();
        assert_eq!(set.filled(), 1);
        assert_eq!(set.get(1), Some(&"new"));
    }
}

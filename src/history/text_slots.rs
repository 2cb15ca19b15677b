//! Ring of recently captured text strings.
//!
//! A Text record stores only the index of its slot. The slot stays valid until
//! the ring wraps around to it again; replaying an older Text record after
//! that renders whatever string now occupies the slot.

use crate::config::{TEXT_SLOTS, TEXT_SLOT_LEN};

#[derive(Clone, Copy)]
pub struct TextSlot {
    bytes: [u8; TEXT_SLOT_LEN],
    len: usize,
}

impl TextSlot {
    pub const EMPTY: TextSlot = TextSlot {
        bytes: [0; TEXT_SLOT_LEN],
        len: 0,
    };

    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.bytes[..self.len]).unwrap_or("")
    }
}

impl core::fmt::Debug for TextSlot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("TextSlot").field(&self.as_str()).finish()
    }
}

#[derive(Debug)]
pub struct TextSlotStore {
    slots: [TextSlot; TEXT_SLOTS],
    cursor: usize,
}

impl TextSlotStore {
    pub const fn new() -> Self {
        Self {
            slots: [TextSlot::EMPTY; TEXT_SLOTS],
            cursor: 0,
        }
    }

    /// Copy `text` into the next slot and return that slot's index.
    ///
    /// Text longer than a slot is cut at the last char boundary that fits.
    pub fn reserve(&mut self, text: &str) -> usize {
        let mut end = text.len().min(TEXT_SLOT_LEN - 1);
        while !text.is_char_boundary(end) {
            end -= 1;
        }

        let index = self.cursor;
        let slot = &mut self.slots[index];
        slot.bytes[..end].copy_from_slice(&text.as_bytes()[..end]);
        slot.len = end;

        self.cursor = (self.cursor + 1) % TEXT_SLOTS;
        index
    }

    pub fn get(&self, index: usize) -> Option<&TextSlot> {
        self.slots.get(index)
    }
}

impl Default for TextSlotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn slots_are_handed_out_round_robin() {
        let mut store = TextSlotStore::new();
        let indices: [usize; 6] = core::array::from_fn(|i| store.reserve(["a", "b", "c", "d", "e", "f"][i]));
        assert_eq!(indices, [0, 1, 2, 3, 0, 1]);
        assert_eq!(store.get(0).map(TextSlot::as_str), Some("e"));
        assert_eq!(store.get(2).map(TextSlot::as_str), Some("c"));
        assert!(store.get(TEXT_SLOTS).is_none());
    }

    #[test]
    fn long_text_is_truncated() {
        let mut store = TextSlotStore::new();
        let long: String = core::iter::repeat('x').take(200).collect();
        let index = store.reserve(&long);
        assert_eq!(store.get(index).map(|s| s.as_str().len()), Some(TEXT_SLOT_LEN - 1));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let mut store = TextSlotStore::new();
        // 62 ASCII bytes then a two-byte char straddling the limit
        let mut text: String = core::iter::repeat('a').take(62).collect();
        text.push('é');
        let index = store.reserve(&text);
        assert_eq!(store.get(index).map(|s| s.as_str().len()), Some(62));
    }
}

//! Fixed-capacity record of recently executed commands.
//!
//! Records are packed back to back into a slot array, oldest first, with a
//! parallel index of their starting offsets. Appending a record that does not
//! fit evicts from the front until it does; the oldest record therefore
//! always starts at slot 0.

use crate::config::{HISTORY_RECORDS, HISTORY_SLOTS};
use crate::serial_println;

use super::command::{Command, OpKind};

/// A borrowed view of one stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub kind: OpKind,
    pub params: &'a [u16],
}

impl Record<'_> {
    pub fn decode(&self) -> Option<Command> {
        Command::decode(self.kind, self.params)
    }
}

pub struct HistoryBuffer {
    slots: [u16; HISTORY_SLOTS],
    used: usize,
    offsets: [u8; HISTORY_RECORDS],
    count: usize,
}

impl HistoryBuffer {
    pub const fn new() -> Self {
        Self {
            slots: [0; HISTORY_SLOTS],
            used: 0,
            offsets: [0; HISTORY_RECORDS],
            count: 0,
        }
    }

    /// Store one record, evicting the oldest ones as needed.
    ///
    /// Kinds with no slot size and parameter lists that disagree with the
    /// size table are ignored.
    pub fn append(&mut self, kind: OpKind, params: &[u16]) {
        let size = kind.size_of();
        if size == 0 || params.len() + 1 != size {
            serial_println!("history: refusing {} with {} params", kind.name(), params.len());
            return;
        }

        while self.count == HISTORY_RECORDS || self.used + size > HISTORY_SLOTS {
            self.evict_oldest();
        }

        let start = self.used;
        self.slots[start] = kind.tag();
        self.slots[start + 1..start + size].copy_from_slice(params);
        // HISTORY_SLOTS < 256, so every offset fits in a byte
        self.offsets[self.count] = start as u8;
        self.used += size;
        self.count += 1;
    }

    fn evict_oldest(&mut self) {
        if self.count == 0 {
            return;
        }
        let kind = OpKind::from_tag(self.slots[0]);
        let size = kind.size_of().clamp(1, self.used);

        self.slots.copy_within(size..self.used, 0);
        self.used -= size;
        for i in 1..self.count {
            self.offsets[i - 1] = self.offsets[i] - size as u8;
        }
        self.count -= 1;

        serial_println!("history: evicted {} ({} slots)", kind.name(), size);
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of occupied slots.
    pub fn used(&self) -> usize {
        self.used
    }

    /// Record `index`, counted from the oldest.
    pub fn record(&self, index: usize) -> Option<Record<'_>> {
        if index >= self.count {
            return None;
        }
        let start = usize::from(self.offsets[index]);
        let end = if index + 1 < self.count {
            usize::from(self.offsets[index + 1])
        } else {
            self.used
        };
        Some(Record {
            kind: OpKind::from_tag(self.slots[start]),
            params: &self.slots[start + 1..end],
        })
    }

    pub fn command(&self, index: usize) -> Option<Command> {
        self.record(index).and_then(|record| record.decode())
    }

    /// Records from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = Record<'_>> + '_ {
        (0..self.count).filter_map(move |i| self.record(i))
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for HistoryBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HistoryBuffer")
            .field("records", &self.count)
            .field("used", &self.used)
            .finish()
    }
}

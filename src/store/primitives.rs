/*!
 * Structural Primitives
 *
 * The only code that touches the backing slots directly. Higher-level
 * operations (insert, remove, prepend, paste) are compositions of these, and
 * every primitive carries the operation class of the public call that
 * invoked it. Indices are re-validated against the current length each time
 * a primitive runs, since an earlier step may have resized the store.
 */

use super::events::{EventKind, Payload};
use super::store::OrderedStore;
use crate::core::types::Slot;
use crate::permissions::Operation;
use tracing::trace;

/// What happens to the source slot of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Transfer {
    /// The source keeps its value
    Copy,
    /// The source is left empty
    Take,
}

impl<T> OrderedStore<T> {
    /// Grow or shrink to exactly `length`. New slots are empty.
    pub(super) fn resize(&mut self, op: Operation, length: usize) {
        if length == self.items.len() {
            return;
        }
        trace!(store = %self.id, %op, from = self.items.len(), to = length, "resize");
        self.items.resize_with(length, || None);
        self.notify(EventKind::Resized, op, Payload::Length(length));
    }

    /// Rebuild from the slots `keep` accepts. Returns how many were dropped.
    pub(crate) fn repack<F>(&mut self, op: Operation, mut keep: F) -> usize
    where
        F: FnMut(usize, &Slot<T>) -> bool,
    {
        let before = self.items.len();
        let items = std::mem::take(&mut self.items);
        self.items = items
            .into_iter()
            .enumerate()
            .filter(|(index, slot)| keep(*index, slot))
            .map(|(_, slot)| slot)
            .collect();

        let dropped = before - self.items.len();
        trace!(store = %self.id, %op, dropped, "repack");
        if dropped > 0 {
            self.notify(EventKind::Resized, op, Payload::Length(self.items.len()));
        }
        dropped
    }
}

impl<T: Clone> OrderedStore<T> {
    /// Move the slot at `source` to `destination`.
    ///
    /// - `source` outside the current length: no-op.
    /// - `destination >= len`: grow to `destination + 1` first.
    /// - `destination < 0`: open `|destination|` slots at the front, then write at 0.
    pub(super) fn move_slot(&mut self, op: Operation, source: usize, destination: isize, transfer: Transfer) {
        if source >= self.items.len() {
            return;
        }

        let to = destination.max(0) as usize;
        self.notify(EventKind::Moving, op, Payload::Span { from: source, to });

        let value = match transfer {
            Transfer::Copy => self.items[source].clone(),
            Transfer::Take => self.items[source].take(),
        };

        if destination < 0 {
            self.open_gap(op, 0, destination.unsigned_abs());
        } else if to >= self.items.len() {
            self.resize(op, to + 1);
        }

        self.items[to] = value;
        self.notify(EventKind::Moved, op, Payload::Span { from: source, to });
    }

    /// Open a `count`-wide gap of empty slots at `start` (shift right).
    ///
    /// Walks from the current length down to `start`; the first step is out of
    /// range and skipped by `move_slot`, the next one grows the store.
    pub(super) fn open_gap(&mut self, op: Operation, start: usize, count: usize) {
        if count == 0 {
            return;
        }
        let len = self.items.len();
        if start >= len {
            self.resize(op, start + count);
            return;
        }

        trace!(store = %self.id, %op, start, count, "open gap");
        for index in (start..=len).rev() {
            self.move_slot(op, index, (index + count) as isize, Transfer::Take);
        }
    }

    /// Close the gap `[start, start + count)` (shift left): later slots slide
    /// down and the store shrinks by the number of slots removed.
    pub(super) fn close_gap(&mut self, op: Operation, start: usize, count: usize) {
        let len = self.items.len();
        if count == 0 || start >= len {
            return;
        }
        let end = start.saturating_add(count).min(len);
        let removed = end - start;

        trace!(store = %self.id, %op, start, removed, "close gap");
        for index in end..len {
            self.move_slot(op, index, (index - removed) as isize, Transfer::Take);
        }
        self.resize(op, len - removed);
    }

    /// Open one slot at `index` and write `value` into it
    pub(super) fn insert_slot(&mut self, op: Operation, index: usize, value: T) {
        self.notify(EventKind::Adding, op, Payload::Item(&value));
        self.open_gap(op, index, 1);
        self.items[index] = Some(value);
        self.notify(
            EventKind::Added,
            op,
            Payload::Slot {
                index,
                value: self.items[index].as_ref(),
            },
        );
    }

    /// Open `slots.len()` slots at `index` and write the batch; one "added" for the batch.
    /// An empty batch still fires both events with a zero count.
    pub(super) fn write_batch(&mut self, op: Operation, index: usize, slots: Vec<Slot<T>>) {
        let count = slots.len();
        self.notify(EventKind::Adding, op, Payload::Batch { index, count });
        self.open_gap(op, index, count);
        for (offset, slot) in slots.into_iter().enumerate() {
            self.items[index + offset] = slot;
        }
        self.notify(EventKind::Added, op, Payload::Batch { index, count });
    }
}

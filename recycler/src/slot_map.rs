use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::ops::Bound;

use crate::{RecyclerError, SlotId, VisibleWindow};

/// Bidirectional association between logical indices and slots.
///
/// Indices are kept in a sorted map so diffs against a window come out in ascending
/// order; the reverse direction is a dense array indexed by slot.
#[derive(Clone, Debug, Default)]
pub(crate) struct IndexSlotMap {
    by_index: BTreeMap<usize, SlotId>,
    by_slot: Vec<Option<usize>>,
}

impl IndexSlotMap {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.by_index.len()
    }

    pub(crate) fn clear(&mut self) {
        self.by_index.clear();
        self.by_slot.iter_mut().for_each(|i| *i = None);
    }

    pub(crate) fn slot_for(&self, index: usize) -> Option<SlotId> {
        self.by_index.get(&index).copied()
    }

    pub(crate) fn index_for(&self, slot: SlotId) -> Option<usize> {
        self.by_slot.get(slot.0).copied().flatten()
    }

    /// Records `slot <-> index`, dropping any previous association of either side.
    pub(crate) fn bind(&mut self, slot: SlotId, index: usize) {
        if self.by_slot.len() <= slot.0 {
            self.by_slot.resize(slot.0 + 1, None);
        }
        if let Some(prev_index) = self.by_slot[slot.0].take() {
            self.by_index.remove(&prev_index);
        }
        if let Some(prev_slot) = self.by_index.insert(index, slot) {
            if prev_slot != slot {
                self.by_slot[prev_slot.0] = None;
            }
        }
        self.by_slot[slot.0] = Some(index);
    }

    pub(crate) fn unbind(&mut self, index: usize) -> Result<SlotId, RecyclerError> {
        let slot = self
            .by_index
            .remove(&index)
            .ok_or(RecyclerError::IndexNotBound { index })?;
        self.by_slot[slot.0] = None;
        Ok(slot)
    }

    /// Pushes every bound index outside `window` onto `out`, ascending.
    pub(crate) fn indices_outside_window(&self, window: VisibleWindow, out: &mut Vec<usize>) {
        out.extend(
            self.by_index
                .range(..window.start_index)
                .chain(
                    self.by_index
                        .range((Bound::Excluded(window.end_index), Bound::Unbounded)),
                )
                .map(|(&index, _)| index),
        );
    }

    /// Pushes every index of `window` that has no slot onto `out`, ascending.
    pub(crate) fn indices_missing_from_window(&self, window: VisibleWindow, out: &mut Vec<usize>) {
        out.extend(window.indices().filter(|i| !self.by_index.contains_key(i)));
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (usize, SlotId)> + '_ {
        self.by_index.iter().map(|(&index, &slot)| (index, slot))
    }
}

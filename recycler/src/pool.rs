use alloc::vec::Vec;

use crate::{Position, RecyclerError, SlotId};

#[derive(Clone, Copy, Debug, Default)]
struct SlotState {
    position: Position,
    visible: bool,
}

/// Fixed-capacity pool of reusable slots.
///
/// Slots are created lazily in pool order and are never destroyed; unused slots are
/// hidden instead. The pool tracks the per-slot state the host needs to mirror
/// (position and visibility) but holds no host objects.
#[derive(Clone, Debug)]
pub(crate) struct SlotPool {
    slots: Vec<SlotState>,
    capacity: usize,
}

impl SlotPool {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            capacity,
        }
    }

    /// Number of slots created so far.
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns the slot at `local_index`, creating slots up to it if needed.
    ///
    /// New slots are reported through `on_create` and start hidden.
    pub(crate) fn acquire(
        &mut self,
        local_index: usize,
        mut on_create: impl FnMut(SlotId),
    ) -> Result<SlotId, RecyclerError> {
        if local_index >= self.capacity {
            rwarn!(
                requested = local_index,
                capacity = self.capacity,
                "SlotPool::acquire beyond capacity"
            );
            return Err(RecyclerError::CapacityExceeded {
                requested: local_index,
                capacity: self.capacity,
            });
        }
        while self.slots.len() <= local_index {
            let id = SlotId(self.slots.len());
            self.slots.push(SlotState::default());
            rtrace!(slot = id.0, "SlotPool: created slot");
            on_create(id);
        }
        Ok(SlotId(local_index))
    }

    /// Shows the first `n` slots in pool order and hides the rest.
    ///
    /// `on_change` is called only for slots whose visibility actually flips.
    pub(crate) fn set_visible_count(
        &mut self,
        n: usize,
        mut on_change: impl FnMut(SlotId, bool),
    ) -> Result<(), RecyclerError> {
        if n > self.capacity {
            rwarn!(n, capacity = self.capacity, "SlotPool::set_visible_count beyond capacity");
            return Err(RecyclerError::CapacityExceeded {
                requested: n,
                capacity: self.capacity,
            });
        }
        debug_assert!(
            n <= self.slots.len(),
            "showing {n} slots but only {} exist",
            self.slots.len()
        );
        for (i, slot) in self.slots.iter_mut().enumerate() {
            let visible = i < n;
            if slot.visible != visible {
                slot.visible = visible;
                on_change(SlotId(i), visible);
            }
        }
        Ok(())
    }

    pub(crate) fn set_position(&mut self, slot: SlotId, position: Position) {
        if let Some(state) = self.slots.get_mut(slot.0) {
            state.position = position;
        }
    }

    pub(crate) fn position(&self, slot: SlotId) -> Option<Position> {
        self.slots.get(slot.0).map(|s| s.position)
    }

    pub(crate) fn is_visible(&self, slot: SlotId) -> bool {
        self.slots.get(slot.0).is_some_and(|s| s.visible)
    }

    pub(crate) fn visible_count(&self) -> usize {
        self.slots.iter().filter(|s| s.visible).count()
    }
}

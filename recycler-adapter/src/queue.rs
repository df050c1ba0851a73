use alloc::collections::VecDeque;
use alloc::rc::Rc;
use core::cell::RefCell;

use recycler::Offset;

/// A host request that can be deferred until the recycler is idle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HostEvent {
    /// Replace the list and scroll back to the origin.
    SetList(usize),
    /// Reload the list at the current scroll position.
    Refresh(usize),
    Scroll(Offset),
    ScrollToIndex(usize),
}

/// A shared FIFO of [`HostEvent`]s.
///
/// Clones share the same queue, so a handle can be moved into a populate callback and used
/// to request count or scroll changes while the recycler is still busy binding slots.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    inner: Rc<RefCell<VecDeque<HostEvent>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: HostEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    pub fn pop(&self) -> Option<HostEvent> {
        self.inner.borrow_mut().pop_front()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }
}

use alloc::rc::Rc;
use core::cell::RefCell;

use recycler::{Offset, Recycler, RecyclerError, RecyclerOptions, SlotId};

use crate::{EventQueue, HostEvent};

type SharedPopulate = Rc<RefCell<dyn FnMut(SlotId, usize)>>;

/// A framework-neutral controller that wraps a `recycler::Recycler` together with its
/// populate callback and an [`EventQueue`].
///
/// Every entry point applies its own request first and then drains the queue, so requests
/// posted from inside the populate callback (through a handle from [`Controller::queue`])
/// run after the current reconciliation has completed instead of re-entering it.
pub struct Controller {
    r: Recycler,
    populate: SharedPopulate,
    queue: EventQueue,
}

impl Controller {
    pub fn new(
        options: RecyclerOptions,
        populate: impl FnMut(SlotId, usize) + 'static,
    ) -> Result<Self, RecyclerError> {
        Ok(Self::from_recycler(Recycler::new(options)?, populate))
    }

    pub fn from_recycler(r: Recycler, populate: impl FnMut(SlotId, usize) + 'static) -> Self {
        Self {
            r,
            populate: Rc::new(RefCell::new(populate)),
            queue: EventQueue::new(),
        }
    }

    pub fn recycler(&self) -> &Recycler {
        &self.r
    }

    pub fn into_recycler(self) -> Recycler {
        self.r
    }

    /// Returns a handle to the controller's event queue.
    pub fn queue(&self) -> EventQueue {
        self.queue.clone()
    }

    /// Queues `event` without applying it. Call [`Controller::drain`] (or any other entry
    /// point) to run it.
    pub fn post(&self, event: HostEvent) {
        self.queue.push(event);
    }

    pub fn set_list(&mut self, total_count: usize) -> Result<usize, RecyclerError> {
        self.dispatch(HostEvent::SetList(total_count))
    }

    pub fn refresh(&mut self, total_count: usize) -> Result<usize, RecyclerError> {
        self.dispatch(HostEvent::Refresh(total_count))
    }

    /// Call this when the host reports a scroll offset change.
    ///
    /// Returns the number of slots reassigned, including those moved by drained events.
    pub fn on_scroll(&mut self, offset: Offset) -> Result<usize, RecyclerError> {
        self.dispatch(HostEvent::Scroll(offset))
    }

    /// Scrolls so the line holding `index` starts at the viewport edge.
    ///
    /// Returns the applied offset; the host should move its scroll container there.
    pub fn scroll_to_index(&mut self, index: usize) -> Result<Offset, RecyclerError> {
        self.dispatch(HostEvent::ScrollToIndex(index))?;
        Ok(self.r.scroll_offset())
    }

    /// Applies queued events in FIFO order until the queue is empty.
    ///
    /// Stops at the first failing event and returns its error; later events stay queued.
    /// A populate callback that posts a new event for every call it receives keeps this
    /// loop running forever.
    pub fn drain(&mut self) -> Result<usize, RecyclerError> {
        let mut moved = 0usize;
        while let Some(event) = self.queue.pop() {
            moved = moved.saturating_add(self.apply(event)?);
        }
        Ok(moved)
    }

    fn dispatch(&mut self, event: HostEvent) -> Result<usize, RecyclerError> {
        let moved = self.apply(event)?;
        Ok(moved.saturating_add(self.drain()?))
    }

    fn apply(&mut self, event: HostEvent) -> Result<usize, RecyclerError> {
        atrace!(event = ?event, queued = self.queue.len(), "Controller::apply");
        let result = match event {
            HostEvent::SetList(total_count) => {
                let populate = self.forward();
                self.r.set_list(total_count, populate).map(|()| 0)
            }
            HostEvent::Refresh(total_count) => {
                let populate = self.forward();
                self.r.refresh(total_count, populate).map(|()| 0)
            }
            HostEvent::Scroll(offset) => self.r.on_scroll(offset),
            HostEvent::ScrollToIndex(index) => {
                let offset = self.r.scroll_offset_for_index(index);
                self.r.on_scroll(offset)
            }
        };
        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            awarn!(event = ?event, error = %err, "Controller: event failed");
        }
        result
    }

    fn forward(&self) -> impl FnMut(SlotId, usize) + 'static {
        let populate = Rc::clone(&self.populate);
        move |slot, index| (&mut *populate.borrow_mut())(slot, index)
    }
}

impl core::fmt::Debug for Controller {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("recycler", &self.r)
            .field("queued", &self.queue.len())
            .finish_non_exhaustive()
    }
}

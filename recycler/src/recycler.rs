use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem;

use crate::geometry::Geometry;
use crate::pool::SlotPool;
use crate::slot_map::IndexSlotMap;
use crate::{
    GridConfig, Offset, PopulateCallback, Position, RecyclerError, RecyclerOptions,
    RecyclerState, Size, SlotId, VisibleWindow,
};

/// A headless cell-recycling engine for a uniform scrollable grid.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; slots are opaque [`SlotId`] handles.
/// - Your host drives it with an item count ([`Recycler::set_list`], [`Recycler::refresh`])
///   and scroll offsets ([`Recycler::on_scroll`]).
/// - It reports slot creation, placement, visibility, and content size through the hooks in
///   [`RecyclerOptions`], and asks the host to render an index into a slot through the
///   populate callback.
///
/// At most [`Recycler::capacity`] slots are ever created. On scroll, only the slots whose
/// index left the window are rebound, so a one-line scroll touches exactly one line of
/// slots.
pub struct Recycler {
    options: RecyclerOptions,
    geometry: Geometry,
    capacity: usize,
    pool: SlotPool,
    map: IndexSlotMap,

    total_count: usize,
    scroll_offset: Offset,
    content_size: Size,
    window: Option<VisibleWindow>,
    last_start_index: usize,
    populate: Option<PopulateCallback>,

    // Scratch buffers reused by every reconciliation; they grow on first use.
    outgoing: Vec<usize>,
    incoming: Vec<usize>,
}

impl Recycler {
    /// Validates `options` and sizes the slot pool from the grid and viewport.
    ///
    /// The recycler starts empty; call [`Recycler::set_list`] to bind the first window.
    pub fn new(options: RecyclerOptions) -> Result<Self, RecyclerError> {
        if let Err(err) = options.validate() {
            rwarn!(error = %err, "Recycler::new: invalid options");
            return Err(err);
        }
        let geometry = Geometry::new(options.grid, options.viewport);
        let Some(capacity) = geometry.capacity() else {
            let err = RecyclerError::InvalidViewport {
                width: options.viewport.width,
                height: options.viewport.height,
            };
            rwarn!(error = %err, "Recycler::new: slot capacity overflows");
            return Err(err);
        };
        rdebug!(
            capacity,
            group_count = options.grid.group_count,
            axis = ?options.grid.axis,
            "Recycler::new"
        );
        Ok(Self {
            options,
            geometry,
            capacity,
            pool: SlotPool::new(capacity),
            map: IndexSlotMap::new(),
            total_count: 0,
            scroll_offset: Offset::ZERO,
            content_size: geometry.content_extent(0),
            window: None,
            last_start_index: 0,
            populate: None,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        })
    }

    pub fn options(&self) -> &RecyclerOptions {
        &self.options
    }

    pub fn grid(&self) -> &GridConfig {
        self.geometry.grid()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Maximum number of slots this recycler will ever create.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn scroll_offset(&self) -> Offset {
        self.scroll_offset
    }

    /// Size the host's scroll container should give its content.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// The currently bound window, or `None` when the list is empty.
    pub fn window(&self) -> Option<VisibleWindow> {
        self.window
    }

    /// Number of slots created so far.
    pub fn slot_count(&self) -> usize {
        self.pool.len()
    }

    pub fn visible_slot_count(&self) -> usize {
        self.pool.visible_count()
    }

    pub fn bound_count(&self) -> usize {
        self.map.len()
    }

    pub fn slot_for_index(&self, index: usize) -> Option<SlotId> {
        self.map.slot_for(index)
    }

    pub fn index_for_slot(&self, slot: SlotId) -> Option<usize> {
        self.map.index_for(slot)
    }

    pub fn slot_position(&self, slot: SlotId) -> Option<Position> {
        self.pool.position(slot)
    }

    pub fn is_slot_visible(&self, slot: SlotId) -> bool {
        self.pool.is_visible(slot)
    }

    /// Visits every bound `(index, slot)` pair in ascending index order.
    pub fn for_each_bound(&self, mut f: impl FnMut(usize, SlotId)) {
        for (index, slot) in self.map.iter() {
            f(index, slot);
        }
    }

    /// Offset that scrolls the line holding `index` to the start of the viewport.
    pub fn scroll_offset_for_index(&self, index: usize) -> Offset {
        let main = self
            .geometry
            .scroll_offset_for_index(index, self.total_count);
        self.geometry.offset_along_axis(main)
    }

    /// Replaces the list with `total_count` items and scrolls back to the origin.
    ///
    /// Binds indices `0..min(total_count, capacity)` to slots in index order, calling
    /// `populate` once per index, and hides every other slot. The host is expected to move
    /// its scroll container back to [`Offset::ZERO`].
    pub fn set_list(
        &mut self,
        total_count: usize,
        populate: impl FnMut(SlotId, usize) + 'static,
    ) -> Result<(), RecyclerError> {
        rdebug!(total_count, capacity = self.capacity, "Recycler::set_list");
        self.populate = Some(Box::new(populate));
        self.total_count = total_count;
        self.scroll_offset = Offset::ZERO;
        self.update_content_size();

        let show = total_count.min(self.capacity);
        self.map.clear();
        self.window = None;
        for index in 0..show {
            let slot = self.acquire(index)?;
            self.bind(slot, index);
        }
        if show > 0 {
            self.window = Some(VisibleWindow::new(0, show - 1)?);
        }
        self.set_visible_count(show)?;
        self.last_start_index = 0;
        Ok(())
    }

    /// Applies a scroll offset reported by the host and rebinds slots whose index left the
    /// window.
    ///
    /// Returns the number of slots that were reassigned. Nothing happens when every item
    /// already has a slot or when the window start did not move.
    pub fn on_scroll(&mut self, offset: Offset) -> Result<usize, RecyclerError> {
        self.scroll_offset = offset;
        if self.total_count <= self.capacity {
            return Ok(0);
        }
        let main = self.geometry.main_offset(offset);
        let Some(window) = self
            .geometry
            .window_for_offset(main, self.total_count, self.capacity)?
        else {
            return Ok(0);
        };
        if window.start_index == self.last_start_index {
            return Ok(0);
        }

        let mut outgoing = mem::take(&mut self.outgoing);
        let mut incoming = mem::take(&mut self.incoming);
        outgoing.clear();
        incoming.clear();
        self.map.indices_outside_window(window, &mut outgoing);
        self.map.indices_missing_from_window(window, &mut incoming);
        let result = self.reassign(&outgoing, &incoming);
        self.outgoing = outgoing;
        self.incoming = incoming;
        let moved = result?;

        self.window = Some(window);
        self.last_start_index = window.start_index;
        rtrace!(
            start_index = window.start_index,
            end_index = window.end_index,
            moved,
            "Recycler::on_scroll"
        );
        Ok(moved)
    }

    /// Reloads the list with `total_count` items without moving the scroll position.
    ///
    /// The window is recomputed from the current scroll offset (snapping to the last full
    /// window if the list shrank below it) and every index in it is rebound, reusing slots
    /// by pool position. An empty list hides every slot.
    pub fn refresh(
        &mut self,
        total_count: usize,
        populate: impl FnMut(SlotId, usize) + 'static,
    ) -> Result<(), RecyclerError> {
        let main = self.geometry.main_offset(self.scroll_offset);
        let window = match self
            .geometry
            .window_for_offset(main, total_count, self.capacity)
        {
            Ok(window) => window,
            Err(err) => {
                rwarn!(error = %err, total_count, "Recycler::refresh: invalid window");
                return Err(err);
            }
        };
        rdebug!(total_count, window = ?window, "Recycler::refresh");

        self.populate = Some(Box::new(populate));
        self.total_count = total_count;
        self.update_content_size();
        self.map.clear();

        let Some(window) = window else {
            self.window = None;
            self.last_start_index = 0;
            return self.set_visible_count(0);
        };
        self.last_start_index = window.start_index;
        for index in window.indices() {
            let slot = self.acquire(index - window.start_index)?;
            self.bind(slot, index);
        }
        self.window = Some(window);
        self.set_visible_count(window.len())
    }

    /// Returns a snapshot of the count, scroll offset, and bound window.
    pub fn state(&self) -> RecyclerState {
        RecyclerState {
            total_count: self.total_count,
            scroll_offset: self.scroll_offset,
            window: self.window,
        }
    }

    /// Restores a snapshot taken with [`Recycler::state`] by refreshing at its offset.
    ///
    /// On error the previous scroll offset is kept.
    pub fn restore_state(
        &mut self,
        state: RecyclerState,
        populate: impl FnMut(SlotId, usize) + 'static,
    ) -> Result<(), RecyclerError> {
        let prev = mem::replace(&mut self.scroll_offset, state.scroll_offset);
        let result = self.refresh(state.total_count, populate);
        if result.is_err() {
            self.scroll_offset = prev;
        }
        result
    }

    /// Pairs the i-th outgoing index with the i-th incoming index and moves its slot.
    ///
    /// Both lists must be ascending and of equal length; otherwise nothing is touched.
    pub(crate) fn reassign(
        &mut self,
        outgoing: &[usize],
        incoming: &[usize],
    ) -> Result<usize, RecyclerError> {
        if outgoing.len() != incoming.len() {
            rwarn!(
                outgoing = outgoing.len(),
                incoming = incoming.len(),
                "Recycler: unpaired reassignment"
            );
            return Err(RecyclerError::UnpairedReassignment {
                outgoing: outgoing.len(),
                incoming: incoming.len(),
            });
        }
        for (&old_index, &new_index) in outgoing.iter().zip(incoming) {
            let slot = self.map.unbind(old_index)?;
            self.bind(slot, new_index);
        }
        Ok(outgoing.len())
    }

    fn acquire(&mut self, local_index: usize) -> Result<SlotId, RecyclerError> {
        let on_create = &mut self.options.on_create;
        self.pool.acquire(local_index, |slot| {
            if let Some(f) = on_create.as_mut() {
                f(slot);
            }
        })
    }

    /// Positions `slot` for `index`, records the association, then lets the host populate it.
    fn bind(&mut self, slot: SlotId, index: usize) {
        let position = self.geometry.position_of(index);
        self.pool.set_position(slot, position);
        if let Some(f) = self.options.on_place.as_mut() {
            f(slot, position);
        }
        self.map.bind(slot, index);
        if let Some(f) = self.populate.as_mut() {
            f(slot, index);
        }
    }

    fn set_visible_count(&mut self, n: usize) -> Result<(), RecyclerError> {
        let on_change = &mut self.options.on_visibility_change;
        self.pool.set_visible_count(n, |slot, visible| {
            if let Some(f) = on_change.as_mut() {
                f(slot, visible);
            }
        })
    }

    fn update_content_size(&mut self) {
        self.content_size = self.geometry.content_extent(self.total_count);
        if let Some(f) = self.options.on_content_size.as_mut() {
            f(self.content_size);
        }
    }
}

impl core::fmt::Debug for Recycler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Recycler")
            .field("options", &self.options)
            .field("capacity", &self.capacity)
            .field("total_count", &self.total_count)
            .field("scroll_offset", &self.scroll_offset)
            .field("window", &self.window)
            .field("slot_count", &self.pool.len())
            .field("bound_count", &self.map.len())
            .finish_non_exhaustive()
    }
}

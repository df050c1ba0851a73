use alloc::boxed::Box;

use crate::{LayoutAxis, Position, RecyclerError, Size, SlotId};

/// Called with `(slot, index)` whenever a slot is bound to a logical index.
///
/// The host renders the content of `index` into `slot`. The callback must not try to
/// drive the recycler (count or scroll changes) from inside itself; queue such requests
/// instead (see the `recycler-adapter` crate).
pub type PopulateCallback = Box<dyn FnMut(SlotId, usize)>;

/// Called once when the pool grows by a new slot. The host creates and attaches the
/// visual cell here; the slot starts hidden.
pub type CreateCallback = Box<dyn FnMut(SlotId)>;

/// Called when a slot is shown (`true`) or hidden (`false`).
pub type VisibilityCallback = Box<dyn FnMut(SlotId, bool)>;

/// Called when a slot is moved to a new position in content space.
pub type PlaceCallback = Box<dyn FnMut(SlotId, Position)>;

/// Called with the total scrollable size whenever the item count is (re)applied.
pub type ContentSizeCallback = Box<dyn FnMut(Size)>;

/// Uniform grid layout. Immutable once handed to a [`crate::Recycler`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub cell_width: f32,
    pub cell_height: f32,
    pub spacing_x: f32,
    pub spacing_y: f32,
    /// Items per row (`RowMajor`) or per column (`ColumnMajor`).
    pub group_count: usize,
    pub axis: LayoutAxis,
}

impl GridConfig {
    /// A row-major grid without spacing.
    pub fn new(cell_width: f32, cell_height: f32, group_count: usize) -> Self {
        Self {
            cell_width,
            cell_height,
            spacing_x: 0.0,
            spacing_y: 0.0,
            group_count,
            axis: LayoutAxis::RowMajor,
        }
    }

    pub fn with_spacing(mut self, spacing_x: f32, spacing_y: f32) -> Self {
        self.spacing_x = spacing_x;
        self.spacing_y = spacing_y;
        self
    }

    pub fn with_axis(mut self, axis: LayoutAxis) -> Self {
        self.axis = axis;
        self
    }

    pub fn validate(&self) -> Result<(), RecyclerError> {
        if self.group_count < 1 {
            return Err(RecyclerError::InvalidGroupCount);
        }
        // Written so that NaN fails too.
        if !(self.cell_width > 0.0 && self.cell_height > 0.0)
            || !self.cell_width.is_finite()
            || !self.cell_height.is_finite()
        {
            return Err(RecyclerError::InvalidCellSize {
                width: self.cell_width,
                height: self.cell_height,
            });
        }
        if !(self.spacing_x >= 0.0 && self.spacing_y >= 0.0)
            || !self.spacing_x.is_finite()
            || !self.spacing_y.is_finite()
        {
            return Err(RecyclerError::InvalidSpacing {
                x: self.spacing_x,
                y: self.spacing_y,
            });
        }
        Ok(())
    }
}

/// Configuration for [`crate::Recycler`].
///
/// `grid` and `viewport` fix the pool capacity for the whole session. The hooks are how
/// the recycler tells the host about slot lifecycle changes; all of them are optional.
pub struct RecyclerOptions {
    pub grid: GridConfig,
    pub viewport: Size,
    pub on_create: Option<CreateCallback>,
    pub on_visibility_change: Option<VisibilityCallback>,
    pub on_place: Option<PlaceCallback>,
    pub on_content_size: Option<ContentSizeCallback>,
}

impl RecyclerOptions {
    pub fn new(grid: GridConfig, viewport: Size) -> Self {
        Self {
            grid,
            viewport,
            on_create: None,
            on_visibility_change: None,
            on_place: None,
            on_content_size: None,
        }
    }

    pub fn with_on_create(mut self, f: impl FnMut(SlotId) + 'static) -> Self {
        self.on_create = Some(Box::new(f));
        self
    }

    pub fn with_on_visibility_change(mut self, f: impl FnMut(SlotId, bool) + 'static) -> Self {
        self.on_visibility_change = Some(Box::new(f));
        self
    }

    pub fn with_on_place(mut self, f: impl FnMut(SlotId, Position) + 'static) -> Self {
        self.on_place = Some(Box::new(f));
        self
    }

    pub fn with_on_content_size(mut self, f: impl FnMut(Size) + 'static) -> Self {
        self.on_content_size = Some(Box::new(f));
        self
    }

    pub(crate) fn validate(&self) -> Result<(), RecyclerError> {
        self.grid.validate()?;
        let Size { width, height } = self.viewport;
        if !(width >= 0.0 && height >= 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(RecyclerError::InvalidViewport { width, height });
        }
        Ok(())
    }
}

impl core::fmt::Debug for RecyclerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecyclerOptions")
            .field("grid", &self.grid)
            .field("viewport", &self.viewport)
            .field("on_create", &self.on_create.is_some())
            .field("on_visibility_change", &self.on_visibility_change.is_some())
            .field("on_place", &self.on_place.is_some())
            .field("on_content_size", &self.on_content_size.is_some())
            .finish()
    }
}

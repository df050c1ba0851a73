//! Pure index/position arithmetic for a uniform grid.
//!
//! The "main" axis is the axis the grid grows along (vertical for `RowMajor`, horizontal
//! for `ColumnMajor`); the "cross" axis holds `group_count` cells per line.

use crate::{GridConfig, LayoutAxis, Offset, Position, RecyclerError, Size, VisibleWindow};

/// Rows of slots kept beyond what fits in the viewport, to absorb partial rows at both
/// edges.
const SAFETY_ROWS: f32 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    grid: GridConfig,
    viewport: Size,
}

impl Geometry {
    pub(crate) fn new(grid: GridConfig, viewport: Size) -> Self {
        Self { grid, viewport }
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    fn main_cell(&self) -> f32 {
        match self.grid.axis {
            LayoutAxis::RowMajor => self.grid.cell_height,
            LayoutAxis::ColumnMajor => self.grid.cell_width,
        }
    }

    fn main_spacing(&self) -> f32 {
        match self.grid.axis {
            LayoutAxis::RowMajor => self.grid.spacing_y,
            LayoutAxis::ColumnMajor => self.grid.spacing_x,
        }
    }

    /// Distance between the starts of two consecutive lines along the main axis.
    pub fn stride(&self) -> f32 {
        self.main_cell() + self.main_spacing()
    }

    /// Viewport size along the main axis.
    pub fn viewport_extent(&self) -> f32 {
        match self.grid.axis {
            LayoutAxis::RowMajor => self.viewport.height,
            LayoutAxis::ColumnMajor => self.viewport.width,
        }
    }

    /// Reads the main-axis component of a host scroll offset, ignoring its sign.
    pub fn main_offset(&self, offset: Offset) -> f32 {
        let v = match self.grid.axis {
            LayoutAxis::RowMajor => offset.y,
            LayoutAxis::ColumnMajor => offset.x,
        };
        if v < 0.0 { -v } else { v }
    }

    /// Number of lines (rows or columns) worth of slots the pool holds.
    ///
    /// `None` when the viewport is too large for the count to fit in a `usize`.
    pub fn lines_per_pool(&self) -> Option<usize> {
        let lines = self.viewport_extent() / self.stride() + SAFETY_ROWS;
        // `usize::MAX as f32` rounds up, so equality already overflows.
        if lines >= usize::MAX as f32 {
            return None;
        }
        // Truncating cast; the viewport is validated to be finite and non-negative.
        Some(lines as usize)
    }

    /// Maximum number of slots ever needed to cover the viewport, or `None` on overflow.
    pub fn capacity(&self) -> Option<usize> {
        self.lines_per_pool()?.checked_mul(self.grid.group_count)
    }

    /// Number of lines needed to hold `total_count` items.
    pub fn line_count(&self, total_count: usize) -> usize {
        total_count.div_ceil(self.grid.group_count)
    }

    pub fn position_of(&self, index: usize) -> Position {
        let g = self.grid.group_count;
        let step_x = self.grid.cell_width + self.grid.spacing_x;
        let step_y = self.grid.cell_height + self.grid.spacing_y;
        let (column, row) = match self.grid.axis {
            LayoutAxis::RowMajor => (index % g, index / g),
            LayoutAxis::ColumnMajor => (index / g, index % g),
        };
        Position {
            x: column as f32 * step_x,
            y: -(row as f32) * step_y,
        }
    }

    fn content_main(&self, total_count: usize) -> f32 {
        let lines = self.line_count(total_count) as f32;
        (lines * self.main_cell() + (lines - 1.0) * self.main_spacing()).max(0.0)
    }

    fn content_cross(&self) -> f32 {
        let g = self.grid.group_count as f32;
        match self.grid.axis {
            LayoutAxis::RowMajor => {
                g * (self.grid.cell_width + self.grid.spacing_x) - self.grid.spacing_x
            }
            LayoutAxis::ColumnMajor => {
                g * (self.grid.cell_height + self.grid.spacing_y) - self.grid.spacing_y
            }
        }
    }

    /// Total scrollable size of the content for `total_count` items.
    pub fn content_extent(&self, total_count: usize) -> Size {
        let main = self.content_main(total_count);
        let cross = self.content_cross();
        match self.grid.axis {
            LayoutAxis::RowMajor => Size::new(cross, main),
            LayoutAxis::ColumnMajor => Size::new(main, cross),
        }
    }

    /// Largest meaningful main-axis scroll offset.
    pub fn max_scroll_offset(&self, total_count: usize) -> f32 {
        (self.content_main(total_count) - self.viewport_extent()).max(0.0)
    }

    pub fn is_scrolled_to_end(&self, offset: f32, total_count: usize) -> bool {
        offset >= self.content_main(total_count) - self.viewport_extent()
    }

    /// First index of the window for a main-axis `offset`.
    ///
    /// Snaps to `0` within one cell of the start and to the last full window at the end.
    /// In between, the window starts one line above the first line that is cut by the
    /// viewport edge, so fast scrolling never exposes an unbound cell.
    pub fn start_index_for_offset(
        &self,
        offset: f32,
        total_count: usize,
        capacity: usize,
    ) -> usize {
        let offset = if offset < 0.0 { -offset } else { offset };
        if offset <= self.main_cell() {
            return 0;
        }
        if self.is_scrolled_to_end(offset, total_count) {
            return total_count.saturating_sub(capacity);
        }
        let stride = self.stride();
        let whole = (offset / stride) as usize;
        let partial = usize::from(offset % stride > 0.0);
        (whole + partial).saturating_sub(1) * self.grid.group_count
    }

    /// The window that should be bound for a main-axis `offset`, or `None` when there are
    /// no items.
    pub fn window_for_offset(
        &self,
        offset: f32,
        total_count: usize,
        capacity: usize,
    ) -> Result<Option<VisibleWindow>, RecyclerError> {
        if total_count == 0 {
            return Ok(None);
        }
        if capacity == 0 {
            return Err(RecyclerError::CapacityExceeded {
                requested: 1,
                capacity,
            });
        }
        if total_count <= capacity {
            return VisibleWindow::new(0, total_count - 1).map(Some);
        }
        let start = self.start_index_for_offset(offset, total_count, capacity);
        let window = if start.saturating_add(capacity) >= total_count {
            VisibleWindow::new(total_count - capacity, total_count - 1)?
        } else {
            VisibleWindow::new(start, start + capacity - 1)?
        };
        Ok(Some(window))
    }

    /// Main-axis offset that brings the line holding `index` to the start of the viewport,
    /// clamped to the scrollable range.
    pub fn scroll_offset_for_index(&self, index: usize, total_count: usize) -> f32 {
        let line = index / self.grid.group_count;
        (line as f32 * self.stride()).min(self.max_scroll_offset(total_count))
    }

    /// Turns a main-axis offset into a host offset on the right axis.
    pub fn offset_along_axis(&self, main: f32) -> Offset {
        match self.grid.axis {
            LayoutAxis::RowMajor => Offset::new(0.0, main),
            LayoutAxis::ColumnMajor => Offset::new(main, 0.0),
        }
    }
}

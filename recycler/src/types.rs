use crate::RecyclerError;

/// Direction in which the grid grows as items are added.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutAxis {
    /// `group_count` items per row, rows flow downward (vertical scrolling).
    #[default]
    RowMajor,
    /// `group_count` items per column, columns flow rightward (horizontal scrolling).
    ColumnMajor,
}

/// A 2-D scroll offset as reported by the host's scroll container.
///
/// Only the component along the growth axis is read, and its sign is ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Top-left corner of a cell relative to the top-left corner of the content.
///
/// `y` grows upward, so rows below the first have negative `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Opaque handle to one reusable cell.
///
/// Handles are dense (`0..slot_count`) and stay valid for the lifetime of the
/// [`crate::Recycler`] that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    /// Position of the slot in pool order.
    pub fn local_index(self) -> usize {
        self.0
    }
}

/// Contiguous, inclusive range of logical indices bound to slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleWindow {
    pub start_index: usize,
    pub end_index: usize, // inclusive
}

impl VisibleWindow {
    pub fn new(start_index: usize, end_index: usize) -> Result<Self, RecyclerError> {
        if end_index < start_index {
            return Err(RecyclerError::InvalidWindow {
                start_index,
                end_index,
            });
        }
        Ok(Self {
            start_index,
            end_index,
        })
    }

    pub fn len(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    /// Always `false`: [`VisibleWindow::new`] rejects empty windows.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index <= self.end_index
    }

    pub fn indices(&self) -> core::ops::RangeInclusive<usize> {
        self.start_index..=self.end_index
    }
}

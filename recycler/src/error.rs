use core::fmt;

/// Errors reported by the recycler.
///
/// None of these are retryable: they mean the caller handed over an inconsistent
/// configuration or the engine detected a broken internal invariant. When an
/// operation returns an error, the previously bound window is left untouched.
#[derive(Clone, Debug, PartialEq)]
pub enum RecyclerError {
    /// `group_count` must be at least 1.
    InvalidGroupCount,
    /// Cell width and height must be finite and positive.
    InvalidCellSize { width: f32, height: f32 },
    /// Spacing must be finite and non-negative.
    InvalidSpacing { x: f32, y: f32 },
    /// Viewport extent must be finite and non-negative.
    InvalidViewport { width: f32, height: f32 },
    /// The computed window ends before it starts.
    InvalidWindow { start_index: usize, end_index: usize },
    /// No slot is bound to `index`.
    IndexNotBound { index: usize },
    /// The pool was asked for a slot beyond its capacity.
    CapacityExceeded { requested: usize, capacity: usize },
    /// The outgoing and incoming index lists of a reconciliation differ in length.
    UnpairedReassignment { outgoing: usize, incoming: usize },
}

impl RecyclerError {
    /// Returns `true` for errors caused by the grid or viewport configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidGroupCount
                | Self::InvalidCellSize { .. }
                | Self::InvalidSpacing { .. }
                | Self::InvalidViewport { .. }
                | Self::InvalidWindow { .. }
        )
    }
}

impl fmt::Display for RecyclerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGroupCount => f.write_str("group count must be at least 1"),
            Self::InvalidCellSize { width, height } => {
                write!(f, "invalid cell size {width}x{height}")
            }
            Self::InvalidSpacing { x, y } => write!(f, "invalid spacing ({x}, {y})"),
            Self::InvalidViewport { width, height } => {
                write!(f, "invalid viewport size {width}x{height}")
            }
            Self::InvalidWindow {
                start_index,
                end_index,
            } => write!(
                f,
                "window end {end_index} is before window start {start_index}"
            ),
            Self::IndexNotBound { index } => write!(f, "index {index} is not bound to a slot"),
            Self::CapacityExceeded {
                requested,
                capacity,
            } => write!(
                f,
                "slot {requested} requested but the pool capacity is {capacity}"
            ),
            Self::UnpairedReassignment { outgoing, incoming } => write!(
                f,
                "cannot pair {outgoing} outgoing indices with {incoming} incoming indices"
            ),
        }
    }
}

impl core::error::Error for RecyclerError {}

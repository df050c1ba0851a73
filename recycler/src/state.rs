use crate::{Offset, VisibleWindow};

/// A lightweight, serializable snapshot of what a [`crate::Recycler`] currently shows.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Restore it with
/// [`crate::Recycler::restore_state`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecyclerState {
    pub total_count: usize,
    pub scroll_offset: Offset,
    pub window: Option<VisibleWindow>,
}

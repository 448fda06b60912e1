//! Drag state for window move operations

use crate::math::Vec2;
use crate::window::WindowId;

/// An in-progress window move.
///
/// `offset` is captured at drag start as `pointer - window.position`, so
/// the window tracks the pointer without jumping under the cursor.
#[derive(Clone, Debug)]
pub struct DragState {
    /// Window being moved
    pub window_id: WindowId,
    /// Offset from the window's top-left corner to the grab point
    pub offset: Vec2,
}

impl DragState {
    /// Start a drag on a window
    pub fn new(window_id: WindowId, offset: Vec2) -> Self {
        Self { window_id, offset }
    }

    /// Window position for a given pointer position
    #[inline]
    pub fn window_position(&self, pointer: Vec2) -> Vec2 {
        pointer - self.offset
    }
}

//! Drag state machine

use super::DragState;
use crate::math::Vec2;
use crate::window::WindowId;

/// Holds the current drag operation, if any.
///
/// There is no cancellation or timeout; a drag lives until `end_drag`.
#[derive(Debug, Default)]
pub struct InputRouter {
    /// Current drag state
    drag: Option<DragState>,
}

impl InputRouter {
    /// Create an idle input router
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Current drag state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if a drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Begin moving a window
    pub fn start_window_move(&mut self, window_id: WindowId, offset: Vec2) {
        self.drag = Some(DragState::new(window_id, offset));
    }

    /// End the current drag operation
    pub fn end_drag(&mut self) {
        self.drag = None;
    }
}

//! Input result type

use serde::Serialize;

use crate::window::WindowId;

/// Result of routing a pointer event
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Event was consumed by the desktop
    Handled,
    /// Event hit nothing the desktop cares about
    Unhandled,
    /// Event should be forwarded to the window's content
    Forward {
        /// Target window
        window_id: WindowId,
        /// X coordinate in window-local space
        local_x: f32,
        /// Y coordinate in window-local space
        local_y: f32,
    },
}

impl InputResult {
    /// Check if the event was consumed (handled or forwarded)
    #[inline]
    pub fn is_handled(&self) -> bool {
        !matches!(self, InputResult::Unhandled)
    }

    /// Check if the event should be forwarded to window content
    #[inline]
    pub fn is_forward(&self) -> bool {
        matches!(self, InputResult::Forward { .. })
    }
}

//! Window struct and state

use serde::{Deserialize, Serialize};

use super::WindowId;
use crate::math::{Rect, Size, Vec2, FRAME_STYLE};

/// Lifecycle state of a window.
///
/// `Minimized` and `Maximized` are only reachable from open states, so the
/// invariants "minimized implies open" and "maximized implies open" hold by
/// construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    /// Not on screen and not in the taskbar
    #[default]
    Closed,
    /// Open at its own position and size
    Normal,
    /// Open but hidden from the canvas; still in the taskbar
    Minimized,
    /// Open and filling the viewport
    Maximized,
}

impl WindowState {
    /// Check if the window is open in any form
    #[inline]
    pub fn is_open(self) -> bool {
        self != WindowState::Closed
    }

    /// Check if the window is minimized
    #[inline]
    pub fn is_minimized(self) -> bool {
        self == WindowState::Minimized
    }

    /// Check if the window is maximized
    #[inline]
    pub fn is_maximized(self) -> bool {
        self == WindowState::Maximized
    }

    /// Check if the window should be drawn on the canvas
    #[inline]
    pub fn is_visible(self) -> bool {
        matches!(self, WindowState::Normal | WindowState::Maximized)
    }
}

/// A window on the simulated desktop
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Window {
    /// Registered identifier
    pub id: WindowId,
    /// Title bar text
    pub title: String,
    /// Top-left corner in screen coordinates
    pub position: Vec2,
    /// Size including the title bar
    pub size: Size,
    /// Current lifecycle state
    pub state: WindowState,
    /// Stacking priority; higher draws on top
    pub z_order: u32,
    /// Whether clicks in the content area are forwarded to the app
    pub content_interactive: bool,
    /// Saved geometry for restore after maximize
    pub(crate) restore_rect: Option<(Vec2, Size)>,
    /// Open state before minimize, restored on un-minimize
    pub(crate) prev_state: Option<WindowState>,
}

impl Window {
    /// The window's bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// The title bar rectangle (the drag handle)
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            FRAME_STYLE.title_bar_height,
        )
    }

    /// The close button rectangle
    pub fn close_button_rect(&self) -> Rect {
        self.button_rect(0)
    }

    /// The maximize button rectangle
    pub fn maximize_button_rect(&self) -> Rect {
        self.button_rect(1)
    }

    /// The minimize button rectangle
    pub fn minimize_button_rect(&self) -> Rect {
        self.button_rect(2)
    }

    /// Title bar button rect, counted from the right edge (0 = rightmost)
    fn button_rect(&self, index: u32) -> Rect {
        let step = index as f32;
        let x = self.position.x + self.size.width
            - FRAME_STYLE.button_margin
            - FRAME_STYLE.button_size * (step + 1.0)
            - FRAME_STYLE.button_spacing * step;
        let y = self.position.y + (FRAME_STYLE.title_bar_height - FRAME_STYLE.button_size) / 2.0;
        Rect::new(x, y, FRAME_STYLE.button_size, FRAME_STYLE.button_size)
    }
}

//! Window registration config

use serde::{Deserialize, Serialize};

use super::WindowId;
use crate::math::{Size, Vec2};

/// Configuration for registering a window.
///
/// The config is retained by the manager: closing a window discards its
/// live geometry, and the next open re-arms it from here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window identifier
    pub id: WindowId,
    /// Title bar text
    pub title: String,
    /// Spawn position (top-left)
    pub position: Vec2,
    /// Spawn size
    pub size: Size,
    /// Whether the content area handles its own mouse events
    pub content_interactive: bool,
}

impl WindowConfig {
    /// Create a window config
    pub fn new(id: impl Into<WindowId>, title: impl Into<String>, position: Vec2, size: Size) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            position,
            size,
            content_interactive: false,
        }
    }

    /// Mark the content area as interactive (clicks forwarded to the app)
    pub fn interactive(mut self) -> Self {
        self.content_interactive = true;
        self
    }
}

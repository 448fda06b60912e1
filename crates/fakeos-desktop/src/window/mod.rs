//! Window state and lifecycle
//!
//! Windows are registered once at construction from a fixed set of named
//! identifiers and live for the whole session; closing a window parks its
//! record in [`WindowState::Closed`] for reuse.

mod config;
mod manager;
mod region;
mod window;

pub use config::WindowConfig;
pub use manager::WindowManager;
pub use region::WindowRegion;
pub use window::{Window, WindowState};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a registered window ("explorer", "terminal", ...).
///
/// The set of valid ids is fixed at construction time; operations on ids
/// that were never registered are silent no-ops.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    /// Create a window id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WindowId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

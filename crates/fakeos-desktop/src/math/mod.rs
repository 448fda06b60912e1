//! Geometry types for the desktop
//!
//! Screen-space only: the simulated desktop has no camera or zoom, so all
//! coordinates are plain CSS pixels with the origin at the top-left.

mod rect;
mod size;
mod style;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE};
pub use vec2::Vec2;

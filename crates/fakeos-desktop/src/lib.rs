//! Window management for the FakeOS desktop
//!
//! This crate is the state core of the simulated desktop:
//!
//! - [`math`]: geometry types (`Vec2`, `Size`, `Rect`) and chrome metrics
//! - [`window`]: per-window state and the [`window::WindowManager`]
//! - [`input`]: the drag state machine and pointer-routing results
//! - [`DesktopEngine`]: translates raw pointer events and discrete UI
//!   operations into window-manager calls, and exposes serializable render
//!   views
//!
//! ## Design principles
//!
//! 1. **Pure state**: no DOM, no rendering; the UI layer reads positions
//!    and z-orders from snapshots and applies them declaratively
//! 2. **One stacking counter**: z-order values only grow and are never
//!    reused, so "most recently focused" is always a strict total order
//! 3. **Soft failures**: operations on unregistered windows are silent
//!    no-ops

pub mod input;
pub mod math;
pub mod window;

mod engine;

pub use engine::{DesktopEngine, TaskbarEntry, WindowView, TASKBAR_HEIGHT};
pub use input::{DragState, InputResult, InputRouter};
pub use math::{FrameStyle, Rect, Size, Vec2, FRAME_STYLE};
pub use window::{Window, WindowConfig, WindowId, WindowManager, WindowRegion, WindowState};

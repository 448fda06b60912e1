//! Input routing
//!
//! Dragging spans multiple pointer events, so it is modeled as an explicit
//! begin/update/end state machine rather than a blocking call. Releasing
//! the pointer is the only way a drag ends.

mod drag;
mod result;
mod router;

pub use drag::DragState;
pub use result::InputResult;
pub use router::InputRouter;

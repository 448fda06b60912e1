//! Session controller for the FakeOS desktop page
//!
//! [`DesktopSession`] is the single owner of all page state: the window
//! table (via [`fakeos_desktop::DesktopEngine`]), the file/recycle
//! collections and the terminal transcript (via
//! [`fakeos_terminal::ShellState`]), the boot sequence, the start menu and
//! the fullscreen flag. The UI layer feeds it discrete operations and raw
//! pointer events, and renders from its snapshot accessors.
//!
//! Timestamps are always injected (`now_ms`), never read from a clock
//! inside this crate, so a whole session can be replayed deterministically
//! in tests.

mod apps;
mod boot;
mod clock;
mod session;

// WASM exports (only available with the "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::SessionController;

pub use apps::{default_apps, AppEntry, StartMenu};
pub use boot::{BootPhase, BootSequence, POST_LINES};
pub use clock::clock_label;
pub use session::{DesktopSession, TERMINAL_GREETING, WINDOW_EXPLORER, WINDOW_RECYCLE, WINDOW_TERMINAL};

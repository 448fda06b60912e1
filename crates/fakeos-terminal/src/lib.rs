//! Line-oriented command interpreter for the FakeOS terminal
//!
//! The interpreter is a pure function from a raw input line and the current
//! session triple (transcript, active files, recycle bin) to the next
//! triple. It never reads a clock or any other hidden state; the caller
//! injects the current timestamp, so every execution is deterministic and
//! replayable.
//!
//! Commands operate on the [`fakeos_vfs::FileStore`] and append
//! human-readable lines to the [`Transcript`]. All failures are soft: a bad
//! command becomes an error line, never a crash.

mod clock;
mod interpreter;
mod parse;
mod transcript;

pub use clock::{format_date, Clock, FixedClock};
#[cfg(not(target_arch = "wasm32"))]
pub use clock::SystemClock;
pub use interpreter::{execute, ShellState, HELP_LINE};
pub use parse::{parse_line, ParsedLine};
pub use transcript::Transcript;

//! Time source abstraction
//!
//! Core logic never reads a clock directly; timestamps flow in as
//! milliseconds since the epoch. This keeps every interpreter run
//! deterministic and lets tests pin time exactly.

use chrono::offset::LocalResult;
use chrono::{Local, TimeZone};

/// Source of the current time in milliseconds since the epoch.
pub trait Clock {
    /// Current time in ms since the Unix epoch
    fn now_ms(&self) -> i64;
}

/// Clock pinned to a fixed instant, for tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

/// Wall clock backed by the operating system.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

/// Format a timestamp as a local date/time string, the `date` command's
/// output ("Wed Aug  6 2026 14:21:33" style).
pub fn format_date(now_ms: i64) -> String {
    match Local.timestamp_millis_opt(now_ms) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
            dt.format("%a %b %e %Y %H:%M:%S").to_string()
        }
        LocalResult::None => String::from("(invalid time)"),
    }
}

//! Taskbar clock formatting

use chrono::offset::LocalResult;
use chrono::{Local, TimeZone};

/// Format a timestamp as the taskbar clock label (24h "HH:MM")
pub fn clock_label(now_ms: i64) -> String {
    match Local.timestamp_millis_opt(now_ms) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.format("%H:%M").to_string(),
        LocalResult::None => String::from("--:--"),
    }
}

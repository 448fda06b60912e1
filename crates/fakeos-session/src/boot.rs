//! Boot screen timeline
//!
//! The boot sequence is a fixed series of timed reveals: five POST lines,
//! a progress bar, a ready banner, then done. It is a pure function of the
//! injected timestamp and shares no state with the desktop beyond the
//! boot-finished signal that gates interactivity.

/// POST lines revealed one by one during the first boot phase
pub static POST_LINES: [&str; 5] = [
    "AMI BIOS v2.14",
    "CPU: Intel(R) Core(TM) i7-9750H @ 2.60GHz",
    "RAM: 16384MB OK",
    "SATA: 1 devices detected",
    "POST: All systems nominal",
];

/// Interval between POST line reveals
const POST_LINE_INTERVAL_MS: f64 = 550.0;
/// Pause between the last POST line and the progress phase
const POST_SETTLE_MS: f64 = 400.0;
/// Interval between progress bar increments
const PROGRESS_TICK_MS: f64 = 140.0;
/// Progress added per tick (fixed; the bar must reach 100 on a schedule)
const PROGRESS_STEP: u32 = 8;
/// Hold at 100% before the ready banner
const READY_DELAY_MS: f64 = 300.0;
/// Banner display time before the desktop appears
const LAUNCH_DELAY_MS: f64 = 900.0;

/// Phase of the boot timeline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootPhase {
    /// POST lines appearing
    Post,
    /// Progress bar filling
    Progress,
    /// "launching desktop" banner
    Ready,
    /// Boot finished; the desktop is interactive
    Done,
}

/// Deterministic boot screen timeline, anchored at a start timestamp
#[derive(Clone, Copy, Debug)]
pub struct BootSequence {
    /// Start time (ms timestamp)
    start_ms: f64,
}

impl BootSequence {
    /// Create a boot sequence starting now
    pub fn new(start_ms: f64) -> Self {
        Self { start_ms }
    }

    /// Total duration from start to [`BootPhase::Done`]
    pub fn duration_ms() -> f64 {
        Self::ready_at() + LAUNCH_DELAY_MS
    }

    /// Current phase
    pub fn phase(&self, now_ms: f64) -> BootPhase {
        let elapsed = self.elapsed(now_ms);
        if elapsed < Self::progress_start() {
            BootPhase::Post
        } else if elapsed < Self::ready_at() {
            BootPhase::Progress
        } else if elapsed < Self::duration_ms() {
            BootPhase::Ready
        } else {
            BootPhase::Done
        }
    }

    /// POST lines revealed so far
    pub fn visible_lines(&self, now_ms: f64) -> &'static [&'static str] {
        let revealed = (self.elapsed(now_ms) / POST_LINE_INTERVAL_MS) as usize;
        &POST_LINES[..revealed.min(POST_LINES.len())]
    }

    /// Progress bar value, 0..=100
    pub fn progress(&self, now_ms: f64) -> u32 {
        let since_start = self.elapsed(now_ms) - Self::progress_start();
        if since_start < 0.0 {
            return 0;
        }
        let ticks = (since_start / PROGRESS_TICK_MS) as u32;
        (ticks * PROGRESS_STEP).min(100)
    }

    /// Check if the boot sequence has finished
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.phase(now_ms) == BootPhase::Done
    }

    fn elapsed(&self, now_ms: f64) -> f64 {
        (now_ms - self.start_ms).max(0.0)
    }

    /// Offset at which the progress phase begins
    fn progress_start() -> f64 {
        POST_LINES.len() as f64 * POST_LINE_INTERVAL_MS + POST_SETTLE_MS
    }

    /// Offset at which the ready banner appears
    fn ready_at() -> f64 {
        let ticks = 100f64 / PROGRESS_STEP as f64;
        Self::progress_start() + ticks.ceil() * PROGRESS_TICK_MS + READY_DELAY_MS
    }
}

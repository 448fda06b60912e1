//! The page-level session controller

use fakeos_desktop::{
    DesktopEngine, InputResult, Size, TaskbarEntry, Vec2, WindowConfig, WindowId, WindowView,
};
use fakeos_terminal::{execute, ShellState, Transcript};
use fakeos_vfs::{FileEntry, FileId, RecycleEntry};

use crate::apps::{default_apps, AppEntry, StartMenu};
use crate::boot::{BootPhase, BootSequence};
use crate::clock::clock_label;

/// Window id of the file explorer
pub const WINDOW_EXPLORER: &str = "explorer";
/// Window id of the recycle bin
pub const WINDOW_RECYCLE: &str = "recycle";
/// Window id of the terminal
pub const WINDOW_TERMINAL: &str = "terminal";

/// Greeting line the terminal starts with
pub const TERMINAL_GREETING: &str = "> FakeOS Terminal ready — type 'help'";

/// The desktop page controller.
///
/// Owns every piece of page state and is the only mutator of all of it:
/// the window table, the file/recycle collections, the transcript, the
/// boot timeline, the start menu and the fullscreen flag. Strictly
/// single-threaded and event-driven; each inbound event maps to exactly
/// one method call.
///
/// Until the boot sequence finishes (see [`DesktopSession::tick`]), the
/// desktop is not interactive and all window, pointer and terminal
/// operations are ignored.
pub struct DesktopSession {
    /// Window manager and pointer routing
    desktop: DesktopEngine,
    /// Transcript + file store triple
    shell: ShellState,
    /// Boot screen timeline
    boot: BootSequence,
    /// Sticky boot-finished signal
    booted: bool,
    /// Installed apps (start menu contents)
    apps: Vec<AppEntry>,
    /// Start menu open/search state
    start_menu: StartMenu,
    /// Fullscreen flag (the UI performs the actual browser request)
    fullscreen: bool,
}

impl DesktopSession {
    /// Create a session: registers the three windows, seeds the file store
    /// and the transcript, and starts the boot sequence at `start_ms`.
    pub fn new(width: f32, height: f32, start_ms: f64) -> Self {
        let mut desktop = DesktopEngine::new(width, height);
        desktop.register(
            WindowConfig::new(
                WINDOW_EXPLORER,
                "File Explorer",
                Vec2::new(180.0, 140.0),
                Size::new(520.0, 380.0),
            )
            .interactive(),
        );
        desktop.register(
            WindowConfig::new(
                WINDOW_RECYCLE,
                "Recycle Bin",
                Vec2::new(260.0, 200.0),
                Size::new(480.0, 360.0),
            )
            .interactive(),
        );
        desktop.register(
            WindowConfig::new(
                WINDOW_TERMINAL,
                "OS Terminal",
                Vec2::new(340.0, 220.0),
                Size::new(560.0, 400.0),
            )
            .interactive(),
        );

        Self {
            desktop,
            shell: ShellState::with_seed(TERMINAL_GREETING),
            boot: BootSequence::new(start_ms),
            booted: false,
            apps: default_apps(),
            start_menu: StartMenu::default(),
            fullscreen: false,
        }
    }

    // =========================================================================
    // Boot
    // =========================================================================

    /// Advance the boot timeline. Returns whether the desktop is ready.
    ///
    /// The ready signal is sticky: once the sequence completes, the desktop
    /// stays interactive for the rest of the session.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if !self.booted && self.boot.is_complete(now_ms) {
            self.booted = true;
        }
        self.booted
    }

    /// Check if the boot sequence has finished
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.booted
    }

    /// Boot phase at a timestamp (for rendering the boot screen)
    pub fn boot_phase(&self, now_ms: f64) -> BootPhase {
        self.boot.phase(now_ms)
    }

    /// POST lines revealed so far
    pub fn boot_lines(&self, now_ms: f64) -> &'static [&'static str] {
        self.boot.visible_lines(now_ms)
    }

    /// Boot progress bar value, 0..=100
    pub fn boot_progress(&self, now_ms: f64) -> u32 {
        self.boot.progress(now_ms)
    }

    // =========================================================================
    // Window operations
    // =========================================================================

    /// Open a window (desktop icon double-click or start menu row).
    /// Launching from the start menu closes it.
    pub fn open_window(&mut self, id: &str) {
        if !self.booted {
            return;
        }
        self.desktop.open_window(&WindowId::from(id));
        self.start_menu.close();
    }

    /// Close a window
    pub fn close_window(&mut self, id: &str) {
        if !self.booted {
            return;
        }
        self.desktop.close_window(&WindowId::from(id));
    }

    /// Minimize a window
    pub fn minimize_window(&mut self, id: &str) {
        if !self.booted {
            return;
        }
        self.desktop.minimize_window(&WindowId::from(id));
    }

    /// Toggle maximize on a window
    pub fn toggle_maximize(&mut self, id: &str) {
        if !self.booted {
            return;
        }
        self.desktop.toggle_maximize_window(&WindowId::from(id));
    }

    /// Taskbar button click: un-minimize a minimized window, raise a
    /// visible one.
    pub fn taskbar_click(&mut self, id: &str) {
        if !self.booted {
            return;
        }
        let id = WindowId::from(id);
        let minimized = self
            .desktop
            .windows()
            .get(&id)
            .is_some_and(|w| w.state.is_minimized());
        if minimized {
            self.desktop.restore_window(&id);
        } else {
            self.desktop.focus_window(&id);
        }
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.desktop.resize(width, height);
    }

    // =========================================================================
    // Pointer events
    // =========================================================================

    /// Route a pointer-down event
    pub fn pointer_down(&mut self, x: f32, y: f32) -> InputResult {
        if !self.booted {
            return InputResult::Unhandled;
        }
        self.desktop.handle_pointer_down(x, y)
    }

    /// Route a pointer-move event
    pub fn pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        if !self.booted {
            return InputResult::Unhandled;
        }
        self.desktop.handle_pointer_move(x, y)
    }

    /// Route a pointer-up event
    pub fn pointer_up(&mut self) -> InputResult {
        if !self.booted {
            return InputResult::Unhandled;
        }
        self.desktop.handle_pointer_up()
    }

    // =========================================================================
    // Terminal
    // =========================================================================

    /// Execute a terminal line against the session state
    pub fn run_command(&mut self, raw: &str, now_ms: i64) {
        if !self.booted {
            return;
        }
        let state = std::mem::take(&mut self.shell);
        self.shell = execute(raw, state, now_ms);
    }

    // =========================================================================
    // Explorer / recycle pane operations
    // =========================================================================

    /// Explorer "Delete" button: soft-delete a file and log it
    pub fn delete_file(&mut self, id: FileId, now_ms: i64) {
        if !self.booted {
            return;
        }
        if let Some(name) = self.shell.store.remove_by_id(id, now_ms) {
            self.shell.transcript.push(format!("Deleted {name}"));
        }
    }

    /// Recycle "Restore" button: bring a file back and log it
    pub fn restore_file(&mut self, id: FileId) {
        if !self.booted {
            return;
        }
        if let Some(name) = self.shell.store.restore_by_id(id) {
            self.shell.transcript.push(format!("Restored {name}"));
        }
    }

    /// Recycle "Delete Permanently" button: purge one entry, no log line
    pub fn purge_file(&mut self, id: FileId) {
        if !self.booted {
            return;
        }
        self.shell.store.purge_by_id(id);
    }

    /// Recycle "Empty Recycle Bin" button
    pub fn empty_recycle_bin(&mut self) {
        if !self.booted {
            return;
        }
        self.shell.store.empty_recycle();
        self.shell.transcript.push("Recycle bin emptied");
    }

    // =========================================================================
    // Start menu, fullscreen, clock
    // =========================================================================

    /// Start button click
    pub fn toggle_start_menu(&mut self) {
        if !self.booted {
            return;
        }
        self.start_menu.toggle();
    }

    /// Escape key: close the start menu
    pub fn close_start_menu(&mut self) {
        self.start_menu.close();
    }

    /// Check if the start menu is showing
    #[inline]
    pub fn start_menu_open(&self) -> bool {
        self.start_menu.is_open()
    }

    /// Update the start menu search query
    pub fn set_start_query(&mut self, query: &str) {
        self.start_menu.set_query(query);
    }

    /// Apps matching the current search query
    pub fn visible_apps(&self) -> Vec<&AppEntry> {
        self.start_menu.filter(&self.apps)
    }

    /// Toggle the fullscreen flag, returning the new value
    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }

    /// Check the fullscreen flag
    #[inline]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Taskbar clock label for a timestamp
    pub fn clock_label(&self, now_ms: i64) -> String {
        clock_label(now_ms)
    }

    // =========================================================================
    // Render snapshots
    // =========================================================================

    /// Visible windows, back to front
    pub fn window_views(&self) -> Vec<WindowView> {
        self.desktop.window_views()
    }

    /// Taskbar buttons in first-opened order
    pub fn taskbar(&self) -> Vec<TaskbarEntry> {
        self.desktop.taskbar()
    }

    /// Active files for the explorer pane
    pub fn files(&self) -> &[FileEntry] {
        self.shell.store.files()
    }

    /// Recycle bin entries, newest first
    pub fn recycle_entries(&self) -> &[RecycleEntry] {
        self.shell.store.recycle()
    }

    /// Terminal transcript
    pub fn transcript(&self) -> &Transcript {
        &self.shell.transcript
    }

    /// Read access to the desktop engine (for tests and the wasm layer)
    #[inline]
    pub fn desktop(&self) -> &DesktopEngine {
        &self.desktop
    }
}

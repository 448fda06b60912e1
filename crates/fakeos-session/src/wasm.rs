//! WASM exports for the desktop session
//!
//! Wraps [`DesktopSession`] with a JS-friendly API so the page can drive
//! the core directly: discrete operations in, JSON snapshots out.

use wasm_bindgen::prelude::*;

use crate::session::DesktopSession;

/// Current timestamp from the JS host
fn date_now() -> f64 {
    js_sys::Date::now()
}

/// Serialize any view to a JSON string, empty array on failure
fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "[]".to_string())
}

/// Session controller for WASM - wraps DesktopSession with a JS-friendly API
#[wasm_bindgen]
pub struct SessionController {
    session: DesktopSession,
}

#[wasm_bindgen]
impl SessionController {
    /// Create a new session controller; the boot sequence starts now
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            session: DesktopSession::new(width, height, date_now()),
        }
    }

    // =========================================================================
    // Boot / frame tick
    // =========================================================================

    /// Advance the boot timeline; returns whether the desktop is ready
    pub fn tick(&mut self) -> bool {
        self.session.tick(date_now())
    }

    /// POST lines revealed so far, as a JSON array of strings
    pub fn boot_lines_json(&self) -> String {
        to_json(&self.session.boot_lines(date_now()))
    }

    /// Boot progress bar value, 0..=100
    pub fn boot_progress(&self) -> u32 {
        self.session.boot_progress(date_now())
    }

    // =========================================================================
    // Window operations
    // =========================================================================

    /// Open a window by id ("explorer", "recycle", "terminal")
    pub fn open_window(&mut self, id: &str) {
        self.session.open_window(id);
    }

    /// Close a window by id
    pub fn close_window(&mut self, id: &str) {
        self.session.close_window(id);
    }

    /// Minimize a window by id
    pub fn minimize_window(&mut self, id: &str) {
        self.session.minimize_window(id);
    }

    /// Toggle maximize on a window by id
    pub fn toggle_maximize(&mut self, id: &str) {
        self.session.toggle_maximize(id);
    }

    /// Taskbar button click
    pub fn taskbar_click(&mut self, id: &str) {
        self.session.taskbar_click(id);
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.session.resize(width, height);
    }

    // =========================================================================
    // Pointer events
    // =========================================================================

    /// Route a pointer-down event; returns the routing result as JSON
    pub fn pointer_down(&mut self, x: f32, y: f32) -> String {
        to_json(&self.session.pointer_down(x, y))
    }

    /// Route a pointer-move event
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.session.pointer_move(x, y);
    }

    /// Route a pointer-up event
    pub fn pointer_up(&mut self) {
        self.session.pointer_up();
    }

    // =========================================================================
    // Terminal and file panes
    // =========================================================================

    /// Execute a terminal line
    pub fn run_command(&mut self, raw: &str) {
        self.session.run_command(raw, date_now() as i64);
    }

    /// Explorer delete button
    pub fn delete_file(&mut self, id: u32) {
        self.session.delete_file(id, date_now() as i64);
    }

    /// Recycle restore button
    pub fn restore_file(&mut self, id: u32) {
        self.session.restore_file(id);
    }

    /// Recycle delete-permanently button
    pub fn purge_file(&mut self, id: u32) {
        self.session.purge_file(id);
    }

    /// Empty the recycle bin
    pub fn empty_recycle_bin(&mut self) {
        self.session.empty_recycle_bin();
    }

    // =========================================================================
    // Start menu, fullscreen, clock
    // =========================================================================

    /// Start button click
    pub fn toggle_start_menu(&mut self) {
        self.session.toggle_start_menu();
    }

    /// Escape key
    pub fn close_start_menu(&mut self) {
        self.session.close_start_menu();
    }

    /// Check if the start menu is showing
    pub fn start_menu_open(&self) -> bool {
        self.session.start_menu_open()
    }

    /// Update the start menu search query
    pub fn set_start_query(&mut self, query: &str) {
        self.session.set_start_query(query);
    }

    /// Apps matching the search query, as JSON
    pub fn visible_apps_json(&self) -> String {
        to_json(&self.session.visible_apps())
    }

    /// Toggle the fullscreen flag, returning the new value
    pub fn toggle_fullscreen(&mut self) -> bool {
        self.session.toggle_fullscreen()
    }

    /// Taskbar clock label ("HH:MM")
    pub fn clock_label(&self) -> String {
        self.session.clock_label(date_now() as i64)
    }

    // =========================================================================
    // Render snapshots
    // =========================================================================

    /// Visible windows back to front, as JSON
    pub fn windows_json(&self) -> String {
        to_json(&self.session.window_views())
    }

    /// Taskbar entries in first-opened order, as JSON
    pub fn taskbar_json(&self) -> String {
        to_json(&self.session.taskbar())
    }

    /// Active files, as JSON
    pub fn files_json(&self) -> String {
        to_json(&self.session.files())
    }

    /// Recycle bin entries newest first, as JSON
    pub fn recycle_json(&self) -> String {
        to_json(&self.session.recycle_entries())
    }

    /// Terminal transcript lines, as JSON
    pub fn transcript_json(&self) -> String {
        to_json(&self.session.transcript())
    }
}

//! Desktop engine coordinating windows and input

use serde::Serialize;

use crate::input::{InputResult, InputRouter};
use crate::math::{Rect, Size, Vec2};
use crate::window::{WindowConfig, WindowId, WindowManager, WindowRegion, WindowState};

/// Height of the taskbar strip at the bottom of the screen, in pixels
pub const TASKBAR_HEIGHT: f32 = 48.0;

/// A window prepared for rendering, back to front
#[derive(Clone, Debug, Serialize)]
pub struct WindowView {
    pub id: WindowId,
    pub title: String,
    pub state: WindowState,
    pub focused: bool,
    pub rect: Rect,
    pub z_order: u32,
    /// Whether the window content area handles its own mouse events
    pub content_interactive: bool,
}

/// A taskbar button, in first-opened order
#[derive(Clone, Debug, Serialize)]
pub struct TaskbarEntry {
    pub id: WindowId,
    pub title: String,
    pub minimized: bool,
}

/// Desktop engine: the window manager plus pointer routing.
///
/// The UI layer calls the discrete operations (icon double-click, taskbar
/// click, window buttons) or feeds raw pointer events into the `handle_*`
/// methods, then reads back [`WindowView`]s to render. All state is owned
/// here; nothing is mutated from the outside.
pub struct DesktopEngine {
    /// Screen size in pixels
    screen_size: Size,
    /// Window manager
    windows: WindowManager,
    /// Drag state machine
    input: InputRouter,
}

impl DesktopEngine {
    /// Create an engine for a screen size with no registered windows
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            screen_size: Size::new(width, height),
            windows: WindowManager::new(),
            input: InputRouter::new(),
        }
    }

    /// Register a window
    pub fn register(&mut self, config: WindowConfig) {
        self.windows.register(config);
    }

    /// Update the screen size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.screen_size = Size::new(width, height);
    }

    /// Current screen size
    #[inline]
    pub fn screen_size(&self) -> Size {
        self.screen_size
    }

    /// The window manager (read access for views and tests)
    #[inline]
    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    // =========================================================================
    // Discrete operations
    // =========================================================================

    /// Open a window (icon double-click, start menu)
    pub fn open_window(&mut self, id: &WindowId) {
        self.windows.open(id);
    }

    /// Close a window
    pub fn close_window(&mut self, id: &WindowId) {
        if self.dragging_window(id) {
            self.input.end_drag();
        }
        self.windows.close(id);
    }

    /// Minimize a window
    pub fn minimize_window(&mut self, id: &WindowId) {
        if self.dragging_window(id) {
            self.input.end_drag();
        }
        self.windows.minimize(id);
    }

    /// Un-minimize a window (taskbar click on a minimized entry)
    pub fn restore_window(&mut self, id: &WindowId) {
        self.windows.restore(id);
    }

    /// Toggle maximize; a maximized window fills the viewport above the
    /// taskbar strip
    pub fn toggle_maximize_window(&mut self, id: &WindowId) {
        if self.dragging_window(id) {
            self.input.end_drag();
        }
        let bounds = self.maximize_bounds();
        self.windows.toggle_maximize(id, bounds);
    }

    /// Raise a window (taskbar click on a visible entry, mousedown)
    pub fn focus_window(&mut self, id: &WindowId) {
        self.windows.bring_to_front(id);
    }

    // =========================================================================
    // Dragging
    // =========================================================================

    /// Begin dragging a window from a pointer position.
    ///
    /// Raises the window. Maximized windows are not draggable; un-maximize
    /// first.
    pub fn begin_drag(&mut self, id: &WindowId, pointer: Vec2) {
        let Some(window) = self.windows.get(id) else {
            return;
        };
        if !window.state.is_visible() || window.state.is_maximized() {
            return;
        }

        let offset = pointer - window.position;
        self.windows.bring_to_front(id);
        self.input.start_window_move(id.clone(), offset);
    }

    /// Track the pointer during a drag
    pub fn update_drag(&mut self, pointer: Vec2) {
        if let Some(drag) = self.input.drag_state() {
            let id = drag.window_id.clone();
            let position = drag.window_position(pointer);
            self.windows.move_window(&id, position);
        }
    }

    /// End the current drag
    pub fn end_drag(&mut self) {
        self.input.end_drag();
    }

    /// Check if a drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    // =========================================================================
    // Pointer routing
    // =========================================================================

    /// Handle a pointer-down event at screen coordinates
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> InputResult {
        let pos = Vec2::new(x, y);

        let Some((id, region)) = self.windows.region_at(pos) else {
            return InputResult::Unhandled;
        };

        match region {
            WindowRegion::CloseButton => {
                self.close_window(&id);
                InputResult::Handled
            }
            WindowRegion::MinimizeButton => {
                self.minimize_window(&id);
                InputResult::Handled
            }
            WindowRegion::MaximizeButton => {
                self.toggle_maximize_window(&id);
                InputResult::Handled
            }
            WindowRegion::TitleBar => {
                // begin_drag raises; for a maximized window it degrades to
                // a plain focus
                self.begin_drag(&id, pos);
                self.focus_window(&id);
                InputResult::Handled
            }
            WindowRegion::Content => {
                self.focus_window(&id);
                match self.windows.get(&id) {
                    Some(window) if window.content_interactive => {
                        let local = pos - window.position;
                        InputResult::Forward {
                            window_id: id,
                            local_x: local.x,
                            local_y: local.y,
                        }
                    }
                    _ => InputResult::Handled,
                }
            }
        }
    }

    /// Handle a pointer-move event
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        if !self.input.is_dragging() {
            return InputResult::Unhandled;
        }
        self.update_drag(Vec2::new(x, y));
        InputResult::Handled
    }

    /// Handle a pointer-up event
    pub fn handle_pointer_up(&mut self) -> InputResult {
        if self.input.is_dragging() {
            self.input.end_drag();
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    // =========================================================================
    // Render views
    // =========================================================================

    /// Visible windows for rendering, back to front
    pub fn window_views(&self) -> Vec<WindowView> {
        let focused = self.windows.focused().cloned();

        self.windows
            .windows_by_z()
            .into_iter()
            .filter(|w| w.state.is_visible())
            .map(|w| WindowView {
                id: w.id.clone(),
                title: w.title.clone(),
                state: w.state,
                focused: focused.as_ref() == Some(&w.id),
                rect: w.rect(),
                z_order: w.z_order,
                content_interactive: w.content_interactive,
            })
            .collect()
    }

    /// Taskbar buttons in first-opened order
    pub fn taskbar(&self) -> Vec<TaskbarEntry> {
        self.windows
            .open_order()
            .iter()
            .filter_map(|id| self.windows.get(id))
            .map(|w| TaskbarEntry {
                id: w.id.clone(),
                title: w.title.clone(),
                minimized: w.state.is_minimized(),
            })
            .collect()
    }

    /// The rectangle a maximized window fills
    fn maximize_bounds(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.screen_size.width,
            self.screen_size.height - TASKBAR_HEIGHT,
        )
    }

    /// Check if the current drag targets the given window
    fn dragging_window(&self, id: &WindowId) -> bool {
        self.input
            .drag_state()
            .is_some_and(|drag| drag.window_id == *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Size;

    fn engine() -> DesktopEngine {
        let mut engine = DesktopEngine::new(1920.0, 1080.0);
        engine.register(
            WindowConfig::new(
                "explorer",
                "File Explorer",
                Vec2::new(180.0, 140.0),
                Size::new(520.0, 380.0),
            )
            .interactive(),
        );
        engine.register(
            WindowConfig::new(
                "terminal",
                "OS Terminal",
                Vec2::new(340.0, 220.0),
                Size::new(560.0, 400.0),
            )
            .interactive(),
        );
        engine
    }

    fn id(s: &str) -> WindowId {
        WindowId::from(s)
    }

    #[test]
    fn test_maximize_fills_viewport_above_taskbar() {
        let mut engine = engine();
        engine.open_window(&id("explorer"));
        engine.toggle_maximize_window(&id("explorer"));

        let w = engine.windows().get(&id("explorer")).unwrap();
        assert_eq!(w.position, Vec2::ZERO);
        assert!((w.size.width - 1920.0).abs() < 0.001);
        assert!((w.size.height - (1080.0 - TASKBAR_HEIGHT)).abs() < 0.001);
    }

    #[test]
    fn test_drag_moves_window_by_pointer_delta() {
        let mut engine = engine();
        engine.open_window(&id("explorer"));

        engine.begin_drag(&id("explorer"), Vec2::new(230.0, 150.0));
        assert!(engine.is_dragging());

        engine.update_drag(Vec2::new(530.0, 450.0));
        let w = engine.windows().get(&id("explorer")).unwrap();
        assert!((w.position.x - 480.0).abs() < 0.001);
        assert!((w.position.y - 440.0).abs() < 0.001);

        engine.end_drag();
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_drag_raises_window() {
        let mut engine = engine();
        engine.open_window(&id("explorer"));
        engine.open_window(&id("terminal"));
        assert_eq!(engine.windows().focused(), Some(&id("terminal")));

        engine.begin_drag(&id("explorer"), Vec2::new(200.0, 150.0));
        assert_eq!(engine.windows().focused(), Some(&id("explorer")));
    }

    #[test]
    fn test_maximized_window_refuses_drag() {
        let mut engine = engine();
        engine.open_window(&id("explorer"));
        engine.toggle_maximize_window(&id("explorer"));

        engine.begin_drag(&id("explorer"), Vec2::new(100.0, 10.0));
        assert!(!engine.is_dragging());

        let w = engine.windows().get(&id("explorer")).unwrap();
        assert_eq!(w.position, Vec2::ZERO);
    }

    #[test]
    fn test_pointer_down_on_buttons() {
        let mut engine = engine();
        engine.open_window(&id("explorer"));
        let w = engine.windows().get(&id("explorer")).unwrap().clone();

        // Minimize via its button
        let p = w.minimize_button_rect().center();
        assert_eq!(engine.handle_pointer_down(p.x, p.y), InputResult::Handled);
        assert_eq!(
            engine.windows().get(&id("explorer")).unwrap().state,
            WindowState::Minimized
        );

        // The window is now hidden; the same point hits nothing
        assert_eq!(engine.handle_pointer_down(p.x, p.y), InputResult::Unhandled);

        engine.restore_window(&id("explorer"));
        let w = engine.windows().get(&id("explorer")).unwrap().clone();
        let p = w.close_button_rect().center();
        assert_eq!(engine.handle_pointer_down(p.x, p.y), InputResult::Handled);
        assert_eq!(
            engine.windows().get(&id("explorer")).unwrap().state,
            WindowState::Closed
        );
    }

    #[test]
    fn test_pointer_down_title_bar_starts_drag() {
        let mut engine = engine();
        engine.open_window(&id("explorer"));

        // Title bar, left of the buttons
        assert_eq!(
            engine.handle_pointer_down(200.0, 150.0),
            InputResult::Handled
        );
        assert!(engine.is_dragging());

        engine.handle_pointer_move(250.0, 180.0);
        let w = engine.windows().get(&id("explorer")).unwrap();
        assert!((w.position.x - 230.0).abs() < 0.001);
        assert!((w.position.y - 170.0).abs() < 0.001);

        assert_eq!(engine.handle_pointer_up(), InputResult::Handled);
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_pointer_down_content_forwards_to_interactive_window() {
        let mut engine = engine();
        engine.open_window(&id("terminal"));

        let result = engine.handle_pointer_down(400.0, 300.0);
        match result {
            InputResult::Forward {
                window_id,
                local_x,
                local_y,
            } => {
                assert_eq!(window_id, id("terminal"));
                assert!((local_x - 60.0).abs() < 0.001);
                assert!((local_y - 80.0).abs() < 0.001);
            }
            other => panic!("Expected Forward, got {other:?}"),
        }
        // Content mousedown still focuses the window
        assert_eq!(engine.windows().focused(), Some(&id("terminal")));
    }

    #[test]
    fn test_pointer_events_outside_windows_are_unhandled() {
        let mut engine = engine();
        engine.open_window(&id("explorer"));

        assert_eq!(
            engine.handle_pointer_down(10.0, 10.0),
            InputResult::Unhandled
        );
        assert_eq!(engine.handle_pointer_move(20.0, 20.0), InputResult::Unhandled);
        assert_eq!(engine.handle_pointer_up(), InputResult::Unhandled);
    }

    #[test]
    fn test_closing_dragged_window_ends_drag() {
        let mut engine = engine();
        engine.open_window(&id("explorer"));
        engine.begin_drag(&id("explorer"), Vec2::new(200.0, 150.0));

        engine.close_window(&id("explorer"));
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_window_views_order_and_focus() {
        let mut engine = engine();
        engine.open_window(&id("explorer"));
        engine.open_window(&id("terminal"));
        engine.focus_window(&id("explorer"));

        let views = engine.window_views();
        assert_eq!(views.len(), 2);
        // Back to front: terminal below, explorer on top and focused
        assert_eq!(views[0].id, id("terminal"));
        assert_eq!(views[1].id, id("explorer"));
        assert!(views[1].focused);
        assert!(!views[0].focused);
        assert!(views[1].z_order > views[0].z_order);

        // Minimized windows disappear from the views but stay in the taskbar
        engine.minimize_window(&id("explorer"));
        let views = engine.window_views();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].id, id("terminal"));

        let taskbar = engine.taskbar();
        assert_eq!(taskbar.len(), 2);
        assert_eq!(taskbar[0].id, id("explorer"));
        assert!(taskbar[0].minimized);
        assert!(!taskbar[1].minimized);
    }

    #[test]
    fn test_window_views_serialize() {
        let mut engine = engine();
        engine.open_window(&id("explorer"));

        let json = serde_json::to_string(&engine.window_views()).unwrap();
        assert!(json.contains("\"explorer\""));
        assert!(json.contains("\"focused\":true"));
    }
}

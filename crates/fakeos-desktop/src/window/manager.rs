//! Window manager for lifecycle, focus, and z-order

use std::collections::HashMap;

use super::{Window, WindowConfig, WindowId, WindowRegion, WindowState};
use crate::math::{Rect, Vec2};

/// Window manager handling window lifecycle, z-order, and focus.
///
/// Every window is registered once (from a closed set of ids) and its
/// record lives for the whole session; `close` parks it in
/// [`WindowState::Closed`] and the next `open` re-arms the spawn geometry
/// from the registered config.
///
/// The z counter only ever grows. Values are never reused or compacted, so
/// the stacking order stays a strict total order across any number of
/// open/close cycles.
///
/// All operations are silent no-ops on ids that were never registered.
pub struct WindowManager {
    /// All windows by id
    windows: HashMap<WindowId, Window>,
    /// Registered spawn configs, consulted on reopen
    configs: HashMap<WindowId, WindowConfig>,
    /// Focus stack (most recently focused at the end)
    focus_stack: Vec<WindowId>,
    /// Open windows in first-opened order (the taskbar order)
    open_order: Vec<WindowId>,
    /// Next z-order value
    next_z: u32,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create a window manager with no registered windows
    pub fn new() -> Self {
        Self {
            windows: HashMap::new(),
            configs: HashMap::new(),
            focus_stack: Vec::new(),
            open_order: Vec::new(),
            next_z: 1,
        }
    }

    /// Create a window manager from a set of configs
    pub fn with_windows(configs: impl IntoIterator<Item = WindowConfig>) -> Self {
        let mut manager = Self::new();
        for config in configs {
            manager.register(config);
        }
        manager
    }

    /// Register a window. It starts closed.
    pub fn register(&mut self, config: WindowConfig) {
        let window = Window {
            id: config.id.clone(),
            title: config.title.clone(),
            position: config.position,
            size: config.size,
            state: WindowState::Closed,
            z_order: 0,
            content_interactive: config.content_interactive,
            restore_rect: None,
            prev_state: None,
        };
        self.windows.insert(config.id.clone(), window);
        self.configs.insert(config.id.clone(), config);
    }

    /// Check if an id is registered
    #[inline]
    pub fn is_registered(&self, id: &WindowId) -> bool {
        self.windows.contains_key(id)
    }

    /// Open a window (no-op on membership if already open) and raise it.
    ///
    /// A closed window respawns at its registered geometry; a minimized
    /// window returns to the state it was minimized from.
    pub fn open(&mut self, id: &WindowId) {
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };

        match window.state {
            WindowState::Closed => {
                if let Some(config) = self.configs.get(id) {
                    window.position = config.position;
                    window.size = config.size;
                }
                window.restore_rect = None;
                window.prev_state = None;
                window.state = WindowState::Normal;
                self.open_order.push(id.clone());
            }
            WindowState::Minimized => {
                window.state = window.prev_state.take().unwrap_or(WindowState::Normal);
            }
            WindowState::Normal | WindowState::Maximized => {}
        }

        self.bring_to_front(id);
    }

    /// Close a window from any state. Geometry memory is discarded.
    pub fn close(&mut self, id: &WindowId) {
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };

        window.state = WindowState::Closed;
        window.restore_rect = None;
        window.prev_state = None;
        self.focus_stack.retain(|w| w != id);
        self.open_order.retain(|w| w != id);
    }

    /// Minimize an open window. Does NOT change its z-order.
    pub fn minimize(&mut self, id: &WindowId) {
        if let Some(window) = self.windows.get_mut(id) {
            if window.state.is_visible() {
                window.prev_state = Some(window.state);
                window.state = WindowState::Minimized;
            }
        }
    }

    /// Un-minimize a window, returning it to its prior state, and raise it.
    pub fn restore(&mut self, id: &WindowId) {
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };

        if window.state.is_minimized() {
            window.state = window.prev_state.take().unwrap_or(WindowState::Normal);
            self.bring_to_front(id);
        }
    }

    /// Toggle maximized state, filling `bounds` or restoring the saved
    /// geometry verbatim. Raises the window either way.
    pub fn toggle_maximize(&mut self, id: &WindowId, bounds: Rect) {
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };

        match window.state {
            WindowState::Normal => {
                window.restore_rect = Some((window.position, window.size));
                window.position = bounds.position();
                window.size = bounds.size();
                window.state = WindowState::Maximized;
            }
            WindowState::Maximized => {
                if let Some((pos, size)) = window.restore_rect.take() {
                    window.position = pos;
                    window.size = size;
                }
                window.state = WindowState::Normal;
            }
            WindowState::Closed | WindowState::Minimized => return,
        }

        self.bring_to_front(id);
    }

    /// Raise an open window to the top of the stacking order.
    ///
    /// This is the only place z-order changes: the window takes the next
    /// counter value and the counter advances.
    pub fn bring_to_front(&mut self, id: &WindowId) {
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };
        if !window.state.is_open() {
            return;
        }

        window.z_order = self.next_z;
        self.next_z += 1;

        self.focus_stack.retain(|w| w != id);
        self.focus_stack.push(id.clone());
    }

    /// Move an open window to a new position
    pub fn move_window(&mut self, id: &WindowId, position: Vec2) {
        if let Some(window) = self.windows.get_mut(id) {
            if window.state.is_open() {
                window.position = position;
            }
        }
    }

    /// The currently focused window id, skipping minimized windows
    pub fn focused(&self) -> Option<&WindowId> {
        self.focus_stack
            .iter()
            .rev()
            .find(|id| {
                self.windows
                    .get(*id)
                    .is_some_and(|w| w.state.is_visible())
            })
    }

    /// Get a window by id
    pub fn get(&self, id: &WindowId) -> Option<&Window> {
        self.windows.get(id)
    }

    /// Open windows (including minimized) sorted by z-order, back to front
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self
            .windows
            .values()
            .filter(|w| w.state.is_open())
            .collect();
        windows.sort_by_key(|w| w.z_order);
        windows
    }

    /// Open windows in first-opened order (the taskbar order)
    #[inline]
    pub fn open_order(&self) -> &[WindowId] {
        &self.open_order
    }

    /// Number of open windows (including minimized)
    pub fn open_count(&self) -> usize {
        self.open_order.len()
    }

    /// Find the topmost visible window at a screen position
    pub fn window_at(&self, pos: Vec2) -> Option<&WindowId> {
        let mut windows: Vec<&Window> = self
            .windows
            .values()
            .filter(|w| w.state.is_visible())
            .collect();
        windows.sort_by_key(|w| std::cmp::Reverse(w.z_order));

        windows
            .into_iter()
            .find(|w| w.rect().contains(pos))
            .map(|w| &w.id)
    }

    /// Find which region of which window is at a screen position
    pub fn region_at(&self, pos: Vec2) -> Option<(WindowId, WindowRegion)> {
        let id = self.window_at(pos)?.clone();
        let window = self.windows.get(&id)?;
        Some((id, hit_test_window(window, pos)))
    }
}

/// Hit test a point known to be inside the window
fn hit_test_window(window: &Window, pos: Vec2) -> WindowRegion {
    // Buttons take priority over the title bar they sit in
    if window.close_button_rect().contains(pos) {
        return WindowRegion::CloseButton;
    }
    if window.maximize_button_rect().contains(pos) {
        return WindowRegion::MaximizeButton;
    }
    if window.minimize_button_rect().contains(pos) {
        return WindowRegion::MinimizeButton;
    }
    if window.title_bar_rect().contains(pos) {
        return WindowRegion::TitleBar;
    }
    WindowRegion::Content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Size;

    fn manager() -> WindowManager {
        WindowManager::with_windows([
            WindowConfig::new("explorer", "File Explorer", Vec2::new(180.0, 140.0), Size::new(520.0, 380.0)),
            WindowConfig::new("recycle", "Recycle Bin", Vec2::new(260.0, 200.0), Size::new(480.0, 360.0)),
            WindowConfig::new("terminal", "OS Terminal", Vec2::new(340.0, 220.0), Size::new(560.0, 400.0)),
        ])
    }

    fn id(s: &str) -> WindowId {
        WindowId::from(s)
    }

    #[test]
    fn test_registered_windows_start_closed() {
        let wm = manager();
        assert!(wm.is_registered(&id("explorer")));
        assert_eq!(wm.get(&id("explorer")).unwrap().state, WindowState::Closed);
        assert_eq!(wm.open_count(), 0);
        assert_eq!(wm.focused(), None);
    }

    #[test]
    fn test_open_and_focus() {
        let mut wm = manager();
        wm.open(&id("explorer"));
        wm.open(&id("terminal"));

        assert_eq!(wm.get(&id("explorer")).unwrap().state, WindowState::Normal);
        assert_eq!(wm.focused(), Some(&id("terminal")));
        assert_eq!(wm.open_count(), 2);

        // Reopening an open window only raises it
        wm.open(&id("explorer"));
        assert_eq!(wm.focused(), Some(&id("explorer")));
        assert_eq!(wm.open_count(), 2);
    }

    #[test]
    fn test_unknown_window_is_noop() {
        let mut wm = manager();
        let ghost = id("ghost");

        wm.open(&ghost);
        wm.close(&ghost);
        wm.minimize(&ghost);
        wm.restore(&ghost);
        wm.toggle_maximize(&ghost, Rect::new(0.0, 0.0, 1920.0, 1080.0));
        wm.bring_to_front(&ghost);
        wm.move_window(&ghost, Vec2::ZERO);

        assert!(!wm.is_registered(&ghost));
        assert_eq!(wm.open_count(), 0);
        assert_eq!(wm.focused(), None);
    }

    #[test]
    fn test_z_order_strictly_monotonic() {
        let mut wm = manager();
        wm.open(&id("explorer"));
        wm.open(&id("recycle"));
        wm.open(&id("terminal"));

        let mut last_top = 0;
        for target in ["explorer", "terminal", "recycle", "explorer"] {
            wm.bring_to_front(&id(target));
            let top = wm.get(&id(target)).unwrap().z_order;
            assert!(top > last_top);
            for w in wm.windows_by_z() {
                if w.id != id(target) {
                    assert!(w.z_order < top);
                }
            }
            last_top = top;
        }
    }

    #[test]
    fn test_z_values_survive_close_reopen() {
        let mut wm = manager();
        wm.open(&id("explorer"));
        let z1 = wm.get(&id("explorer")).unwrap().z_order;

        wm.close(&id("explorer"));
        wm.open(&id("explorer"));
        let z2 = wm.get(&id("explorer")).unwrap().z_order;

        // The counter never goes backwards, even across close/reopen
        assert!(z2 > z1);
    }

    #[test]
    fn test_minimize_keeps_z_and_open_membership() {
        let mut wm = manager();
        wm.open(&id("explorer"));
        wm.open(&id("terminal"));
        let z_before = wm.get(&id("explorer")).unwrap().z_order;

        wm.minimize(&id("explorer"));
        let w = wm.get(&id("explorer")).unwrap();
        assert_eq!(w.state, WindowState::Minimized);
        assert!(w.state.is_open());
        assert_eq!(w.z_order, z_before);
        assert_eq!(wm.open_count(), 2);

        // Minimized windows don't hold focus
        assert_eq!(wm.focused(), Some(&id("terminal")));
    }

    #[test]
    fn test_minimize_when_closed_is_noop() {
        let mut wm = manager();
        wm.minimize(&id("explorer"));
        assert_eq!(wm.get(&id("explorer")).unwrap().state, WindowState::Closed);
    }

    #[test]
    fn test_restore_returns_to_prior_state() {
        let mut wm = manager();
        let bounds = Rect::new(0.0, 0.0, 1920.0, 1032.0);

        wm.open(&id("explorer"));
        wm.toggle_maximize(&id("explorer"), bounds);
        wm.minimize(&id("explorer"));
        wm.restore(&id("explorer"));

        // Came back maximized, not normal
        assert_eq!(wm.get(&id("explorer")).unwrap().state, WindowState::Maximized);
        assert_eq!(wm.focused(), Some(&id("explorer")));
    }

    #[test]
    fn test_open_clears_minimized_flag() {
        let mut wm = manager();
        wm.open(&id("explorer"));
        wm.minimize(&id("explorer"));

        wm.open(&id("explorer"));
        assert_eq!(wm.get(&id("explorer")).unwrap().state, WindowState::Normal);
        assert_eq!(wm.focused(), Some(&id("explorer")));
    }

    #[test]
    fn test_maximize_round_trip_restores_geometry() {
        let mut wm = manager();
        let bounds = Rect::new(0.0, 0.0, 1920.0, 1032.0);

        wm.open(&id("explorer"));
        wm.move_window(&id("explorer"), Vec2::new(250.0, 170.0));
        let (pos, size) = {
            let w = wm.get(&id("explorer")).unwrap();
            (w.position, w.size)
        };

        wm.toggle_maximize(&id("explorer"), bounds);
        let w = wm.get(&id("explorer")).unwrap();
        assert_eq!(w.state, WindowState::Maximized);
        assert_eq!(w.position, bounds.position());
        assert_eq!(w.size, bounds.size());

        wm.toggle_maximize(&id("explorer"), bounds);
        let w = wm.get(&id("explorer")).unwrap();
        assert_eq!(w.state, WindowState::Normal);
        assert_eq!(w.position, pos);
        assert_eq!(w.size, size);
    }

    #[test]
    fn test_maximize_raises_both_ways() {
        let mut wm = manager();
        let bounds = Rect::new(0.0, 0.0, 1920.0, 1032.0);
        wm.open(&id("explorer"));
        wm.open(&id("terminal"));

        wm.toggle_maximize(&id("explorer"), bounds);
        assert_eq!(wm.focused(), Some(&id("explorer")));

        wm.bring_to_front(&id("terminal"));
        wm.toggle_maximize(&id("explorer"), bounds);
        assert_eq!(wm.focused(), Some(&id("explorer")));
    }

    #[test]
    fn test_close_discards_geometry_and_membership() {
        let mut wm = manager();
        wm.open(&id("explorer"));
        wm.move_window(&id("explorer"), Vec2::new(900.0, 700.0));
        wm.close(&id("explorer"));

        let w = wm.get(&id("explorer")).unwrap();
        assert_eq!(w.state, WindowState::Closed);
        assert_eq!(wm.open_count(), 0);
        assert_eq!(wm.focused(), None);

        // Reopen respawns at the registered position
        wm.open(&id("explorer"));
        let w = wm.get(&id("explorer")).unwrap();
        assert_eq!(w.position, Vec2::new(180.0, 140.0));
    }

    #[test]
    fn test_close_from_minimized_and_maximized() {
        let mut wm = manager();
        let bounds = Rect::new(0.0, 0.0, 1920.0, 1032.0);

        wm.open(&id("explorer"));
        wm.minimize(&id("explorer"));
        wm.close(&id("explorer"));
        assert_eq!(wm.get(&id("explorer")).unwrap().state, WindowState::Closed);

        wm.open(&id("recycle"));
        wm.toggle_maximize(&id("recycle"), bounds);
        wm.close(&id("recycle"));
        assert_eq!(wm.get(&id("recycle")).unwrap().state, WindowState::Closed);
    }

    #[test]
    fn test_state_invariants_hold_after_any_sequence() {
        let mut wm = manager();
        let bounds = Rect::new(0.0, 0.0, 1920.0, 1032.0);
        let ids = [id("explorer"), id("recycle"), id("terminal")];

        // A fixed pseudo-random walk over the operation set
        let ops = [
            0usize, 1, 2, 3, 4, 0, 2, 4, 1, 3, 0, 0, 4, 2, 3, 1, 4, 4, 0, 3, 2, 1, 0, 4,
        ];
        for (step, op) in ops.into_iter().enumerate() {
            let target = &ids[step % ids.len()];
            match op {
                0 => wm.open(target),
                1 => wm.close(target),
                2 => wm.minimize(target),
                3 => wm.restore(target),
                _ => wm.toggle_maximize(target, bounds),
            }

            for wid in &ids {
                let w = wm.get(wid).unwrap();
                if w.state.is_minimized() || w.state.is_maximized() {
                    assert!(w.state.is_open());
                }
            }
        }
    }

    #[test]
    fn test_open_order_is_taskbar_order() {
        let mut wm = manager();
        wm.open(&id("terminal"));
        wm.open(&id("explorer"));
        wm.bring_to_front(&id("terminal"));

        // Focus changes don't reorder the taskbar
        assert_eq!(wm.open_order(), [id("terminal"), id("explorer")]);

        wm.close(&id("terminal"));
        wm.open(&id("terminal"));
        assert_eq!(wm.open_order(), [id("explorer"), id("terminal")]);
    }

    #[test]
    fn test_hit_testing_regions() {
        let mut wm = manager();
        wm.open(&id("explorer"));
        let w = wm.get(&id("explorer")).unwrap().clone();

        // Center of the title bar, away from the buttons
        let title_pos = Vec2::new(w.position.x + 50.0, w.position.y + 10.0);
        assert_eq!(
            wm.region_at(title_pos),
            Some((id("explorer"), WindowRegion::TitleBar))
        );

        let content_pos = Vec2::new(w.position.x + 50.0, w.position.y + 100.0);
        assert_eq!(
            wm.region_at(content_pos),
            Some((id("explorer"), WindowRegion::Content))
        );

        assert_eq!(
            wm.region_at(w.close_button_rect().center()),
            Some((id("explorer"), WindowRegion::CloseButton))
        );

        // Outside any window
        assert_eq!(wm.region_at(Vec2::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_hit_testing_respects_z_order() {
        let mut wm = manager();
        wm.open(&id("explorer"));
        wm.open(&id("recycle"));
        // Stack recycle exactly over explorer
        wm.move_window(&id("recycle"), Vec2::new(180.0, 140.0));

        let pos = Vec2::new(200.0, 300.0);
        assert_eq!(wm.window_at(pos), Some(&id("recycle")));

        wm.bring_to_front(&id("explorer"));
        assert_eq!(wm.window_at(pos), Some(&id("explorer")));

        // Minimized windows are transparent to hit testing
        wm.minimize(&id("explorer"));
        assert_eq!(wm.window_at(pos), Some(&id("recycle")));
    }
}

//! App registry and start menu state

use serde::Serialize;

use fakeos_desktop::WindowId;

/// An installed app as shown in the start menu
#[derive(Clone, Debug, Serialize)]
pub struct AppEntry {
    /// Window the app opens into
    pub id: WindowId,
    /// Display title
    pub title: String,
    /// Icon asset path
    pub icon: String,
}

impl AppEntry {
    fn new(id: &str, title: &str, icon: &str) -> Self {
        Self {
            id: WindowId::from(id),
            title: title.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// The fixed app list of the simulated desktop
pub fn default_apps() -> Vec<AppEntry> {
    vec![
        AppEntry::new("explorer", "File Explorer", "/icons/folder.png"),
        AppEntry::new("terminal", "Terminal", "/icons/terminal.png"),
        AppEntry::new("recycle", "Recycle Bin", "/icons/recycle.png"),
    ]
}

/// Start menu open/search state
#[derive(Clone, Debug, Default)]
pub struct StartMenu {
    /// Whether the panel is showing
    open: bool,
    /// Current search query
    query: String,
}

impl StartMenu {
    /// Toggle the panel; opening resets the search query
    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.query.clear();
    }

    /// Close the panel (Escape, or after launching an app)
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Check if the panel is showing
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Update the search query
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Current search query
    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Apps whose title contains the query, case-insensitively
    pub fn filter<'a>(&self, apps: &'a [AppEntry]) -> Vec<&'a AppEntry> {
        let needle = self.query.to_lowercase();
        apps.iter()
            .filter(|app| app.title.to_lowercase().contains(&needle))
            .collect()
    }
}

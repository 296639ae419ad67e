//! What to open: windows, each with its ordered tabs.
//!
//! An [`AttributeList`] always holds at least one [`WindowAttr`], and every
//! window always holds at least one [`TabAttr`]. Both invariants are kept by
//! construction: the collections are private and only ever grow.

use std::str::FromStr;

pub const ZOOM_MIN: i32 = -7;
pub const ZOOM_MAX: i32 = 7;
pub const ZOOM_DEFAULT: i32 = 0;

/// Tri-state for window chrome (`--show-menubar` / `--hide-menubar`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Default,
    Show,
    Hide,
}

/// How the title set by the running program combines with the tab title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DynamicTitleMode {
    #[default]
    Default,
    Replace,
    Prepend,
    Append,
    Hide,
}

impl DynamicTitleMode {
    /// Spelling accepted by `--dynamic-title-mode`; `None` for `Default`.
    pub fn as_arg(self) -> Option<&'static str> {
        match self {
            DynamicTitleMode::Default => None,
            DynamicTitleMode::Replace => Some("replace"),
            DynamicTitleMode::Prepend => Some("before"),
            DynamicTitleMode::Append => Some("after"),
            DynamicTitleMode::Hide => Some("none"),
        }
    }
}

impl FromStr for DynamicTitleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "replace" => Ok(DynamicTitleMode::Replace),
            "before" => Ok(DynamicTitleMode::Prepend),
            "after" => Ok(DynamicTitleMode::Append),
            "none" => Ok(DynamicTitleMode::Hide),
            _ => Err("expected one of replace, before, after or none".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabAttr {
    pub command: Option<Vec<String>>,
    pub directory: Option<String>,
    pub title: Option<String>,
    pub initial_title: Option<String>,
    pub dynamic_title_mode: DynamicTitleMode,
    pub hold: bool,
    pub active: bool,
    pub color_text: Option<String>,
    pub color_bg: Option<String>,
    pub position: i32,
}

impl Default for TabAttr {
    fn default() -> Self {
        TabAttr {
            command: None,
            directory: None,
            title: None,
            initial_title: None,
            dynamic_title_mode: DynamicTitleMode::Default,
            hold: false,
            active: false,
            color_text: None,
            color_bg: None,
            position: -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowAttr {
    pub display: Option<String>,
    pub role: Option<String>,
    pub geometry: Option<String>,
    pub icon: Option<String>,
    pub font: Option<String>,
    pub zoom: i32,
    pub workspace: i32,
    pub fullscreen: bool,
    pub maximize: bool,
    pub minimize: bool,
    pub drop_down: bool,
    pub menubar: Visibility,
    pub borders: Visibility,
    pub toolbar: Visibility,
    pub scrollbar: Visibility,
    pub reuse_last_window: bool,
    pub startup_id: Option<String>,
    pub sm_client_id: Option<String>,
    tabs: Vec<TabAttr>,
}

impl WindowAttr {
    /// A window with default settings and one default tab.
    pub fn new() -> Self {
        WindowAttr {
            display: None,
            role: None,
            geometry: None,
            icon: None,
            font: None,
            zoom: ZOOM_DEFAULT,
            workspace: -1,
            fullscreen: false,
            maximize: false,
            minimize: false,
            drop_down: false,
            menubar: Visibility::Default,
            borders: Visibility::Default,
            toolbar: Visibility::Default,
            scrollbar: Visibility::Default,
            reuse_last_window: false,
            startup_id: None,
            sm_client_id: None,
            tabs: vec![TabAttr::default()],
        }
    }

    /// Tabs in the order they are to be opened. Never empty.
    pub fn tabs(&self) -> &[TabAttr] {
        &self.tabs
    }

    pub fn tabs_mut(&mut self) -> impl Iterator<Item = &mut TabAttr> {
        self.tabs.iter_mut()
    }

    pub fn push_tab(&mut self, tab: TabAttr) -> &mut TabAttr {
        self.tabs.push(tab);
        self.current_tab_mut()
    }

    /// The most recently added tab; options apply here.
    pub fn current_tab_mut(&mut self) -> &mut TabAttr {
        let last = self.tabs.len() - 1;
        &mut self.tabs[last]
    }
}

impl Default for WindowAttr {
    fn default() -> Self {
        Self::new()
    }
}

/// Windows in the order they are to be realized. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeList {
    windows: Vec<WindowAttr>,
}

impl AttributeList {
    pub fn new() -> Self {
        AttributeList {
            windows: vec![WindowAttr::new()],
        }
    }

    pub fn windows(&self) -> &[WindowAttr] {
        &self.windows
    }

    pub fn windows_mut(&mut self) -> impl Iterator<Item = &mut WindowAttr> {
        self.windows.iter_mut()
    }

    pub fn push_window(&mut self, window: WindowAttr) -> &mut WindowAttr {
        self.windows.push(window);
        self.current_window_mut()
    }

    pub fn current_window_mut(&mut self) -> &mut WindowAttr {
        let last = self.windows.len() - 1;
        &mut self.windows[last]
    }

    pub fn tab_count(&self) -> usize {
        self.windows.iter().map(|w| w.tabs.len()).sum()
    }
}

impl Default for AttributeList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a AttributeList {
    type Item = &'a WindowAttr;
    type IntoIter = std::slice::Iter<'a, WindowAttr>;

    fn into_iter(self) -> Self::IntoIter {
        self.windows.iter()
    }
}

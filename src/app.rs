use std::time::{Duration, Instant};

use crate::clock::Clock;
use crate::config::UserProfile;
use crate::content::{self, Panel, PanelBody};
use crate::menu::{self, ExpansionState, MenuEntry, ViewType};

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// The header search bar is capturing keystrokes. Searching is inert;
    /// the text is displayed and discarded.
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
}

/// One visible sidebar row after flattening the forest against the current
/// expansion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarRow {
    /// Top-level entry (leaf or group header) at `menu[index]`.
    Entry { index: usize },
    /// Child leaf of an expanded group.
    Child { entry: usize, child: usize },
    /// The inert logout row pinned after the tree.
    Logout,
}

const STATUS_TTL: Duration = Duration::from_secs(4);

pub struct App {
    current_view: ViewType,
    pub menu: Vec<MenuEntry>,
    pub expansion: ExpansionState,
    pub sidebar_cursor: usize,
    pub focus: Focus,
    pub input_mode: InputMode,
    pub search_input: String,
    pub clock: Clock,
    pub user: UserProfile,
    pub content_scroll: u16,
    pub help_open: bool,
    pub should_quit: bool,
    pub ascii_icons: bool,
    status: Option<(String, StatusLevel, Instant)>,
    chord: Option<char>,
}

impl App {
    pub fn new() -> Self {
        Self {
            current_view: ViewType::Dashboard,
            menu: menu::menu_structure(),
            expansion: ExpansionState::new(),
            sidebar_cursor: 0,
            focus: Focus::Sidebar,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            clock: Clock::new(),
            user: UserProfile::default(),
            content_scroll: 0,
            help_open: false,
            should_quit: false,
            ascii_icons: false,
            status: None,
            chord: None,
        }
    }

    // --- navigation state holder ---

    pub fn current_view(&self) -> ViewType {
        self.current_view
    }

    /// Replace the current view unconditionally. Idempotent when `target`
    /// equals the current view.
    pub fn navigate(&mut self, target: ViewType) {
        self.current_view = target;
        self.content_scroll = 0;
    }

    pub fn toggle_group(&mut self, id: &str) {
        self.expansion.toggle(id);
        self.clamp_cursor();
    }

    /// Panel the content area shows right now.
    pub fn current_panel(&self) -> Panel {
        content::panel_for(self.current_view)
    }

    /// Derived, never stored: a leaf is active iff it targets the current view.
    pub fn is_active(&self, target: ViewType) -> bool {
        target == self.current_view
    }

    // --- sidebar rows ---

    pub fn visible_rows(&self) -> Vec<SidebarRow> {
        let mut rows = Vec::new();
        for (index, entry) in self.menu.iter().enumerate() {
            rows.push(SidebarRow::Entry { index });
            if let MenuEntry::Group { id, children, .. } = entry {
                if self.expansion.is_expanded(id) {
                    for child in 0..children.len() {
                        rows.push(SidebarRow::Child { entry: index, child });
                    }
                }
            }
        }
        rows.push(SidebarRow::Logout);
        rows
    }

    /// Act on the row under the cursor: leaves navigate, group headers
    /// toggle, logout only posts a notice.
    pub fn activate_cursor(&mut self) {
        let rows = self.visible_rows();
        let Some(row) = rows.get(self.sidebar_cursor).copied() else {
            return;
        };
        self.activate_row(row);
    }

    pub fn activate_row(&mut self, row: SidebarRow) {
        match row {
            SidebarRow::Entry { index } => match &self.menu[index] {
                MenuEntry::Leaf { target, .. } => {
                    let target = *target;
                    self.navigate(target);
                }
                MenuEntry::Group { id, .. } => {
                    let id = *id;
                    self.toggle_group(id);
                }
            },
            SidebarRow::Child { entry, child } => {
                if let MenuEntry::Group { children, .. } = &self.menu[entry] {
                    if let Some(leaf) = children.get(child) {
                        let target = leaf.target;
                        self.navigate(target);
                    }
                }
            }
            SidebarRow::Logout => {
                self.set_status("Logout is not available in this shell", StatusLevel::Warn);
            }
        }
    }

    /// Offset the sidebar list renders with. A fresh `ListState` starts at
    /// zero and scrolls forward just enough to keep the selection on screen,
    /// so the offset is recomputable from the cursor and the window height.
    pub fn sidebar_scroll_offset(&self, inner_height: usize) -> usize {
        if inner_height == 0 {
            return 0;
        }
        (self.sidebar_cursor + 1).saturating_sub(inner_height)
    }

    /// Map a clicked line inside the sidebar window (0 = first line below
    /// the border) to the row rendered there, folding in the scroll offset.
    pub fn sidebar_row_at(&self, line: usize, inner_height: usize) -> Option<SidebarRow> {
        if line >= inner_height {
            return None;
        }
        self.visible_rows()
            .get(self.sidebar_scroll_offset(inner_height) + line)
            .copied()
    }

    pub fn cursor_up(&mut self) {
        self.sidebar_cursor = self.sidebar_cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let max = self.visible_rows().len().saturating_sub(1);
        self.sidebar_cursor = (self.sidebar_cursor + 1).min(max);
    }

    pub fn cursor_top(&mut self) {
        self.sidebar_cursor = 0;
    }

    pub fn cursor_bottom(&mut self) {
        self.sidebar_cursor = self.visible_rows().len().saturating_sub(1);
    }

    /// Jump the cursor to the n-th top-level entry (1-based, from the digit
    /// keys).
    pub fn jump_to_entry(&mut self, n: usize) {
        if n == 0 || n > self.menu.len() {
            return;
        }
        let rows = self.visible_rows();
        if let Some(pos) = rows
            .iter()
            .position(|row| matches!(row, SidebarRow::Entry { index } if *index == n - 1))
        {
            self.sidebar_cursor = pos;
        }
    }

    fn clamp_cursor(&mut self) {
        let max = self.visible_rows().len().saturating_sub(1);
        if self.sidebar_cursor > max {
            self.sidebar_cursor = max;
        }
    }

    // --- content scrolling ---

    /// Only form panels render with a scroll offset; the other bodies fit
    /// their frame, so the offset stays pinned at zero for them.
    pub fn content_scrollable(&self) -> bool {
        matches!(self.current_panel().body, PanelBody::Form(_))
    }

    pub fn scroll_up(&mut self, lines: u16) {
        if self.content_scrollable() {
            self.content_scroll = self.content_scroll.saturating_sub(lines);
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        if self.content_scrollable() {
            self.content_scroll = self.content_scroll.saturating_add(lines);
        }
    }

    // --- status line ---

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some((text.into(), level, Instant::now()));
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .filter(|(_, _, at)| at.elapsed() < STATUS_TTL)
            .map(|(text, level, _)| (text.as_str(), *level))
    }

    // --- tick ---

    pub fn on_tick(&mut self) {
        self.clock.sample();
        if let Some((_, _, at)) = &self.status {
            if at.elapsed() >= STATUS_TTL {
                self.status = None;
            }
        }
    }

    // --- search bar ---

    pub fn enter_search(&mut self) {
        self.input_mode = InputMode::Search;
        self.search_input.clear();
    }

    pub fn leave_search(&mut self) {
        self.input_mode = InputMode::Normal;
        self.search_input.clear();
    }

    // --- gg chord ---

    pub fn set_chord(&mut self, c: char) {
        self.chord = Some(c);
    }

    pub fn consume_chord(&mut self, c: char) -> bool {
        if self.chord == Some(c) {
            self.chord = None;
            true
        } else {
            false
        }
    }

    pub fn clear_chord(&mut self) {
        self.chord = None;
    }

    pub fn focus_label(&self) -> &'static str {
        match self.focus {
            Focus::Sidebar => "Sidebar",
            Focus::Content => "Content",
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_dashboard_with_sidebar_focus() {
        let app = App::new();
        assert_eq!(app.current_view(), ViewType::Dashboard);
        assert_eq!(app.focus, Focus::Sidebar);
        assert!(app.expansion.is_expanded("user-mgmt"));
        assert!(app.expansion.is_expanded("attend-mgmt"));
    }

    #[test]
    fn navigate_replaces_view_for_every_target() {
        let mut app = App::new();
        for view in ViewType::ALL {
            app.navigate(view);
            assert_eq!(app.current_view(), view);
        }
    }

    #[test]
    fn navigate_is_idempotent() {
        let mut app = App::new();
        app.navigate(ViewType::AllUsers);
        app.navigate(ViewType::AllUsers);
        assert_eq!(app.current_view(), ViewType::AllUsers);
    }

    #[test]
    fn visible_rows_follow_expansion() {
        let mut app = App::new();
        // 9 top-level rows + user-mgmt (2) + attend-mgmt (4) + logout.
        assert_eq!(app.visible_rows().len(), 9 + 2 + 4 + 1);

        app.toggle_group("user-mgmt");
        assert_eq!(app.visible_rows().len(), 9 + 4 + 1);

        app.toggle_group("menu-mgmt");
        assert_eq!(app.visible_rows().len(), 9 + 4 + 2 + 1);
    }

    #[test]
    fn activating_a_group_row_toggles_without_navigating() {
        let mut app = App::new();
        let before = app.current_view();
        // Row 0 is the Dashboard leaf; row 1 is the user-mgmt group header.
        app.sidebar_cursor = 1;
        app.activate_cursor();
        assert!(!app.expansion.is_expanded("user-mgmt"));
        assert_eq!(app.current_view(), before);
    }

    #[test]
    fn activating_a_child_row_navigates() {
        let mut app = App::new();
        // Rows: 0 dashboard, 1 user-mgmt, 2 add-user, 3 all-users, ...
        app.sidebar_cursor = 2;
        app.activate_cursor();
        assert_eq!(app.current_view(), ViewType::AddUser);
    }

    #[test]
    fn exactly_one_leaf_is_active_after_navigation() {
        let mut app = App::new();
        app.navigate(ViewType::AddDept);

        let mut active = 0;
        for entry in &app.menu {
            match entry {
                MenuEntry::Leaf { target, .. } => {
                    if app.is_active(*target) {
                        active += 1;
                    }
                }
                MenuEntry::Group { children, .. } => {
                    active += children
                        .iter()
                        .filter(|leaf| app.is_active(leaf.target))
                        .count();
                }
            }
        }
        assert_eq!(active, 1);
    }

    #[test]
    fn collapsing_clamps_the_cursor() {
        let mut app = App::new();
        app.cursor_bottom();
        let bottom = app.sidebar_cursor;
        app.toggle_group("attend-mgmt");
        assert!(app.sidebar_cursor < bottom);
        assert!(app.sidebar_cursor < app.visible_rows().len());
    }

    #[test]
    fn digit_jump_lands_on_top_level_entries() {
        let mut app = App::new();
        app.jump_to_entry(2);
        let rows = app.visible_rows();
        assert_eq!(rows[app.sidebar_cursor], SidebarRow::Entry { index: 1 });

        // Out-of-range digits are ignored.
        let before = app.sidebar_cursor;
        app.jump_to_entry(42);
        assert_eq!(app.sidebar_cursor, before);
    }

    #[test]
    fn click_mapping_is_direct_when_the_list_fits() {
        let app = App::new();
        let height = 30;
        assert_eq!(app.sidebar_scroll_offset(height), 0);
        assert_eq!(app.sidebar_row_at(0, height), Some(SidebarRow::Entry { index: 0 }));
        assert_eq!(app.sidebar_row_at(15, height), Some(SidebarRow::Logout));
        // Lines past the list map to nothing.
        assert_eq!(app.sidebar_row_at(16, height), None);
    }

    #[test]
    fn click_mapping_folds_in_the_scroll_offset() {
        let mut app = App::new();
        app.cursor_bottom();
        // 16 visible rows in a window 8 lines tall: the list scrolls so the
        // cursor sits on the last line, showing rows 8..=15.
        let height = 8;
        assert_eq!(app.sidebar_scroll_offset(height), 8);
        assert_eq!(
            app.sidebar_row_at(0, height),
            Some(SidebarRow::Child { entry: 5, child: 0 })
        );
        assert_eq!(app.sidebar_row_at(7, height), Some(SidebarRow::Logout));
        // Lines outside the window map to nothing.
        assert_eq!(app.sidebar_row_at(8, height), None);
        assert_eq!(app.sidebar_row_at(0, 0), None);
    }

    #[test]
    fn only_form_panels_scroll() {
        let mut app = App::new();
        app.focus = Focus::Content;

        app.navigate(ViewType::AllUsers);
        app.scroll_down(3);
        assert_eq!(app.content_scroll, 0);

        app.navigate(ViewType::AddUser);
        app.scroll_down(3);
        assert_eq!(app.content_scroll, 3);
        app.scroll_up(1);
        assert_eq!(app.content_scroll, 2);
    }

    #[test]
    fn logout_row_only_posts_a_notice() {
        let mut app = App::new();
        let before = app.current_view();
        app.cursor_bottom();
        app.activate_cursor();
        assert_eq!(app.current_view(), before);
        assert!(matches!(app.status_text(), Some((_, StatusLevel::Warn))));
    }

    #[test]
    fn status_is_replaced_wholesale() {
        let mut app = App::new();
        app.set_status("first", StatusLevel::Info);
        app.set_status("second", StatusLevel::Warn);
        let (text, level) = app.status_text().unwrap();
        assert_eq!(text, "second");
        assert_eq!(level, StatusLevel::Warn);
    }
}

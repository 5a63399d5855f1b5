use crate::core::contact::ContactField;
use crate::core::document::{DocId, Section};
use ratatui::layout::{Position, Rect};
use ratatui::prelude::Size;

/// Which part of the workbench receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiFocus {
    /// File tree in the sidebar.
    Explorer,
    /// Content pane of the active document.
    Editor,
    /// A contact form field.
    Form(ContactField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowControl {
    Close,
    Minimize,
    Maximize,
}

impl WindowControl {
    pub const ALL: [WindowControl; 3] = [
        WindowControl::Close,
        WindowControl::Minimize,
        WindowControl::Maximize,
    ];

    pub fn message(self) -> &'static str {
        match self {
            WindowControl::Close => "🔴 Close button clicked (demo only)",
            WindowControl::Minimize => "🟡 Minimize button clicked (demo only)",
            WindowControl::Maximize => "🟢 Maximize button clicked (demo only)",
        }
    }
}

/// Clickable element recorded while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    WindowControl(WindowControl),
    Activity(Section),
    TreeItem(DocId),
    Tab(DocId),
    TabClose(DocId),
    ThemeToggle,
    TerminalToggle,
    TerminalBody,
    EditorBody,
    ProjectLink(usize),
    FormField(ContactField),
    SubmitButton,
    DownloadButton,
}

/// Regions drawn in the last frame, most specific last.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Innermost target under `(column, row)`.
    pub fn target_at(&self, column: u16, row: u16) -> Option<&HitTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| target)
    }

    pub fn area_of(&self, target: &HitTarget) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, candidate)| candidate == target)
            .map(|(area, _)| *area)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Presentation state that is not part of the tab/file model.
#[derive(Debug, Clone)]
pub struct UiState {
    pub focus: UiFocus,
    pub active_section: Section,
    pub terminal_minimized: bool,
    /// Layout collapsed because the terminal is narrow.
    pub compact: bool,
    pub explorer_cursor: usize,
    pub editor_scroll: u16,
    pub selected_link: usize,
    /// Characters of the welcome line typed so far.
    pub typed_chars: usize,
    /// Skills currently visible in the about pane.
    pub skills_revealed: usize,
    pub pressed_control: Option<WindowControl>,
    pub hit_map: HitMap,
    pub last_term_size: Size,
    pub exit_requested: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            focus: UiFocus::Explorer,
            active_section: Section::Explorer,
            terminal_minimized: false,
            compact: false,
            explorer_cursor: 0,
            editor_scroll: 0,
            selected_link: 0,
            typed_chars: 0,
            skills_revealed: 0,
            pressed_control: None,
            hit_map: HitMap::default(),
            last_term_size: Size::default(),
            exit_requested: false,
        }
    }

    pub fn focused_field(&self) -> Option<ContactField> {
        match self.focus {
            UiFocus::Form(field) => Some(field),
            _ => None,
        }
    }

    /// Button label on the terminal panel header.
    pub fn terminal_toggle_label(&self) -> &'static str {
        if self.terminal_minimized {
            "+"
        } else {
            "−"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn innermost_region_wins() {
        let mut map = HitMap::default();
        map.push(Rect::new(0, 0, 20, 5), HitTarget::EditorBody);
        map.push(Rect::new(2, 1, 4, 1), HitTarget::ProjectLink(0));

        assert_eq!(map.target_at(3, 1), Some(&HitTarget::ProjectLink(0)));
        assert_eq!(map.target_at(10, 3), Some(&HitTarget::EditorBody));
        assert_eq!(map.target_at(30, 3), None);
    }

    #[test]
    fn empty_regions_are_not_recorded() {
        let mut map = HitMap::default();
        map.push(Rect::new(0, 0, 0, 3), HitTarget::ThemeToggle);
        assert!(map.is_empty());
    }

    #[test]
    fn terminal_button_reflects_state() {
        let mut ui = UiState::new();
        assert_eq!(ui.terminal_toggle_label(), "−");
        ui.terminal_minimized = true;
        assert_eq!(ui.terminal_toggle_label(), "+");
    }
}

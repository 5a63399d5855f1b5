//! Region split for the workbench frame.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::core::app::UiState;

pub const ACTIVITY_BAR_WIDTH: u16 = 4;
pub const EXPLORER_WIDTH: u16 = 24;
const TERMINAL_MIN_ROWS: u16 = 4;
const TERMINAL_MAX_ROWS: u16 = 12;

/// Rects for every region of one frame. The explorer is absent in compact
/// layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkbenchLayout {
    pub title_bar: Rect,
    pub activity_bar: Rect,
    pub explorer: Option<Rect>,
    pub tab_strip: Rect,
    pub editor: Rect,
    /// Header row plus body; only the header when minimized.
    pub terminal: Rect,
    pub status_bar: Rect,
}

impl WorkbenchLayout {
    pub fn compute(area: Rect, ui: &UiState) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);
        let (title_bar, body, status_bar) = (rows[0], rows[1], rows[2]);

        let explorer_width = if ui.compact { 0 } else { EXPLORER_WIDTH };
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(ACTIVITY_BAR_WIDTH),
                Constraint::Length(explorer_width),
                Constraint::Min(0),
            ])
            .split(body);
        let explorer = (!ui.compact).then_some(columns[1]);

        let terminal_rows = if ui.terminal_minimized {
            1
        } else {
            (columns[2].height / 3).clamp(TERMINAL_MIN_ROWS, TERMINAL_MAX_ROWS)
        };
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(terminal_rows),
            ])
            .split(columns[2]);

        Self {
            title_bar,
            activity_bar: columns[0],
            explorer,
            tab_strip: main[0],
            editor: main[1],
            terminal: main[2],
            status_bar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_layout_shows_every_region() {
        let ui = UiState::new();
        let layout = WorkbenchLayout::compute(Rect::new(0, 0, 120, 40), &ui);

        assert_eq!(layout.title_bar, Rect::new(0, 0, 120, 1));
        assert_eq!(layout.status_bar, Rect::new(0, 39, 120, 1));
        assert_eq!(layout.activity_bar.width, ACTIVITY_BAR_WIDTH);
        assert_eq!(layout.explorer.map(|r| r.width), Some(EXPLORER_WIDTH));
        assert_eq!(layout.tab_strip.x, ACTIVITY_BAR_WIDTH + EXPLORER_WIDTH);
        assert_eq!(layout.terminal.height, 12);
        assert_eq!(
            layout.tab_strip.height + layout.editor.height + layout.terminal.height,
            38
        );
    }

    #[test]
    fn compact_layout_hides_explorer_and_collapses_terminal() {
        let ui = UiState {
            compact: true,
            terminal_minimized: true,
            ..UiState::new()
        };
        let layout = WorkbenchLayout::compute(Rect::new(0, 0, 60, 20), &ui);

        assert_eq!(layout.explorer, None);
        assert_eq!(layout.tab_strip.x, ACTIVITY_BAR_WIDTH);
        assert_eq!(layout.terminal.height, 1);
        assert_eq!(layout.editor.height, 20 - 2 - 1 - 1);
    }
}

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::app::{App, HitTarget, UiFocus, WindowControl};
use crate::core::document::{file_icon, DocId, Section};
use crate::ui::editor::render_editor;
use crate::ui::layout::WorkbenchLayout;
use crate::ui::terminal_panel::render_terminal_panel;
use crate::ui::theme::Theme;

/// Draw one frame and rebuild the click map from what was drawn.
pub fn ui(f: &mut Frame, app: &mut App, theme: &Theme) {
    app.ui.hit_map.clear();
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background_color)),
        area,
    );

    let layout = WorkbenchLayout::compute(area, &app.ui);
    render_title_bar(f, app, theme, layout.title_bar);
    render_activity_bar(f, app, theme, layout.activity_bar);
    if let Some(explorer) = layout.explorer {
        render_explorer(f, app, theme, explorer);
    }
    render_tab_strip(f, app, theme, layout.tab_strip);
    render_editor(f, app, theme, layout.editor);
    render_terminal_panel(f, app, theme, layout.terminal);
    render_status_bar(f, app, theme, layout.status_bar);
}

fn control_color(control: WindowControl) -> Color {
    match control {
        WindowControl::Close => Color::Rgb(0xff, 0x5f, 0x56),
        WindowControl::Minimize => Color::Rgb(0xff, 0xbd, 0x2e),
        WindowControl::Maximize => Color::Rgb(0x27, 0xc9, 0x3f),
    }
}

const TITLE_INSET: u16 = 8;

/// Cut `text` to at most `max` terminal cells, marking the cut with `…`.
fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    if max > 0 {
        out.push('…');
    }
    out
}

fn render_title_bar(f: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    f.render_widget(Block::default().style(theme.title_bar_style), area);

    for (idx, control) in WindowControl::ALL.into_iter().enumerate() {
        let rect = Rect::new(area.x + 1 + 2 * idx as u16, area.y, 1, 1).intersection(area);
        let mut style = theme.title_bar_style.fg(control_color(control));
        if app.ui.pressed_control == Some(control) {
            style = style.add_modifier(Modifier::DIM);
        }
        f.render_widget(Paragraph::new(Span::styled("●", style)), rect);
        app.ui.hit_map.push(rect, HitTarget::WindowControl(control));
    }

    let title = format!("{} - Portfolio - Visual Studio Code", app.workbench.active());
    // Keep clear of the window dots on both sides so the centre stays centred.
    let room = area.width.saturating_sub(2 * TITLE_INSET) as usize;
    let title = truncate_to_width(&title, room);
    f.render_widget(
        Paragraph::new(Span::styled(title, theme.title_bar_style)).centered(),
        area,
    );
}

fn render_activity_bar(f: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    f.render_widget(Block::default().style(theme.activity_bar_style), area);

    for (idx, section) in Section::ALL.into_iter().enumerate() {
        let y = area.y + 1 + 2 * idx as u16;
        if y >= area.bottom() {
            break;
        }
        let rect = Rect::new(area.x, y, area.width, 1);
        let active = app.ui.active_section == section;
        let (marker, style) = if active {
            ("▎", theme.activity_active_style)
        } else {
            (" ", theme.activity_bar_style)
        };
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format!(" {}", section.glyph()), style),
            ])),
            rect,
        );
        app.ui.hit_map.push(rect, HitTarget::Activity(section));
    }
}

fn render_explorer(f: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    let border = if app.ui.focus == UiFocus::Explorer {
        theme.border_focused_style
    } else {
        theme.border_style
    };
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(border)
        .style(theme.sidebar_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(" EXPLORER", theme.sidebar_title_style)),
        Line::from(Span::styled(" ▾ PORTFOLIO", theme.sidebar_title_style)),
    ];
    let header_rows = lines.len() as u16;

    let selected = app.workbench.views().tree.clone();
    let cursor_visible = app.ui.focus == UiFocus::Explorer;
    for (idx, id) in app.workbench.known_documents().iter().enumerate() {
        let row_style = if cursor_visible && app.ui.explorer_cursor == idx {
            theme.tree_cursor_style
        } else if selected.as_ref() == Some(id) {
            theme.tree_selected_style
        } else {
            theme.sidebar_style
        };
        let icon = file_icon(id);
        lines.push(
            Line::from(vec![
                Span::styled("   ", row_style),
                Span::styled(icon.glyph, row_style.fg(icon.color)),
                Span::styled(format!(" {id}"), row_style),
            ])
            .style(row_style),
        );

        let y = inner.y + header_rows + idx as u16;
        if y < inner.bottom() {
            app.ui
                .hit_map
                .push(Rect::new(inner.x, y, inner.width, 1), HitTarget::TreeItem(id.clone()));
        }
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn render_tab_strip(f: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    f.render_widget(Block::default().style(theme.tab_bar_style), area);

    let active_tab = app.workbench.views().tab.clone();
    let tabs: Vec<(DocId, Line<'static>)> = app
        .workbench
        .open_documents()
        .iter()
        .map(|id| {
            let style = if active_tab.as_ref() == Some(id) {
                theme.tab_active_style
            } else {
                theme.tab_style
            };
            let icon = file_icon(id);
            let label = Line::from(vec![
                Span::styled(" ", style),
                Span::styled(icon.glyph, style.fg(icon.color)),
                Span::styled(format!(" {id} "), style),
                Span::styled("×", style),
                Span::styled(" ", style),
            ]);
            (id.clone(), label)
        })
        .collect();

    let widths: Vec<u16> = tabs.iter().map(|(_, label)| label.width() as u16).collect();
    let active_index = active_tab
        .as_ref()
        .and_then(|active| tabs.iter().position(|(id, _)| id == active))
        .unwrap_or(0);
    let first = first_visible_tab(&widths, active_index, area.width);

    let mut x = area.x;
    for ((id, label), width) in tabs.into_iter().zip(widths).skip(first) {
        if x + width > area.right() {
            break;
        }

        let tab_rect = Rect::new(x, area.y, width, 1);
        f.render_widget(Paragraph::new(label), tab_rect);
        app.ui.hit_map.push(tab_rect, HitTarget::Tab(id.clone()));
        let close_rect = Rect::new(x + width - 2, area.y, 1, 1);
        app.ui.hit_map.push(close_rect, HitTarget::TabClose(id));

        x += width + 1;
    }
}

/// Index of the leftmost tab to draw so the active tab still fits. Tabs are
/// separated by one cell.
fn first_visible_tab(widths: &[u16], active: usize, available: u16) -> usize {
    let mut first = 0;
    while first < active {
        let span: u16 = widths[first..=active]
            .iter()
            .fold(0u16, |total, w| total.saturating_add(*w).saturating_add(1))
            .saturating_sub(1);
        if span <= available {
            break;
        }
        first += 1;
    }
    first
}

fn render_status_bar(f: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    f.render_widget(Block::default().style(theme.status_bar_style), area);

    let status = app.workbench.status();
    let left = format!(
        " ⎇ main   {}   {}   {}",
        status.line_col, status.encoding, status.language
    );
    f.render_widget(
        Paragraph::new(Span::styled(left, theme.status_bar_style)),
        area,
    );

    let mode = app.theme.mode();
    let toggle = Line::from(Span::styled(
        format!(" {} {} ", mode.icon(), mode.label()),
        theme.status_bar_style.add_modifier(Modifier::BOLD),
    ));
    let width = (toggle.width() as u16).min(area.width);
    let rect = Rect::new(area.right().saturating_sub(width), area.y, width, 1);
    f.render_widget(Paragraph::new(toggle), rect);
    app.ui.hit_map.push(rect, HitTarget::ThemeToggle);
}

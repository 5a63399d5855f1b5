use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::core::app::{App, HitTarget};
use crate::core::constants::TERMINAL_CURSOR;
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthStr;

pub fn render_terminal_panel(f: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    if area.height == 0 {
        return;
    }
    f.render_widget(Block::default().style(theme.terminal_style), area);

    let header = Rect { height: 1, ..area };
    let label = format!("[{}]", app.ui.terminal_toggle_label());
    let button_width = (label.width() as u16).min(header.width);
    let button = Rect::new(
        header.right().saturating_sub(button_width + 1),
        header.y,
        button_width,
        1,
    )
    .intersection(header);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " TERMINAL",
            theme.terminal_title_style,
        ))),
        header,
    );
    f.render_widget(
        Paragraph::new(Span::styled(label, theme.terminal_title_style)),
        button,
    );
    app.ui.hit_map.push(button, HitTarget::TerminalToggle);

    if app.ui.terminal_minimized {
        return;
    }

    let body = Rect {
        y: area.y + 1,
        height: area.height - 1,
        ..area
    };
    app.ui.hit_map.push(body, HitTarget::TerminalBody);

    let height = usize::from(body.height);
    let start = app.terminal.viewport_start(height);
    let lines: Vec<Line> = app
        .terminal
        .lines()
        .iter()
        .skip(start)
        .take(height)
        .map(|line| {
            if line.has_cursor() {
                Line::from(vec![
                    Span::styled(format!(" {} ", line.text), theme.terminal_prompt_style),
                    Span::styled(
                        TERMINAL_CURSOR,
                        theme.terminal_style.add_modifier(Modifier::SLOW_BLINK),
                    ),
                ])
            } else {
                Line::from(Span::styled(format!(" {}", line.text), theme.terminal_style))
            }
        })
        .collect();
    f.render_widget(Paragraph::new(lines).style(theme.terminal_style), body);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::terminal_log::LogSink;
    use crate::core::theme_mode::ThemeMode;
    use crate::utils::test_utils::create_test_app;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rows(app: &mut App, width: u16, height: u16) -> Vec<String> {
        let theme = Theme::for_mode(ThemeMode::Dark);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| render_terminal_panel(f, app, &theme, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn newest_lines_and_prompt_fill_the_body() {
        let mut app = create_test_app();
        for i in 0..10 {
            app.terminal.log(&format!("line {i}"));
        }
        let screen = rows(&mut app, 40, 5);

        assert!(screen[0].contains("TERMINAL"));
        assert!(screen[0].contains("[−]"));
        assert!(screen[1].contains("line 7"));
        assert!(screen[3].contains("line 9"));
        assert!(screen[4].contains("portfolio@vscode:~$ _"));
    }

    #[test]
    fn scrolled_view_shows_older_lines() {
        let mut app = create_test_app();
        for i in 0..10 {
            app.terminal.log(&format!("line {i}"));
        }
        app.terminal.scroll_up(3);
        let screen = rows(&mut app, 40, 5);
        assert!(screen[1].contains("line 4"));
    }

    #[test]
    fn minimized_panel_only_draws_the_header() {
        let mut app = create_test_app();
        app.ui.terminal_minimized = true;
        let screen = rows(&mut app, 40, 1);

        assert!(screen[0].contains("[+]"));
        assert!(app.ui.hit_map.area_of(&HitTarget::TerminalBody).is_none());
        assert!(app.ui.hit_map.area_of(&HitTarget::TerminalToggle).is_some());
    }
}

//! Content pane: one view per document kind.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::app::{App, HitTarget, UiFocus};
use crate::core::builtin_documents::{DocumentKind, DocumentSpec, LinkKind};
use crate::core::contact::ContactField;
use crate::core::document::DocId;
use crate::ui::highlight::highlight_line;
use crate::ui::theme::Theme;

const GUTTER_WIDTH: usize = 4;
const SUBMIT_LABEL: &str = " Send Message ";
const DOWNLOAD_LABEL: &str = " ⬇ Download Resume ";

/// A rendered row and what clicking it does.
struct EditorLine {
    line: Line<'static>,
    target: Option<HitTarget>,
}

impl EditorLine {
    fn plain(line: Line<'static>) -> Self {
        Self { line, target: None }
    }

    fn clickable(line: Line<'static>, target: HitTarget) -> Self {
        Self {
            line,
            target: Some(target),
        }
    }
}

fn field_height(field: ContactField) -> u16 {
    match field {
        ContactField::Message => 5,
        ContactField::Name | ContactField::Email => 3,
    }
}

fn form_height() -> u16 {
    ContactField::ALL.into_iter().map(field_height).sum::<u16>() + 1
}

pub fn render_editor(f: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    f.render_widget(Block::default().style(theme.editor_text_style), area);
    app.ui.hit_map.push(area, HitTarget::EditorBody);

    let Some(doc) = app.active_document().cloned() else {
        let hint = Paragraph::new(Line::from(Span::styled(
            "No file open",
            theme.line_number_style,
        )))
        .centered();
        let middle = Rect {
            y: area.y + area.height / 2,
            height: area.height.min(1),
            ..area
        };
        f.render_widget(hint, middle);
        return;
    };

    let (text_area, form_area) = if doc.kind == DocumentKind::Contact {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(form_height())])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    let lines = content_lines(app, &doc, theme);
    render_scrolled(f, app, theme, text_area, lines);

    if let Some(form_area) = form_area {
        render_contact_form(f, app, theme, form_area);
    }
}

fn content_lines(app: &App, doc: &DocumentSpec, theme: &Theme) -> Vec<EditorLine> {
    let extension = DocId::new(doc.id.clone()).extension().to_string();
    let mut lines: Vec<EditorLine> = doc
        .body
        .lines()
        .map(|text| EditorLine::plain(highlight_line(&extension, text, theme)))
        .collect();

    match doc.kind {
        DocumentKind::About => about_lines(app, theme, &mut lines),
        DocumentKind::Projects => project_lines(app, doc, theme, &mut lines),
        DocumentKind::Resume => {
            lines.push(EditorLine::plain(Line::default()));
            lines.push(EditorLine::clickable(
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(DOWNLOAD_LABEL, theme.button_style),
                ]),
                HitTarget::DownloadButton,
            ));
        }
        DocumentKind::Contact => {}
    }
    lines
}

fn about_lines(app: &App, theme: &Theme, lines: &mut Vec<EditorLine>) {
    lines.push(EditorLine::plain(Line::default()));
    let mut typed = vec![Span::styled(app.typed_text(), theme.string_style)];
    if !app.typing_finished() {
        typed.push(Span::styled(
            "▌",
            theme.keyword_style.add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    lines.push(EditorLine::plain(Line::from(typed)));

    if app.visible_skills().is_empty() {
        return;
    }
    lines.push(EditorLine::plain(Line::default()));
    lines.push(EditorLine::plain(Line::from(Span::styled(
        "// Skills",
        theme.comment_style,
    ))));
    for skill in app.visible_skills() {
        lines.push(EditorLine::plain(Line::from(vec![
            Span::styled("  • ", theme.line_number_style),
            Span::styled(skill.clone(), theme.keyword_style),
        ])));
    }
}

fn project_lines(app: &App, doc: &DocumentSpec, theme: &Theme, lines: &mut Vec<EditorLine>) {
    let links = app.documents.project_links();
    let highlight = app.ui.focus == UiFocus::Editor;

    for (project_idx, project) in doc.projects.iter().enumerate() {
        lines.push(EditorLine::plain(Line::default()));
        lines.push(EditorLine::plain(Line::from(Span::styled(
            project.name.clone(),
            theme.heading_style,
        ))));
        lines.push(EditorLine::plain(Line::from(Span::styled(
            format!("  {}", project.description),
            theme.editor_text_style,
        ))));
        if !project.tech.is_empty() {
            lines.push(EditorLine::plain(Line::from(Span::styled(
                format!("  /* {} */", project.tech.join(" · ")),
                theme.comment_style,
            ))));
        }

        for (link_idx, link) in links
            .iter()
            .enumerate()
            .filter(|(_, link)| link.project == project_idx)
        {
            let selected = highlight && app.ui.selected_link == link_idx;
            let label_style = if selected {
                theme.link_selected_style
            } else {
                theme.button_style
            };
            let label = match link.kind {
                LinkKind::GitHub => " GitHub ",
                LinkKind::Demo => " Live Demo ",
            };
            lines.push(EditorLine::clickable(
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(label, label_style),
                    Span::raw(" "),
                    Span::styled(link.url.clone(), theme.link_style),
                ]),
                HitTarget::ProjectLink(link_idx),
            ));
        }
    }
}

/// Draw `lines` with a line-number gutter, honoring and clamping the scroll
/// offset, and record clickable rows.
fn render_scrolled(
    f: &mut Frame,
    app: &mut App,
    theme: &Theme,
    area: Rect,
    lines: Vec<EditorLine>,
) {
    let visible_rows = usize::from(area.height);
    let max_scroll = lines.len().saturating_sub(visible_rows);
    let scroll = usize::from(app.ui.editor_scroll).min(max_scroll);
    app.ui.editor_scroll = scroll as u16;

    let mut rendered = Vec::with_capacity(visible_rows);
    for (row, entry) in lines.into_iter().enumerate().skip(scroll).take(visible_rows) {
        let mut spans = vec![Span::styled(
            format!("{:>width$} ", row + 1, width = GUTTER_WIDTH - 1),
            theme.line_number_style,
        )];
        spans.extend(entry.line.spans);
        rendered.push(Line::from(spans));

        if let Some(target) = entry.target {
            let y = area.y + (row - scroll) as u16;
            app.ui
                .hit_map
                .push(Rect::new(area.x, y, area.width, 1), target);
        }
    }

    f.render_widget(
        Paragraph::new(rendered).style(theme.editor_text_style),
        area,
    );
}

fn render_contact_form(f: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    let mut constraints: Vec<Constraint> = ContactField::ALL
        .into_iter()
        .map(|field| Constraint::Length(field_height(field)))
        .collect();
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let focused = app.ui.focused_field();
    for (field, rect) in ContactField::ALL.into_iter().zip(rows.iter().copied()) {
        let is_focused = focused == Some(field);
        let (border, text) = if is_focused {
            (theme.border_focused_style, theme.input_focused_style)
        } else {
            (theme.border_style, theme.input_style)
        };
        let textarea = app.contact.field_mut(field);
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(field.label()),
        );
        textarea.set_style(text);
        textarea.set_placeholder_style(theme.line_number_style);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(if is_focused {
            text.add_modifier(Modifier::REVERSED)
        } else {
            text
        });
        f.render_widget(&*textarea, rect);
        app.ui.hit_map.push(rect, HitTarget::FormField(field));
    }

    let Some(button_row) = rows.last().copied() else {
        return;
    };
    let button = Line::from(Span::styled(SUBMIT_LABEL, theme.button_style));
    let width = (button.width() as u16).min(button_row.width);
    let button_rect = Rect::new(button_row.x + 1, button_row.y, width, 1)
        .intersection(button_row);
    f.render_widget(Paragraph::new(button), button_rect);
    app.ui.hit_map.push(button_rect, HitTarget::SubmitButton);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::Section;
    use crate::core::theme_mode::ThemeMode;
    use crate::utils::test_utils::create_bootstrapped_app;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Duration;

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let theme = Theme::for_mode(ThemeMode::Dark);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                app.ui.hit_map.clear();
                render_editor(f, app, &theme, f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn about_pane_shows_typed_text_and_revealed_skills() {
        let mut app = create_bootstrapped_app();
        app.advance_clock(Duration::from_millis(2150));
        let screen = draw(&mut app, 80, 30);

        assert!(screen.contains("console.log"));
        assert!(screen.contains("// Skills"));
        assert!(screen.contains("Rust"));
        assert!(!screen.contains("TypeScript"));
    }

    #[test]
    fn project_links_are_clickable_rows() {
        let mut app = create_bootstrapped_app();
        app.navigate_to_section(Section::Projects);
        let screen = draw(&mut app, 100, 40);

        assert!(screen.contains("Task Tracker"));
        assert!(screen.contains(" GitHub "));
        let area = app
            .ui
            .hit_map
            .area_of(&HitTarget::ProjectLink(1))
            .expect("second link recorded");
        assert_eq!(
            app.ui.hit_map.target_at(area.x + 5, area.y),
            Some(&HitTarget::ProjectLink(1))
        );
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut app = create_bootstrapped_app();
        app.navigate_to_section(Section::Resume);
        app.ui.editor_scroll = 500;
        draw(&mut app, 60, 8);
        assert!(app.ui.editor_scroll < 500);
        assert!(app.ui.hit_map.area_of(&HitTarget::DownloadButton).is_some());
    }

    #[test]
    fn contact_pane_renders_form_fields_and_submit() {
        let mut app = create_bootstrapped_app();
        app.navigate_to_section(Section::Contact);
        let screen = draw(&mut app, 80, 30);

        assert!(screen.contains("Name"));
        assert!(screen.contains("Email"));
        assert!(screen.contains("Send Message"));
        for field in ContactField::ALL {
            assert!(app.ui.hit_map.area_of(&HitTarget::FormField(field)).is_some());
        }
        assert!(app.ui.hit_map.area_of(&HitTarget::SubmitButton).is_some());
    }
}

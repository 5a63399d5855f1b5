//! Lightweight tinting for the virtual source files.
//!
//! This is not a parser. It colors comments, quoted strings, markdown headings
//! and a short keyword list, which is all the embedded documents need.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::ui::theme::Theme;

const KEYWORDS: &[&str] = &[
    "const", "let", "function", "return", "class", "new", "html", "head", "body", "title",
    "h1", "p", "meta", "display", "gap", "grid", "DOCTYPE",
];

pub fn highlight_line(extension: &str, text: &str, theme: &Theme) -> Line<'static> {
    let trimmed = text.trim_start();
    if extension == "md" {
        if trimmed.starts_with('#') {
            return Line::from(Span::styled(text.to_string(), theme.heading_style));
        }
        return Line::from(Span::styled(text.to_string(), theme.editor_text_style));
    }
    if trimmed.starts_with("//")
        || trimmed.starts_with("/*")
        || trimmed.starts_with('*')
        || trimmed.starts_with("<!--")
    {
        return Line::from(Span::styled(text.to_string(), theme.comment_style));
    }
    Line::from(tokenize(text, theme))
}

fn tokenize(text: &str, theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut chars = text.chars().peekable();

    let flush = |buffer: &mut String, spans: &mut Vec<Span<'static>>, style: Style| {
        if !buffer.is_empty() {
            spans.push(Span::styled(std::mem::take(buffer), style));
        }
    };

    while let Some(ch) = chars.next() {
        if ch == '"' || ch == '\'' {
            flush(&mut plain, &mut spans, theme.editor_text_style);
            let mut quoted = String::from(ch);
            for next in chars.by_ref() {
                quoted.push(next);
                if next == ch {
                    break;
                }
            }
            spans.push(Span::styled(quoted, theme.string_style));
        } else if ch.is_ascii_alphanumeric() {
            flush(&mut plain, &mut spans, theme.editor_text_style);
            let mut word = String::from(ch);
            while let Some(&next) = chars.peek() {
                if !next.is_ascii_alphanumeric() {
                    break;
                }
                word.push(next);
                chars.next();
            }
            let style = if KEYWORDS.contains(&word.as_str()) {
                theme.keyword_style
            } else {
                theme.editor_text_style
            };
            spans.push(Span::styled(word, style));
        } else {
            plain.push(ch);
        }
    }
    flush(&mut plain, &mut spans, theme.editor_text_style);
    spans
}

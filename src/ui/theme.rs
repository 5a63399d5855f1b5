use crate::core::theme_mode::ThemeMode;
use crate::ui::builtin_themes::{find_builtin_theme, ThemeSpec};
use ratatui::style::{Color, Modifier, Style};

/// Resolved styles for every region of the workbench.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background_color: Color,

    // Chrome
    pub title_bar_style: Style,
    pub activity_bar_style: Style,
    pub activity_active_style: Style,
    pub status_bar_style: Style,
    pub border_style: Style,
    pub border_focused_style: Style,

    // Explorer
    pub sidebar_style: Style,
    pub sidebar_title_style: Style,
    pub tree_selected_style: Style,
    pub tree_cursor_style: Style,

    // Tabs
    pub tab_bar_style: Style,
    pub tab_style: Style,
    pub tab_active_style: Style,

    // Content
    pub editor_text_style: Style,
    pub line_number_style: Style,
    pub keyword_style: Style,
    pub string_style: Style,
    pub comment_style: Style,
    pub heading_style: Style,
    pub link_style: Style,
    pub link_selected_style: Style,
    pub button_style: Style,
    pub input_style: Style,
    pub input_focused_style: Style,

    // Terminal panel
    pub terminal_style: Style,
    pub terminal_title_style: Style,
    pub terminal_prompt_style: Style,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        // Prefer the built-in spec for consistent RGB colors
        if let Some(spec) = find_builtin_theme(mode.as_str()) {
            return Self::from_spec(&spec);
        }
        match mode {
            ThemeMode::Dark => Self::fallback(Color::Black, Color::White, Color::DarkGray),
            ThemeMode::Light => Self::fallback(Color::White, Color::Black, Color::Gray),
        }
    }

    /// Palette-based theme for when the built-in table is unavailable.
    fn fallback(bg: Color, fg: Color, muted: Color) -> Self {
        let base = Style::default().fg(fg).bg(bg);
        let accent = Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD);
        Theme {
            background_color: bg,
            title_bar_style: base.add_modifier(Modifier::REVERSED),
            activity_bar_style: Style::default().fg(muted).bg(bg),
            activity_active_style: base.add_modifier(Modifier::BOLD),
            status_bar_style: accent,
            border_style: Style::default().fg(muted),
            border_focused_style: Style::default().fg(Color::Blue),
            sidebar_style: base,
            sidebar_title_style: base.add_modifier(Modifier::BOLD),
            tree_selected_style: base.add_modifier(Modifier::BOLD),
            tree_cursor_style: base.add_modifier(Modifier::REVERSED),
            tab_bar_style: Style::default().fg(muted).bg(bg),
            tab_style: Style::default().fg(muted).bg(bg),
            tab_active_style: base.add_modifier(Modifier::BOLD),
            editor_text_style: base,
            line_number_style: Style::default().fg(muted).bg(bg),
            keyword_style: Style::default().fg(Color::Blue),
            string_style: Style::default().fg(Color::Red),
            comment_style: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::ITALIC),
            heading_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            link_style: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
            link_selected_style: accent,
            button_style: accent,
            input_style: base,
            input_focused_style: base.add_modifier(Modifier::BOLD),
            terminal_style: base,
            terminal_title_style: base.add_modifier(Modifier::BOLD),
            terminal_prompt_style: Style::default().fg(Color::Green).bg(bg),
        }
    }

    pub fn from_spec(spec: &ThemeSpec) -> Self {
        let background_color = spec
            .background
            .as_deref()
            .and_then(parse_color)
            .unwrap_or(Color::Black);

        Theme {
            background_color,
            title_bar_style: parse_style(&spec.title_bar),
            activity_bar_style: parse_style(&spec.activity_bar),
            activity_active_style: parse_style(&spec.activity_active),
            status_bar_style: parse_style(&spec.status_bar),
            border_style: parse_style(&spec.border),
            border_focused_style: parse_style(&spec.border_focused),
            sidebar_style: parse_style(&spec.sidebar),
            sidebar_title_style: parse_style(&spec.sidebar_title),
            tree_selected_style: parse_style(&spec.tree_selected),
            tree_cursor_style: parse_style(&spec.tree_cursor),
            tab_bar_style: parse_style(&spec.tab_bar),
            tab_style: parse_style(&spec.tab),
            tab_active_style: parse_style(&spec.tab_active),
            editor_text_style: parse_style(&spec.editor_text),
            line_number_style: parse_style(&spec.line_number),
            keyword_style: parse_style(&spec.keyword),
            string_style: parse_style(&spec.string),
            comment_style: parse_style(&spec.comment),
            heading_style: parse_style(&spec.heading),
            link_style: parse_style(&spec.link),
            link_selected_style: parse_style(&spec.link_selected),
            button_style: parse_style(&spec.button),
            input_style: parse_style(&spec.input),
            input_focused_style: parse_style(&spec.input_focused),
            terminal_style: parse_style(&spec.terminal),
            terminal_title_style: parse_style(&spec.terminal_title),
            terminal_prompt_style: parse_style(&spec.terminal_prompt),
        }
    }
}

fn parse_color(s: &str) -> Option<Color> {
    let lower = s.trim().to_ascii_lowercase();
    if let Some(c) = parse_hex_color(&lower) {
        return Some(c);
    }
    if let Some(c) = parse_rgb_func(&lower) {
        return Some(c);
    }
    match lower.as_str() {
        "black" => Some(Color::Black),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "dark-grey" | "darkgray" => Some(Color::DarkGray),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "blue" => Some(Color::Blue),
        "cyan" => Some(Color::Cyan),
        "magenta" => Some(Color::Magenta),
        "yellow" => Some(Color::Yellow),
        "reset" => Some(Color::Reset),
        _ => None,
    }
}

fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

fn parse_rgb_func(s: &str) -> Option<Color> {
    // Format: rgb(r,g,b)
    let content = s.strip_prefix("rgb(")?.strip_suffix(')')?;
    let parts: Vec<_> = content
        .split([',', ' '])
        .filter(|t| !t.is_empty())
        .collect();
    if parts.len() != 3 {
        return None;
    }
    let r = parts[0].parse::<u16>().ok()?;
    let g = parts[1].parse::<u16>().ok()?;
    let b = parts[2].parse::<u16>().ok()?;
    Some(Color::Rgb(
        r.min(255) as u8,
        g.min(255) as u8,
        b.min(255) as u8,
    ))
}

fn parse_style(s: &Option<String>) -> Style {
    let mut style = Style::default();
    let Some(spec) = s else {
        return style;
    };
    for tok in spec.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if let Some(bg) = tok.strip_prefix("bg:") {
            if let Some(color) = parse_color(bg) {
                style = style.bg(color);
            }
        } else if let Some(color) = parse_color(tok) {
            style = style.fg(color);
        } else {
            match tok {
                "bold" => style = style.add_modifier(Modifier::BOLD),
                "reversed" => style = style.add_modifier(Modifier::REVERSED),
                "italic" => style = style.add_modifier(Modifier::ITALIC),
                "underlined" => style = style.add_modifier(Modifier::UNDERLINED),
                _ => {}
            }
        }
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_tokens_set_fg_bg_and_modifiers() {
        let style = parse_style(&Some("#ffffff, bg:rgb(0, 122, 204), bold".to_string()));
        assert_eq!(style.fg, Some(Color::Rgb(255, 255, 255)));
        assert_eq!(style.bg, Some(Color::Rgb(0, 122, 204)));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn short_hex_and_named_colors_parse() {
        assert_eq!(parse_color("#0af"), Some(Color::Rgb(0, 0xaa, 0xff)));
        assert_eq!(parse_color(" Grey "), Some(Color::Gray));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn unknown_tokens_are_ignored() {
        let style = parse_style(&Some("sparkly, , italic".to_string()));
        assert_eq!(style.fg, None);
        assert!(style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn modes_resolve_to_distinct_palettes() {
        let dark = Theme::for_mode(ThemeMode::Dark);
        let light = Theme::for_mode(ThemeMode::Light);
        assert_eq!(dark.background_color, Color::Rgb(0x1e, 0x1e, 0x1e));
        assert_eq!(light.background_color, Color::Rgb(0xff, 0xff, 0xff));
        assert_ne!(dark.editor_text_style, light.editor_text_style);
    }
}

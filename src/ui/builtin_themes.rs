use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeSpec {
    pub id: String,
    pub display_name: String,
    pub background: Option<String>,
    pub title_bar: Option<String>,
    pub activity_bar: Option<String>,
    pub activity_active: Option<String>,
    pub sidebar: Option<String>,
    pub sidebar_title: Option<String>,
    pub tree_selected: Option<String>,
    pub tree_cursor: Option<String>,
    pub tab_bar: Option<String>,
    pub tab: Option<String>,
    pub tab_active: Option<String>,
    pub editor_text: Option<String>,
    pub line_number: Option<String>,
    pub keyword: Option<String>,
    pub string: Option<String>,
    pub comment: Option<String>,
    pub heading: Option<String>,
    pub link: Option<String>,
    pub link_selected: Option<String>,
    pub button: Option<String>,
    pub input: Option<String>,
    pub input_focused: Option<String>,
    pub border: Option<String>,
    pub border_focused: Option<String>,
    pub terminal: Option<String>,
    pub terminal_title: Option<String>,
    pub terminal_prompt: Option<String>,
    pub status_bar: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BuiltinThemesConfig {
    themes: Vec<ThemeSpec>,
}

pub fn load_builtin_themes() -> Result<Vec<ThemeSpec>, toml::de::Error> {
    const CONFIG_CONTENT: &str = include_str!("../builtin_themes.toml");
    let config: BuiltinThemesConfig = toml::from_str(CONFIG_CONTENT)?;
    Ok(config.themes)
}

pub fn find_builtin_theme(id: &str) -> Option<ThemeSpec> {
    load_builtin_themes()
        .ok()?
        .into_iter()
        .find(|t| t.id.eq_ignore_ascii_case(id))
}

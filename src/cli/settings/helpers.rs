//! Helper functions for settings operations.

use crate::core::config::data::Config;
use crate::ui::builtin_themes::find_builtin_theme;

use super::error::SettingError;

/// Wrapper around `Config::mutate` that maps errors to `SettingError::ConfigError`.
pub fn mutate_config<F>(f: F) -> Result<(), SettingError>
where
    F: FnOnce(&mut Config) -> Result<(), Box<dyn std::error::Error>>,
{
    Config::mutate(f).map_err(|e| SettingError::ConfigError(e.to_string()))
}

/// Apply `f` and hand back `message` once the config is saved.
pub fn mutate_config_with_message<F>(f: F, message: String) -> Result<String, SettingError>
where
    F: FnOnce(&mut Config) -> Result<(), Box<dyn std::error::Error>>,
{
    mutate_config(f)?;
    Ok(message)
}

pub fn success_set(key: &str, value: &str) -> String {
    format!("✅ Set {key} to: {value}")
}

pub fn success_unset(key: &str) -> String {
    format!("✅ Unset {key}")
}

/// Validate a theme name, returning its canonical id.
pub fn validate_theme(input: &str) -> Result<String, SettingError> {
    find_builtin_theme(input.trim())
        .map(|theme| theme.id)
        .ok_or_else(|| SettingError::UnknownTheme {
            input: input.to_string(),
        })
}

/// Parse a positive column count.
pub fn parse_width(input: &str) -> Result<u16, SettingError> {
    match input.trim().parse::<u16>() {
        Ok(width) if width > 0 => Ok(width),
        _ => Err(SettingError::InvalidValue {
            key: "compact-width",
            input: input.to_string(),
            expected: "a column count between 1 and 65535",
        }),
    }
}

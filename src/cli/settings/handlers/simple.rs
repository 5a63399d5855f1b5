//! Handlers for the single-value settings.

use std::path::PathBuf;

use crate::cli::settings::error::SettingError;
use crate::cli::settings::helpers::{
    mutate_config_with_message, parse_width, success_set, success_unset, validate_theme,
};
use crate::cli::settings::{SetContext, SettingHandler};
use crate::core::config::data::path_display;
use crate::core::constants::DEFAULT_COMPACT_WIDTH;

fn unchanged(key: &str, value: &str) -> String {
    format!("ℹ️  {key} is already {value}")
}

/// Handler for the `theme` setting.
pub struct ThemeHandler;

impl SettingHandler for ThemeHandler {
    fn key(&self) -> &'static str {
        "theme"
    }

    fn set(&self, args: &[String], ctx: &mut SetContext<'_>) -> Result<String, SettingError> {
        if args.is_empty() {
            return Err(SettingError::MissingArgs {
                hint: "To set a theme, specify light or dark:",
                example: "codefolio set theme light",
            });
        }

        let theme = validate_theme(&args.join(" "))?;
        if ctx.config.theme.as_deref() == Some(theme.as_str()) {
            return Ok(unchanged("theme", &theme));
        }
        let message = success_set("theme", &theme);

        mutate_config_with_message(
            move |config| {
                config.theme = Some(theme);
                Ok(())
            },
            message,
        )
    }

    fn unset(&self, _ctx: &mut SetContext<'_>) -> Result<String, SettingError> {
        mutate_config_with_message(
            |config| {
                config.theme = None;
                Ok(())
            },
            success_unset("theme"),
        )
    }
}

/// Handler for the `compact-width` setting.
pub struct CompactWidthHandler;

impl SettingHandler for CompactWidthHandler {
    fn key(&self) -> &'static str {
        "compact-width"
    }

    fn set(&self, args: &[String], ctx: &mut SetContext<'_>) -> Result<String, SettingError> {
        let [value] = args else {
            return Err(SettingError::MissingArgs {
                hint: "To set the compact width, give a single column count:",
                example: "codefolio set compact-width 100",
            });
        };

        let width = parse_width(value)?;
        if ctx.config.compact_width == Some(width) {
            return Ok(unchanged("compact-width", &width.to_string()));
        }
        mutate_config_with_message(
            move |config| {
                config.compact_width = Some(width);
                Ok(())
            },
            success_set("compact-width", &width.to_string()),
        )
    }

    fn unset(&self, _ctx: &mut SetContext<'_>) -> Result<String, SettingError> {
        mutate_config_with_message(
            |config| {
                config.compact_width = None;
                Ok(())
            },
            format!(
                "{} (back to {DEFAULT_COMPACT_WIDTH})",
                success_unset("compact-width")
            ),
        )
    }
}

/// Handler for the `download-dir` setting.
pub struct DownloadDirHandler;

impl SettingHandler for DownloadDirHandler {
    fn key(&self) -> &'static str {
        "download-dir"
    }

    fn set(&self, args: &[String], _ctx: &mut SetContext<'_>) -> Result<String, SettingError> {
        let joined = args.join(" ");
        if joined.trim().is_empty() {
            return Err(SettingError::MissingArgs {
                hint: "To set the download directory, give a path:",
                example: "codefolio set download-dir ~/Documents",
            });
        }

        // Relative paths are pinned to the directory `set` was run from.
        let dir = std::path::absolute(PathBuf::from(joined.trim())).map_err(|err| {
            SettingError::InvalidValue {
                key: "download-dir",
                input: format!("{joined} ({err})"),
                expected: "a directory path",
            }
        })?;
        let message = success_set("download-dir", &path_display(&dir));

        mutate_config_with_message(
            move |config| {
                config.download_dir = Some(dir);
                Ok(())
            },
            message,
        )
    }

    fn unset(&self, _ctx: &mut SetContext<'_>) -> Result<String, SettingError> {
        mutate_config_with_message(
            |config| {
                config.download_dir = None;
                Ok(())
            },
            success_unset("download-dir"),
        )
    }
}

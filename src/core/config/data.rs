use crate::core::constants::DEFAULT_COMPACT_WIDTH;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Display mode ("light" or "dark"); anything else reads as dark
    pub theme: Option<String>,
    /// Terminal width (columns) at or below which the layout collapses
    pub compact_width: Option<u16>,
    /// Directory the resume is written to
    pub download_dir: Option<PathBuf>,
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
///
/// # Examples
/// - Unix: `/home/user/.config/codefolio/config.toml` → `~/.config/codefolio/config.toml`
/// - Windows: paths are returned unchanged
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}

impl Config {
    pub fn compact_width(&self) -> u16 {
        self.compact_width.unwrap_or(DEFAULT_COMPACT_WIDTH)
    }

    /// Configured download directory, else the user's Downloads folder, else `.`.
    pub fn resolved_download_dir(&self) -> PathBuf {
        if let Some(dir) = &self.download_dir {
            return dir.clone();
        }
        UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

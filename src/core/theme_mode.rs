//! Light/dark display mode and its persistence.

use crate::core::config::Config;
use crate::core::terminal_log::LogSink;
use std::error::Error;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Only `"light"` selects light mode; anything else, including garbage, is dark.
    pub fn from_persisted(value: Option<&str>) -> Self {
        match value {
            Some("light") => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Icon shown on the theme toggle.
    pub fn icon(self) -> &'static str {
        match self {
            ThemeMode::Light => "☀️",
            ThemeMode::Dark => "🌙",
        }
    }

    /// Text shown next to the icon on the theme toggle.
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable key-value slot holding the theme preference.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str) -> Result<(), Box<dyn Error>>;
}

/// Stores the preference in the `theme` key of the config file.
#[derive(Debug, Default)]
pub struct ConfigThemeStore;

impl ThemeStore for ConfigThemeStore {
    fn load(&self) -> Option<String> {
        Config::load().ok().and_then(|config| config.theme)
    }

    fn save(&mut self, value: &str) -> Result<(), Box<dyn Error>> {
        let value = value.to_string();
        Config::mutate(move |config| {
            config.theme = Some(value);
            Ok(())
        })
    }
}

/// Keeps the preference in memory only.
#[derive(Debug, Default, Clone)]
pub struct MemoryThemeStore {
    pub value: Option<String>,
}

impl MemoryThemeStore {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) -> Result<(), Box<dyn Error>> {
        self.value = Some(value.to_string());
        Ok(())
    }
}

pub struct ThemeController {
    mode: ThemeMode,
    store: Box<dyn ThemeStore>,
}

impl ThemeController {
    pub fn new(store: Box<dyn ThemeStore>) -> Self {
        Self {
            mode: ThemeMode::default(),
            store,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Apply the persisted preference without toggling or logging.
    pub fn initialize(&mut self) -> ThemeMode {
        let saved = self.store.load();
        self.mode = ThemeMode::from_persisted(saved.as_deref());
        debug!(theme = %self.mode, "initialized theme");
        self.mode
    }

    /// Flip the mode and persist it. The in-memory mode flips even when the
    /// write fails; the error is returned for the caller to report.
    pub fn toggle(&mut self, log: &mut dyn LogSink) -> Result<ThemeMode, Box<dyn Error>> {
        self.mode = self.mode.flipped();
        debug!(theme = %self.mode, "toggled theme");
        self.store.save(self.mode.as_str())?;
        log.log(&format!("🎨 Switched to {} theme", self.mode));
        Ok(self.mode)
    }

    pub fn persisted(&self) -> Option<String> {
        self.store.load()
    }
}

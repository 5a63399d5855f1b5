//! Error types for settings operations.

use std::fmt;

/// Errors that can occur when modifying configuration settings.
#[derive(Debug, PartialEq, Eq)]
pub enum SettingError {
    /// The provided setting key is not recognized.
    UnknownKey(String),
    /// The provided theme identifier was not found.
    UnknownTheme { input: String },
    /// The provided value could not be parsed for this key.
    InvalidValue {
        key: &'static str,
        input: String,
        expected: &'static str,
    },
    /// Required arguments are missing.
    MissingArgs {
        hint: &'static str,
        example: &'static str,
    },
    /// An error occurred while persisting the configuration.
    ConfigError(String),
}

impl SettingError {
    /// Print the error message to stderr with appropriate formatting.
    pub fn print(&self) {
        match self {
            SettingError::UnknownKey(key) => {
                eprintln!("❌ Unknown config key: {key}");
                eprintln!(
                    "   Available keys: {}",
                    super::SettingRegistry::new().keys().join(", ")
                );
            }
            SettingError::UnknownTheme { input } => {
                eprintln!("❌ Unknown theme: {input}. Use 'light' or 'dark'.");
            }
            SettingError::InvalidValue {
                key,
                input,
                expected,
            } => {
                eprintln!("❌ Invalid value for {key}: {input}");
                eprintln!("   Expected {expected}");
            }
            SettingError::MissingArgs { hint, example } => {
                eprintln!("⚠️  {hint}");
                eprintln!("Example: {example}");
            }
            SettingError::ConfigError(msg) => {
                eprintln!("❌ Failed to save configuration: {msg}");
            }
        }
    }

    /// Returns the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SettingError::MissingArgs { .. } => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for SettingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingError::UnknownKey(key) => write!(f, "Unknown config key: {key}"),
            SettingError::UnknownTheme { input } => write!(f, "Unknown theme: {input}"),
            SettingError::InvalidValue { key, input, .. } => {
                write!(f, "Invalid value for {key}: {input}")
            }
            SettingError::MissingArgs { hint, .. } => write!(f, "{hint}"),
            SettingError::ConfigError(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl std::error::Error for SettingError {}

//! Settings management for CLI set/unset commands.
//!
//! Each configuration key has a [`SettingHandler`] that validates the user's
//! input and persists it through [`Config::mutate`]:
//!
//! - `theme`: `light` or `dark`
//! - `compact-width`: column count at or below which the layout collapses
//! - `download-dir`: where `codefolio resume` and the download button write

pub mod error;
pub mod handlers;
pub mod helpers;
pub mod registry;

pub use error::SettingError;
pub use registry::SettingRegistry;

use crate::core::config::data::Config;

/// Context provided to setting handlers during set/unset operations.
pub struct SetContext<'a> {
    pub config: &'a Config,
}

/// Trait for handling a configuration setting.
pub trait SettingHandler: Send + Sync {
    /// Returns the configuration key this handler manages.
    fn key(&self) -> &'static str;

    /// Set the configuration value from the arguments after the key.
    ///
    /// Returns a success message to display.
    fn set(&self, args: &[String], ctx: &mut SetContext<'_>) -> Result<String, SettingError>;

    /// Unset (clear) the configuration value.
    fn unset(&self, ctx: &mut SetContext<'_>) -> Result<String, SettingError>;
}

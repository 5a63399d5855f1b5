//! Lookup table from config key to its handler.

use super::handlers::{CompactWidthHandler, DownloadDirHandler, ThemeHandler};
use super::SettingHandler;

/// Every settable key, in the order they are listed to the user.
pub struct SettingRegistry {
    handlers: Vec<Box<dyn SettingHandler>>,
}

impl SettingRegistry {
    pub fn new() -> Self {
        Self {
            handlers: vec![
                Box::new(ThemeHandler),
                Box::new(CompactWidthHandler),
                Box::new(DownloadDirHandler),
            ],
        }
    }

    /// Handler for `key`; keys are matched exactly.
    pub fn get(&self, key: &str) -> Option<&dyn SettingHandler> {
        self.handlers
            .iter()
            .find(|handler| handler.key() == key)
            .map(|handler| handler.as_ref())
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|handler| handler.key()).collect()
    }
}

impl Default for SettingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use crate::core::app::{App, AppSettings};
use crate::core::builtin_documents::DocumentCatalog;
use crate::core::config::Config;
use crate::core::constants::DEFAULT_COMPACT_WIDTH;
use crate::core::theme_mode::{MemoryThemeStore, ThemeStore};
use ratatui::prelude::Size;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tempfile::TempDir;

/// Serializes tests that swap the process-wide config path.
static CONFIG_TEST_LOCK: Mutex<()> = Mutex::new(());

/// Wide enough that the layout never collapses.
pub const WIDE_TERMINAL: Size = Size {
    width: 120,
    height: 40,
};

pub fn create_test_app() -> App {
    create_test_app_with(
        Box::new(MemoryThemeStore::default()),
        PathBuf::from("."),
    )
}

/// App whose resume downloads land in `dir`.
pub fn create_test_app_with_downloads(dir: &Path) -> App {
    create_test_app_with(Box::new(MemoryThemeStore::default()), dir.to_path_buf())
}

pub fn create_test_app_with(store: Box<dyn ThemeStore>, download_dir: PathBuf) -> App {
    let documents = DocumentCatalog::builtin().expect("builtin documents parse");
    App::new(
        documents,
        store,
        AppSettings {
            compact_width: DEFAULT_COMPACT_WIDTH,
            download_dir,
        },
    )
}

/// Bootstrapped app on a wide terminal with an empty log.
pub fn create_bootstrapped_app() -> App {
    let mut app = create_test_app();
    app.bootstrap(WIDE_TERMINAL);
    app
}

/// Finalized terminal lines, oldest first.
pub fn terminal_messages(app: &App) -> Vec<String> {
    app.terminal.finalized().map(|line| line.text.clone()).collect()
}

/// Run `f` with `Config::load`/`save` pointed at a fresh `config.toml` in a
/// temporary directory. The path is passed to `f`.
pub fn with_test_config<R>(f: impl FnOnce(&Path) -> R) -> R {
    let _guard = CONFIG_TEST_LOCK
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    Config::set_test_config_path(config_path.clone());
    let result = f(&config_path);
    Config::clear_test_config_override();
    result
}

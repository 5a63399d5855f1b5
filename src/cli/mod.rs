//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod settings;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::cli::settings::{SetContext, SettingError, SettingRegistry};
use crate::core::app::{App, AppSettings};
use crate::core::builtin_documents::DocumentCatalog;
use crate::core::config::{path_display, Config};
use crate::core::resume::write_resume;
use crate::core::theme_mode::ConfigThemeStore;
use crate::ui::event_loop::run_workbench;
use crate::utils::logging::init_file_logging;

pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_DESCRIBE"),
    ")"
);

#[derive(Parser)]
#[command(name = "codefolio")]
#[command(version = VERSION)]
#[command(about = "A developer portfolio styled as a code editor, in your terminal")]
#[command(
    long_about = "Codefolio shows a developer portfolio as a full-screen, VS Code-styled \
workbench: a file explorer, editor tabs, and a terminal panel that narrates what you do.\n\n\
Controls:\n\
  Mouse             Click files, tabs, links, buttons, and the window dots\n\
  Tab / Shift+Tab   Move focus between explorer, editor, and form\n\
  Alt+1..4          Jump to explorer, projects, contact, resume\n\
  Ctrl+`            Toggle the terminal panel (Ctrl+Space also works)\n\
  Ctrl+W            Close the current tab\n\
  Ctrl+PgUp/PgDn    Switch tabs\n\
  Alt+T             Toggle light/dark theme\n\
  Ctrl+C / Ctrl+Q   Quit\n\n\
Configuration keys (codefolio set <key> <value>):\n\
  theme             light or dark\n\
  compact-width     columns at or below which the terminal panel minimizes\n\
  download-dir      where the resume is written"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Write diagnostics to this file (filter with RUST_LOG)
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the workbench (default)
    Run,
    /// Set configuration values, or show them when no value is given
    Set {
        /// Configuration key to set
        key: Option<String>,
        /// Value to set for the key (paths may contain spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Option<Vec<String>>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
    /// Write the resume without starting the workbench
    Resume {
        /// Directory to write into (defaults to download-dir)
        path: Option<PathBuf>,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log {
        init_file_logging(path)?;
        info!(version = VERSION, "logging to {}", path.display());
    }

    match args.command.unwrap_or(Commands::Run) {
        Commands::Run => tokio::runtime::Runtime::new()?.block_on(run_ui()),
        Commands::Set { key, value } => {
            let config = Config::load()?;
            let args = value.unwrap_or_default();
            match key {
                Some(key) if !args.is_empty() => {
                    report(apply_setting(&SettingRegistry::new(), &config, &key, &args));
                }
                Some(key) if SettingRegistry::new().get(&key).is_none() => {
                    report(Err(SettingError::UnknownKey(key)));
                }
                _ => config.print_all(),
            }
            Ok(())
        }
        Commands::Unset { key } => {
            let config = Config::load()?;
            report(clear_setting(&SettingRegistry::new(), &config, &key));
            Ok(())
        }
        Commands::Resume { path } => {
            let dir = match path {
                Some(dir) => dir,
                None => Config::load()?.resolved_download_dir(),
            };
            let written = write_resume(&dir)?;
            println!("📄 Resume written to {}", path_display(&written));
            Ok(())
        }
    }
}

async fn run_ui() -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let documents = DocumentCatalog::builtin()?;
    info!(
        documents = documents.len(),
        config = %path_display(Config::active_path()),
        "starting workbench"
    );
    let app = App::new(
        documents,
        Box::new(ConfigThemeStore),
        AppSettings::from_config(&config),
    );
    run_workbench(app).await
}

fn apply_setting(
    registry: &SettingRegistry,
    config: &Config,
    key: &str,
    args: &[String],
) -> Result<String, SettingError> {
    let handler = registry
        .get(key)
        .ok_or_else(|| SettingError::UnknownKey(key.to_string()))?;
    handler.set(args, &mut SetContext { config })
}

fn clear_setting(
    registry: &SettingRegistry,
    config: &Config,
    key: &str,
) -> Result<String, SettingError> {
    let handler = registry
        .get(key)
        .ok_or_else(|| SettingError::UnknownKey(key.to_string()))?;
    handler.unset(&mut SetContext { config })
}

fn report(result: Result<String, SettingError>) {
    match result {
        Ok(message) => println!("{message}"),
        Err(err) => {
            err.print();
            std::process::exit(err.exit_code());
        }
    }
}

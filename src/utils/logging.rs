//! Tracing setup for `--log <FILE>`.
//!
//! The UI owns the terminal, so diagnostics only ever go to a file. Without
//! `--log` no subscriber is installed and the `tracing` macros are no-ops.

use std::error::Error;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "codefolio=debug";

/// `RUST_LOG` when set and valid, otherwise debug output for this crate only.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let fmt_layer = fmt::layer().with_ansi(false).with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter())
}

/// Install the global subscriber writing to `path` (truncated).
pub fn init_file_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    let log_file = File::create(path)
        .map_err(|err| format!("cannot open log file {}: {err}", path.display()))?;
    build_subscriber(log_file).try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn events_land_in_the_log_file() {
        let log_file = NamedTempFile::new().unwrap();
        let subscriber = build_subscriber(log_file.reopen().unwrap());

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "codefolio::test", "tab opened");
            tracing::trace!(target: "codefolio::test", "too chatty");
        });

        let contents = fs::read_to_string(log_file.path()).unwrap();
        assert!(contents.contains("tab opened"));
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(!contents.contains("too chatty"));
        }
    }

    #[test]
    fn unwritable_log_path_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("codefolio.log");
        let err = init_file_logging(&path).unwrap_err();
        assert!(err.to_string().contains("cannot open log file"));
    }
}

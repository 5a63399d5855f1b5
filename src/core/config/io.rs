use crate::core::config::data::{path_display, Config};
use directories::ProjectDirs;
use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Why the config file could not be turned into a [`Config`].
#[derive(Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    Read { path: PathBuf, source: io::Error },
    /// The file is not valid TOML for [`Config`].
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            ConfigError::Read { .. } => "read",
            ConfigError::Parse { .. } => "parse",
        };
        write!(f, "Failed to {verb} config at {}", path_display(self.path()))?;
        match self {
            ConfigError::Read { source, .. } => write!(f, ": {source}"),
            ConfigError::Parse { source, .. } => write!(f, ": {source}"),
        }
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

/// Replace `target` with `bytes` in one rename, so readers never see a
/// half-written file. Missing parent directories are created.
pub(crate) fn write_atomically(target: &Path, bytes: &[u8]) -> Result<(), Box<dyn StdError>> {
    let dir = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(bytes)?;
    staged.as_file_mut().sync_all()?;
    staged.persist(target).map_err(|err| err.error)?;
    Ok(())
}

impl Config {
    /// Read `config_path`; a missing file yields the defaults.
    pub fn load_from_path(config_path: &Path) -> Result<Config, Box<dyn StdError>> {
        let contents = match fs::read_to_string(config_path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: config_path.to_path_buf(),
                    source,
                }
                .into())
            }
        };
        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    pub(crate) fn save_to_path(&self, config_path: &Path) -> Result<(), Box<dyn StdError>> {
        let contents = toml::to_string_pretty(self)?;
        write_atomically(config_path, contents.as_bytes())
    }

    /// `config.toml` in the platform config directory, or the working
    /// directory when no home directory can be found.
    pub fn get_config_path() -> PathBuf {
        ProjectDirs::from("org", "codefolio", "codefolio")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }
}

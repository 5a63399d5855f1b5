use crate::core::config::data::Config;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};
use std::time::SystemTime;

#[derive(Default)]
pub(crate) struct ConfigCacheState {
    config: Option<Config>,
    modified: Option<SystemTime>,
}

/// Caches the parsed config and reloads it when the file's mtime changes.
pub(crate) struct ConfigOrchestrator {
    path: PathBuf,
    state: Mutex<ConfigCacheState>,
}

#[cfg_attr(test, allow(dead_code))]
pub(crate) static CONFIG_ORCHESTRATOR: LazyLock<ConfigOrchestrator> =
    LazyLock::new(|| ConfigOrchestrator::new(Config::get_config_path()));

#[cfg(test)]
pub(crate) static TEST_ORCHESTRATOR: LazyLock<Mutex<Option<ConfigOrchestrator>>> =
    LazyLock::new(|| Mutex::new(None));

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ConfigOrchestrator {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: Mutex::new(ConfigCacheState::default()),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn load_with_cache(&self) -> Result<Config, Box<dyn Error>> {
        let mut state = lock(&self.state);
        Self::refresh(&self.path, &mut state)?;
        Ok(state.config.clone().unwrap_or_default())
    }

    pub(crate) fn persist(&self, config: Config) -> Result<(), Box<dyn Error>> {
        config.save_to_path(&self.path)?;
        let mut state = lock(&self.state);
        state.modified = Self::modified_time(&self.path);
        state.config = Some(config);
        Ok(())
    }

    pub(crate) fn mutate<F, T>(&self, mutator: F) -> Result<T, Box<dyn Error>>
    where
        F: FnOnce(&mut Config) -> Result<T, Box<dyn Error>>,
    {
        let mut working = self.load_with_cache()?;
        let result = mutator(&mut working)?;
        self.persist(working)?;
        Ok(result)
    }

    fn refresh(path: &Path, state: &mut ConfigCacheState) -> Result<(), Box<dyn Error>> {
        let disk_modified = Self::modified_time(path);
        if state.config.is_none() || state.modified != disk_modified {
            let config = Config::load_from_path(path)?;
            state.modified = disk_modified;
            state.config = Some(config);
        }
        Ok(())
    }

    fn modified_time(path: &Path) -> Option<SystemTime> {
        fs::metadata(path).ok()?.modified().ok()
    }
}

/// Run `f` against the orchestrator backing `Config::load`/`save`. Test builds
/// only touch disk after `Config::set_test_config_path`.
fn with_orchestrator<R>(f: impl FnOnce(Option<&ConfigOrchestrator>) -> R) -> R {
    #[cfg(test)]
    {
        f(lock(&TEST_ORCHESTRATOR).as_ref())
    }
    #[cfg(not(test))]
    {
        f(Some(&CONFIG_ORCHESTRATOR))
    }
}

impl Config {
    pub fn load() -> Result<Config, Box<dyn Error>> {
        with_orchestrator(|orchestrator| match orchestrator {
            Some(orchestrator) => orchestrator.load_with_cache(),
            None => Ok(Config::default()),
        })
    }

    pub fn save(&self) -> Result<(), Box<dyn Error>> {
        with_orchestrator(|orchestrator| match orchestrator {
            Some(orchestrator) => orchestrator.persist(self.clone()),
            None => Ok(()),
        })
    }

    /// Load, apply `mutator`, and persist in one step.
    pub fn mutate<F, T>(mutator: F) -> Result<T, Box<dyn Error>>
    where
        F: FnOnce(&mut Config) -> Result<T, Box<dyn Error>>,
    {
        with_orchestrator(|orchestrator| match orchestrator {
            Some(orchestrator) => orchestrator.mutate(mutator),
            None => mutator(&mut Config::default()),
        })
    }

    /// Where the active config lives.
    pub fn active_path() -> PathBuf {
        with_orchestrator(|orchestrator| match orchestrator {
            Some(orchestrator) => orchestrator.path().to_path_buf(),
            None => Config::get_config_path(),
        })
    }

    #[cfg(test)]
    pub(crate) fn set_test_config_path(path: PathBuf) {
        *lock(&TEST_ORCHESTRATOR) = Some(ConfigOrchestrator::new(path));
    }

    #[cfg(test)]
    pub(crate) fn clear_test_config_override() {
        lock(&TEST_ORCHESTRATOR).take();
    }
}

use crate::core::config::data::ChatSettings;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::SystemTime;

#[derive(Default)]
struct SettingsCacheState {
    settings: Option<ChatSettings>,
    modified: Option<SystemTime>,
}

/// Owns one settings file and caches its contents until the file changes.
pub struct ConfigOrchestrator {
    path: PathBuf,
    state: Mutex<SettingsCacheState>,
}

impl ConfigOrchestrator {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: Mutex::new(SettingsCacheState::default()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_with_cache(&self) -> Result<ChatSettings, Box<dyn std::error::Error>> {
        let mut state = self.lock_state();
        self.refresh(&mut state)?;
        Ok(state.settings.clone().unwrap_or_default())
    }

    pub fn persist(&self, settings: ChatSettings) -> Result<(), Box<dyn std::error::Error>> {
        settings.save_to_path(&self.path)?;
        let mut state = self.lock_state();
        state.modified = Self::modified_time(&self.path);
        state.settings = Some(settings);
        Ok(())
    }

    /// Load, apply `mutator` to a working copy, then persist it.
    ///
    /// Nothing is written when the mutator fails.
    pub fn mutate<F, T>(&self, mutator: F) -> Result<T, Box<dyn std::error::Error>>
    where
        F: FnOnce(&mut ChatSettings) -> Result<T, Box<dyn std::error::Error>>,
    {
        let mut working = self.load_with_cache()?;
        let result = mutator(&mut working)?;
        self.persist(working)?;
        Ok(result)
    }

    fn refresh(&self, state: &mut SettingsCacheState) -> Result<(), Box<dyn std::error::Error>> {
        let disk_modified = Self::modified_time(&self.path);
        if state.settings.is_none() || state.modified != disk_modified {
            let settings = ChatSettings::load_from_path(&self.path)?;
            state.modified = disk_modified;
            state.settings = Some(settings);
        }
        Ok(())
    }

    fn lock_state(&self) -> MutexGuard<'_, SettingsCacheState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn modified_time(path: &Path) -> Option<SystemTime> {
        fs::metadata(path).ok()?.modified().ok()
    }
}

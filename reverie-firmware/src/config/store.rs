//! [`SettingsStore`] bridge between the synchronous controller and flash
//!
//! Flash access is async and slow, so the store hands out the record
//! read at boot and queues writes for the settings task.

use reverie_core::config::Settings;
use reverie_core::traits::{SettingsStore, StorageError};

use crate::channels::SETTINGS_SAVE;

/// Settings store backed by the flash settings task
pub struct FlashSettingsStore {
    loaded: Result<Settings, StorageError>,
}

impl FlashSettingsStore {
    /// Wrap the result of the boot-time flash read
    pub fn new(loaded: Result<Settings, StorageError>) -> Self {
        Self { loaded }
    }
}

impl SettingsStore for FlashSettingsStore {
    fn load(&mut self) -> Result<Settings, StorageError> {
        self.loaded
    }

    fn save(&mut self, settings: &Settings) -> Result<(), StorageError> {
        self.loaded = Ok(*settings);
        SETTINGS_SAVE.signal(*settings);
        Ok(())
    }
}

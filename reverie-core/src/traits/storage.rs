//! Settings persistence trait

use crate::config::Settings;

/// Errors from the settings store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Nothing stored, or the backing store is not reachable
    Unavailable,
    /// Stored data failed validation
    Corrupt,
    /// Read or write failed
    Io,
}

impl From<crate::config::RecordError> for StorageError {
    fn from(_: crate::config::RecordError) -> Self {
        StorageError::Corrupt
    }
}

/// Whole-record settings load/save
pub trait SettingsStore {
    /// Load the stored settings
    fn load(&mut self) -> Result<Settings, StorageError>;

    /// Replace the stored settings
    fn save(&mut self, settings: &Settings) -> Result<(), StorageError>;
}

//! Settings record persistence
//!
//! Loads and saves the settings record to flash storage.

use defmt::*;

use reverie_core::config::{RecordError, Settings, SettingsRecord};
use reverie_core::traits::StorageError;
use reverie_hal_rp2040::flash::{FlashError, Rp2040FlashStorage, StorageKey};
use reverie_hal_rp2040::FlashStorageTrait;

/// Maximum serialized record size
const MAX_SETTINGS_SIZE: usize = 128;

/// Settings persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsPersistError {
    /// Flash operation failed
    Flash(FlashError),
    /// Serialization failed
    Serialize,
    /// Deserialization failed
    Deserialize,
    /// Record header or CRC rejected
    Record(RecordError),
}

impl From<FlashError> for SettingsPersistError {
    fn from(e: FlashError) -> Self {
        SettingsPersistError::Flash(e)
    }
}

impl From<RecordError> for SettingsPersistError {
    fn from(e: RecordError) -> Self {
        SettingsPersistError::Record(e)
    }
}

impl From<SettingsPersistError> for StorageError {
    fn from(e: SettingsPersistError) -> Self {
        match e {
            SettingsPersistError::Flash(FlashError::NotFound) => StorageError::Unavailable,
            SettingsPersistError::Flash(_) | SettingsPersistError::Serialize => StorageError::Io,
            SettingsPersistError::Deserialize | SettingsPersistError::Record(_) => {
                StorageError::Corrupt
            }
        }
    }
}

/// Load settings from flash
///
/// Fails if nothing is stored or the stored record does not validate;
/// the controller falls back to defaults in that case.
pub async fn load_settings(
    storage: &mut Rp2040FlashStorage<'_>,
) -> Result<Settings, SettingsPersistError> {
    let mut buffer = [0u8; MAX_SETTINGS_SIZE];
    let len = storage.read(StorageKey::Settings, &mut buffer).await?;

    debug!("Read {} bytes of settings from flash", len);

    let record: SettingsRecord =
        postcard::from_bytes(&buffer[..len]).map_err(|_| SettingsPersistError::Deserialize)?;

    let settings = record.validate()?;
    info!(
        "Loaded settings: {} alarms/day, {} checks so far",
        settings.alarms_per_day, settings.check_count
    );
    Ok(settings)
}

/// Save settings to flash
///
/// Seals the settings into a fresh record (header and CRC) first.
pub async fn save_settings(
    storage: &mut Rp2040FlashStorage<'_>,
    settings: &Settings,
) -> Result<(), SettingsPersistError> {
    let record = SettingsRecord::new(settings.sanitized());

    let mut buffer = [0u8; MAX_SETTINGS_SIZE];
    let bytes =
        postcard::to_slice(&record, &mut buffer).map_err(|_| SettingsPersistError::Serialize)?;

    debug!("Saving {} bytes of settings to flash", bytes.len());

    storage.write(StorageKey::Settings, bytes).await?;
    Ok(())
}

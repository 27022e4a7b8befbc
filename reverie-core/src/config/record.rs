//! Persisted settings record
//!
//! Wraps [`Settings`] with a header for validation before it goes to
//! flash. The firmware serializes the record with postcard; the checks
//! here are independent of the encoding.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::settings::Settings;

/// Magic number to identify a settings record
pub const SETTINGS_MAGIC: u32 = 0x5256_5354; // "RVST"

/// Current settings record version
pub const SETTINGS_VERSION: u8 = 1;

/// Why a stored record was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RecordError {
    /// Magic number does not match
    BadMagic,
    /// Written by an incompatible firmware version
    UnsupportedVersion(u8),
    /// Contents do not match the stored CRC
    ChecksumMismatch,
}

/// Settings as stored in flash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SettingsRecord {
    /// Magic number for validation
    pub magic: u32,
    /// Record format version
    pub version: u8,
    /// Payload
    pub settings: Settings,
    /// CRC32 over magic, version and settings
    pub crc: u32,
}

impl SettingsRecord {
    /// Seal `settings` into a record with a valid header and CRC
    pub fn new(settings: Settings) -> Self {
        let mut record = Self {
            magic: SETTINGS_MAGIC,
            version: SETTINGS_VERSION,
            settings,
            crc: 0,
        };
        record.crc = record.calculate_crc();
        record
    }

    /// Validate the header and CRC, returning sanitized settings
    pub fn validate(&self) -> Result<Settings, RecordError> {
        if self.magic != SETTINGS_MAGIC {
            return Err(RecordError::BadMagic);
        }
        if self.version != SETTINGS_VERSION {
            return Err(RecordError::UnsupportedVersion(self.version));
        }
        if self.crc != self.calculate_crc() {
            return Err(RecordError::ChecksumMismatch);
        }
        Ok(self.settings.sanitized())
    }

    /// Calculate CRC32 for the record (excluding the crc field itself)
    pub fn calculate_crc(&self) -> u32 {
        let s = &self.settings;
        let mut crc: u32 = 0xFFFFFFFF;

        crc = crc32_update(crc, &self.magic.to_le_bytes());
        crc = crc32_update(crc, &[self.version]);

        crc = crc32_update(crc, &[s.alarms_per_day]);
        crc = crc32_update(
            crc,
            &[
                s.quiet_hours.enabled as u8,
                s.quiet_hours.start_hour,
                s.quiet_hours.end_hour,
            ],
        );
        crc = crc32_update(
            crc,
            &[
                s.morning_alarm.enabled as u8,
                s.morning_alarm.hour,
                s.morning_alarm.minute,
            ],
        );
        crc = crc32_update(crc, &s.screen_timeout.as_secs().to_le_bytes());
        crc = crc32_update(
            crc,
            &[
                s.sensitivity.level(),
                s.brightness.level(),
                s.clock_color as u8,
                s.time_format as u8,
            ],
        );
        crc = crc32_update(crc, &s.check_kinds.bits().to_le_bytes());
        crc = crc32_update(crc, &s.check_count.to_le_bytes());
        crc = crc32_update_minute(crc, s.last_alarm_minute);
        crc = crc32_update_minute(crc, s.next_alarm_minute);

        !crc
    }
}

fn crc32_update_minute(crc: u32, minute: Option<u16>) -> u32 {
    match minute {
        Some(m) => {
            let crc = crc32_update(crc, &[1]);
            crc32_update(crc, &m.to_le_bytes())
        }
        None => crc32_update(crc, &[0]),
    }
}

/// CRC32 update (IEEE 802.3 polynomial, reflected)
fn crc32_update(crc: u32, data: &[u8]) -> u32 {
    const POLY: u32 = 0xEDB88320;
    let mut crc = crc;

    for &byte in data {
        crc ^= byte as u32;
        for _ in 0..8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ POLY;
            } else {
                crc >>= 1;
            }
        }
    }

    crc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc32_reference_value() {
        // Standard check value for "123456789"
        assert_eq!(!crc32_update(0xFFFFFFFF, b"123456789"), 0xCBF43926);
    }

    #[test]
    fn test_sealed_record_validates() {
        let mut settings = Settings::default();
        settings.check_count = 41;
        let record = SettingsRecord::new(settings);
        assert_eq!(record.validate(), Ok(settings));
    }

    #[test]
    fn test_modified_payload_fails_crc() {
        let mut record = SettingsRecord::new(Settings::default());
        record.settings.check_count += 1;
        assert_eq!(record.validate(), Err(RecordError::ChecksumMismatch));

        let mut record = SettingsRecord::new(Settings::default());
        record.settings.next_alarm_minute = Some(600);
        assert_eq!(record.validate(), Err(RecordError::ChecksumMismatch));
    }

    #[test]
    fn test_header_checks_run_before_crc() {
        let mut record = SettingsRecord::new(Settings::default());
        record.magic = 0;
        assert_eq!(record.validate(), Err(RecordError::BadMagic));

        let mut record = SettingsRecord::new(Settings::default());
        record.version = 9;
        assert_eq!(record.validate(), Err(RecordError::UnsupportedVersion(9)));
    }

    #[test]
    fn test_validate_sanitizes_payload() {
        let mut settings = Settings::default();
        settings.alarms_per_day = 50;
        let record = SettingsRecord::new(settings);
        let loaded = record.validate().unwrap();
        assert_eq!(loaded.alarms_per_day, 20);
    }
}

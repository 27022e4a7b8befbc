//! Configuration types
//!
//! User settings, their value types, and the record they are persisted in.

mod record;
mod settings;
mod types;

pub use record::{RecordError, SettingsRecord, SETTINGS_MAGIC, SETTINGS_VERSION};
pub use settings::{Settings, DEFAULT_ALARMS_PER_DAY, MAX_ALARMS_PER_DAY};
pub use types::{
    Brightness, CheckKind, CheckKindSet, ClockColor, MorningAlarm, QuietHours, ScreenTimeout,
    Sensitivity, TimeFormat, CHECK_KIND_COUNT,
};

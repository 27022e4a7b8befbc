//! Settings persistence

pub mod settings;
pub mod store;

pub use settings::{load_settings, save_settings};
pub use store::FlashSettingsStore;

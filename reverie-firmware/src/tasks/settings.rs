//! Settings persistence task
//!
//! Owns the flash storage and writes each settings snapshot the
//! controller saves. Writes run here so the interaction loop never
//! waits on a flash erase.

use defmt::*;

use reverie_hal_rp2040::flash::Rp2040FlashStorage;

use crate::channels::SETTINGS_SAVE;
use crate::config::save_settings;

#[embassy_executor::task]
pub async fn settings_task(mut storage: Rp2040FlashStorage<'static>) {
    info!("Settings task started");

    loop {
        let settings = SETTINGS_SAVE.wait().await;

        match save_settings(&mut storage, &settings).await {
            Ok(()) => info!(
                "Saved settings ({} checks, next alarm {:?})",
                settings.check_count, settings.next_alarm_minute
            ),
            Err(e) => error!("Failed to save settings: {:?}", e),
        }
    }
}

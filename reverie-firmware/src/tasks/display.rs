//! Display task
//!
//! Receives views from the interaction task.

use defmt::*;

use crate::channels::SCREEN_UPDATE;

#[embassy_executor::task]
pub async fn display_task() {
    info!("Display task started");

    loop {
        let view = SCREEN_UPDATE.wait().await;
        // TODO: draw on the GC9A01 panel over SPI1 once a panel driver is added
        trace!("View: {:?}", view);
    }
}

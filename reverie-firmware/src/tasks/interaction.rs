//! Interaction task
//!
//! Polls the controller every 10 ms. All watch behaviour happens inside
//! `Controller::poll`; this task only feeds it time and logs what changed.

use defmt::*;
use embassy_time::{Duration, Ticker};
use rand::rngs::SmallRng;

use reverie_core::controller::Controller;
use reverie_core::traits::ClockSource;

use crate::board::BoardIo;
use crate::config::FlashSettingsStore;

/// Controller poll period
const POLL_INTERVAL_MS: u64 = 10;

pub type BoardController = Controller<SmallRng, FlashSettingsStore>;

#[embassy_executor::task]
pub async fn interaction_task(mut controller: BoardController, mut io: BoardIo) {
    info!("Interaction task started");

    if let Some(e) = controller.take_storage_error() {
        warn!("Settings unavailable ({:?}), using defaults", e);
    }

    let mut mode = controller.mode();
    let mut next_alarm = controller.alarm().next_trigger_minute();
    let mut cues = controller.sleep().cues();
    info!(
        "First reality check at {:02}:{:02}",
        next_alarm / 60,
        next_alarm % 60
    );

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    loop {
        ticker.next().await;

        let now = io.clock.now();
        io.buttons.update(now);
        controller.poll(&mut io);

        if controller.mode() != mode {
            debug!("Mode: {:?} -> {:?}", mode, controller.mode());
            mode = controller.mode();
        }

        let next = controller.alarm().next_trigger_minute();
        if next != next_alarm {
            info!("Next reality check at {:02}:{:02}", next / 60, next % 60);
            next_alarm = next;
        }

        let played = controller.sleep().cues();
        if played > cues {
            info!("REM cue {} played", played);
        }
        cues = played;

        if let Some(e) = controller.take_storage_error() {
            error!("Settings store error: {:?}", e);
        }
    }
}

//! Reverie - reality-check watch firmware
//!
//! Main entry point for the RP2040-based firmware.
//!
//! Boot order: bring up the board, read settings from flash, build the
//! controller, then hand everything to the tasks.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::clocks::RoscRng;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use {defmt_rtt as _, panic_probe as _};

use reverie_core::controller::{Controller, Io};
use reverie_core::traits::StorageError;
use reverie_drivers::motion::DeltaTracker;

mod board;
mod channels;
mod config;
mod display;
mod tasks;

use board::Board;
use config::{load_settings, FlashSettingsStore};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Reverie firmware starting...");

    let p = embassy_rp::init(Default::default());
    let mut board = Board::new(p);

    let loaded = load_settings(&mut board.storage)
        .await
        .map_err(StorageError::from);
    if let Err(StorageError::Unavailable) = loaded {
        debug!("No settings in flash");
    }
    let store = FlashSettingsStore::new(loaded);

    // Shake-to-wake degrades to buttons only without a working IMU
    if let Err(e) = board.imu.init() {
        warn!("IMU init failed: {:?}", e);
    }

    let rng = SmallRng::seed_from_u64(RoscRng.next_u64());
    let controller = Controller::new(rng, store, &mut board.clock);

    let io = Io {
        clock: board.clock,
        buttons: board.buttons,
        motion: DeltaTracker::new(board.imu),
        display: board.screen,
        tone: board.tone,
    };

    spawner.spawn(tasks::settings_task(board.storage)).unwrap();
    spawner.spawn(tasks::display_task()).unwrap();
    spawner.spawn(tasks::interaction_task(controller, io)).unwrap();

    info!("All tasks spawned");
}

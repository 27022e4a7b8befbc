//! Embassy tasks for the watch firmware
//!
//! Each task runs independently and communicates via channels/signals.

mod display;
mod interaction;
mod settings;

pub use display::display_task;
pub use interaction::{interaction_task, BoardController};
pub use settings::settings_task;

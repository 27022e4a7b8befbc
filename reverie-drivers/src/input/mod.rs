//! Button input

mod button;
mod panel;

pub use button::{Button, ButtonConfig};
pub use panel::ButtonPanel;

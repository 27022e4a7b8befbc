//! Mode state machine
//!
//! The top-level interaction mode is a single sum type, so an editing
//! overlay can never coexist with the menu, a reality check or another
//! overlay.

pub mod events;
pub mod machine;
pub mod menu;

pub use events::Event;
pub use machine::{EditingKind, Mode};
pub use menu::MenuItem;

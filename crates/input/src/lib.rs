//! Terminal input module (viewer-facing).
//!
//! Maps `crossterm` key events into [`crate::types::ViewerAction`] and
//! coalesces repeated navigation keys so a held arrow key does not queue up
//! dozens of full-screen redraws.

pub mod map;
pub mod throttle;

pub use timview_types as types;

pub use map::{handle_key_event, should_quit};
pub use throttle::KeyThrottle;

//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Intent`]s. There is no
//! repeat handling here: every key press is one intent, and the terminal's own
//! auto-repeat produces the rest.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};

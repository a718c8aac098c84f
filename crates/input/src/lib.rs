//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::Command`]s plus the two
//! out-of-band keys (restart, quit). Key repeat is left to the terminal.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_restart, should_quit};

//! Terminal input module.
//!
//! Maps `crossterm` key events into the polled key state the game loop
//! wants: instantaneous "is this key held" queries for movement and
//! fast-drop, plus an edge-triggered rotate. Works in terminals that never
//! emit key-release events by expiring stale holds after a short timeout.

pub mod map;
pub mod poller;

pub use quadris_types as types;

pub use map::{is_start_key, should_quit};
pub use poller::{HeldKey, KeyPoller};

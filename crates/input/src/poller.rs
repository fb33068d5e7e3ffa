//! Polled key state for the cooperative game loop.
//!
//! The game loop asks "is left held right now?" once per 10 ms slice rather
//! than consuming a queued action stream, so this tracker turns crossterm's
//! edge events back into level state. Terminals that never emit key-release
//! events are handled with a timeout: a hold with no fresh press/repeat
//! evidence expires on the next [`KeyPoller::tick`].

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{held_key_for, is_rotate_key};

/// The gameplay keys tracked as held state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeldKey {
    Left,
    Right,
    FastDrop,
}

const HELD_KEY_COUNT: usize = 3;

// Terminal auto-repeat usually starts well under 150ms, so a hold that has
// seen no repeat for that long is a released key.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

impl HeldKey {
    fn index(self) -> usize {
        match self {
            HeldKey::Left => 0,
            HeldKey::Right => 1,
            HeldKey::FastDrop => 2,
        }
    }
}

/// Tracks held keys and the rotate press edge.
#[derive(Debug, Clone)]
pub struct KeyPoller {
    last_seen: [Option<Instant>; HELD_KEY_COUNT],
    rotate_pending: bool,
    release_timeout: Duration,
}

impl KeyPoller {
    pub fn new() -> Self {
        Self {
            last_seen: [None; HELD_KEY_COUNT],
            rotate_pending: false,
            release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    pub fn with_release_timeout(mut self, timeout: Duration) -> Self {
        self.release_timeout = timeout;
        self
    }

    /// Feed one terminal key event into the tracker.
    ///
    /// Press and Repeat both count as evidence the key is down; only a
    /// Press arms the rotate edge, so holding the rotate key yields exactly
    /// one rotation per physical press.
    pub fn handle_event(&mut self, key: KeyEvent) {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if let Some(held) = held_key_for(key.code) {
                    self.last_seen[held.index()] = Some(Instant::now());
                }
                if key.kind == KeyEventKind::Press && is_rotate_key(key.code) {
                    self.rotate_pending = true;
                }
            }
            KeyEventKind::Release => {
                if let Some(held) = held_key_for(key.code) {
                    self.last_seen[held.index()] = None;
                }
            }
        }
    }

    /// Expire holds that have gone stale (no release events seen).
    pub fn tick(&mut self) {
        let now = Instant::now();
        for slot in &mut self.last_seen {
            if let Some(seen) = *slot {
                if now.duration_since(seen) > self.release_timeout {
                    *slot = None;
                }
            }
        }
    }

    /// Instantaneous held state of a gameplay key.
    pub fn is_held(&self, key: HeldKey) -> bool {
        self.last_seen[key.index()].is_some()
    }

    /// Consume the rotate press edge, if one is pending.
    pub fn take_rotate(&mut self) -> bool {
        std::mem::take(&mut self.rotate_pending)
    }

    /// Drop all held state and pending edges (screen transitions).
    pub fn reset(&mut self) {
        self.last_seen = [None; HELD_KEY_COUNT];
        self.rotate_pending = false;
    }
}

impl Default for KeyPoller {
    fn default() -> Self {
        Self::new()
    }
}

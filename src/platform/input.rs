//! Keyboard input buffering
//!
//! Key events arrive between frames; they are queued here and handed to the next
//! tick in one piece.

use crate::sim::{Direction, TickInput};

/// Steering presses waiting for the next tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: Vec<Direction>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, direction: Direction) {
        self.pending.push(direction);
    }

    /// Queue a key by its `KeyboardEvent.key` name. Returns false (and queues
    /// nothing) for keys that don't steer.
    pub fn push_key(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(direction) => {
                self.push(direction);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drain everything queued so far into a tick input
    pub fn take(&mut self) -> TickInput {
        TickInput {
            directions: std::mem::take(&mut self.pending),
        }
    }
}

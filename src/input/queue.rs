use std::collections::VecDeque;

use crate::input::KeyEvent;

/// FIFO queue of key events, drained entirely by the application between
/// frames. Unbounded within practical memory.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<KeyEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event at the back of the queue.
    pub fn push(&mut self, event: KeyEvent) {
        self.events.push_back(event);
    }

    /// Pop the oldest event, if any.
    pub fn pop(&mut self) -> Option<KeyEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drain all pending events in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = KeyEvent> + '_ {
        self.events.drain(..)
    }
}

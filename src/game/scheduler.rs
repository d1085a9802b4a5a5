//! Thread-safe FIFO of pending turn requests.
//!
//! Input handlers enqueue from any thread or task. The tick loop drains the
//! queue once per tick, before the snake moves, so every turn issued before
//! the drain shapes that tick's heading. The drain swaps the whole queue out
//! under the lock: requests that arrive while the drained batch is being
//! applied land in the fresh queue and wait for the next tick.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::action::TurnRequest;

#[derive(Debug, Default)]
pub struct TurnScheduler {
    queue: Mutex<VecDeque<TurnRequest>>,
}

impl TurnScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a turn for the next tick. Never waits on the tick itself.
    pub fn enqueue(&self, request: TurnRequest) {
        self.lock().push_back(request);
    }

    /// Take every queued request, oldest first, leaving the queue empty
    pub fn drain(&self) -> VecDeque<TurnRequest> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop pending requests without applying them
    pub fn clear(&self) {
        self.lock().clear();
    }

    // Poison is ignored: no operation leaves the deque half-written.
    fn lock(&self) -> MutexGuard<'_, VecDeque<TurnRequest>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

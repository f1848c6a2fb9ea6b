//! A shared accumulator that serializes invocations across threads.

use std::sync::{Arc, Mutex, PoisonError};

use crate::core::accumulator::Accumulate;

/// A running-total accumulator that may be invoked from several threads.
///
/// Invocations are serialized through a mutex, so concurrent callers still
/// observe one running total in a single serialization order. Cloning
/// yields another handle to the *same* accumulator; that is the one
/// sanctioned way to share state. Accumulators from separate
/// [`SharedAccumulator::new`] calls never share anything.
///
/// Overflow wraps, matching
/// [`Accumulator`](crate::core::accumulator::Accumulator).
#[derive(Debug, Clone, Default)]
pub struct SharedAccumulator {
    total: Arc<Mutex<i64>>,
}

impl SharedAccumulator {
    /// Create a shared accumulator whose total starts at `initial`.
    pub fn new(initial: i64) -> Self {
        Self {
            total: Arc::new(Mutex::new(initial)),
        }
    }

    /// Add `delta` to the total and return the new total.
    ///
    /// Takes `&self`: the lock provides the exclusivity that `&mut self`
    /// provides for the owned accumulator.
    pub fn invoke(&self, delta: i64) -> i64 {
        // A poisoned lock still holds a valid total: the update below is a
        // single store and is never observable half-applied.
        let mut total = self.total.lock().unwrap_or_else(PoisonError::into_inner);
        *total = total.wrapping_add(delta);
        *total
    }
}

impl Accumulate for SharedAccumulator {
    fn invoke(&mut self, delta: i64) -> i64 {
        SharedAccumulator::invoke(self, delta)
    }
}

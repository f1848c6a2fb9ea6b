//! Owned running-total accumulators and the invocation seam.

/// A callable unit owning private state that persists across invocations.
///
/// Implementors guarantee isolation: driving one unit never changes what
/// another unit returns, regardless of how either was created.
pub trait Accumulate {
    /// Add `delta` to the unit's private total and return the new total.
    fn invoke(&mut self, delta: i64) -> i64;
}

/// A running-total accumulator whose state is exclusive to this instance.
///
/// The total is private: it can be read or changed only through
/// [`invoke`](Accumulator::invoke), and `invoke(0)` returns the current
/// total without changing it. Two accumulators never share state, even
/// when created with the same starting value.
///
/// Overflow wraps (`i64::wrapping_add`), so the total always equals the
/// starting value plus every delta applied so far, modulo 2^64. The same
/// policy applies to every accumulating type in this crate.
#[derive(Debug, Default)]
pub struct Accumulator {
    total: i64,
}

impl Accumulator {
    /// Create an accumulator whose total starts at `initial`.
    ///
    /// `Accumulator::default()` starts at zero.
    pub fn new(initial: i64) -> Self {
        Self { total: initial }
    }

    /// Add `delta` to the total and return the new total.
    ///
    /// Sequential calls observe a running total in call order. Wraps on
    /// overflow; see the type docs.
    pub fn invoke(&mut self, delta: i64) -> i64 {
        self.total = self.total.wrapping_add(delta);
        self.total
    }

    /// Convert into closure form: an `FnMut(i64) -> i64` owning this
    /// accumulator.
    ///
    /// The accumulator moves into the returned closure, so its state lives
    /// on there and is dropped with the closure. No state outside the
    /// closure is captured.
    pub fn into_fn(mut self) -> impl FnMut(i64) -> i64 {
        move |delta| self.invoke(delta)
    }
}

impl Accumulate for Accumulator {
    fn invoke(&mut self, delta: i64) -> i64 {
        Accumulator::invoke(self, delta)
    }
}

/// Drive `unit` through `deltas` in order, recording each new total.
pub fn running_totals<A: Accumulate>(unit: &mut A, deltas: &[i64]) -> Vec<i64> {
    deltas.iter().map(|&delta| unit.invoke(delta)).collect()
}

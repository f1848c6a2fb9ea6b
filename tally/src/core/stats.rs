//! Streaming min/max/sum statistics over observed values.

/// Aggregate statistics over every value observed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Smallest value observed.
    pub min: i64,
    /// Largest value observed.
    pub max: i64,
    /// Sum of observed values; wraps on overflow like
    /// [`Accumulator`](super::accumulator::Accumulator).
    pub sum: i64,
    /// Number of values observed.
    pub count: u64,
}

/// A statistics accumulator that folds values in one at a time.
///
/// Like [`Accumulator`](super::accumulator::Accumulator), each `Stats`
/// owns its state exclusively; separate instances never interfere. An
/// instance that has observed nothing has no summary ([`Stats::summary`]
/// returns `None`) rather than a sentinel value.
#[derive(Debug, Default)]
pub struct Stats {
    inner: Option<Summary>,
}

impl Stats {
    /// Create a statistics accumulator that has observed nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one value into the running min/max/sum/count.
    pub fn observe(&mut self, value: i64) {
        match &mut self.inner {
            Some(summary) => {
                summary.min = summary.min.min(value);
                summary.max = summary.max.max(value);
                summary.sum = summary.sum.wrapping_add(value);
                summary.count += 1;
            }
            None => {
                self.inner = Some(Summary {
                    min: value,
                    max: value,
                    sum: value,
                    count: 1,
                });
            }
        }
    }

    /// Current summary, or `None` when nothing has been observed.
    pub fn summary(&self) -> Option<Summary> {
        self.inner
    }
}

/// Fold a slice through a fresh [`Stats`]; `None` for an empty slice.
pub fn summarize(values: &[i64]) -> Option<Summary> {
    let mut stats = Stats::new();
    for &value in values {
        stats.observe(value);
    }
    stats.summary()
}

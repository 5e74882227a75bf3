//! Accumulate-to-threshold timer.
//!
//! [`Counter`] is the one timing primitive in the runtime: feed it frame
//! deltas and it reports when the accumulated value reaches a threshold.
//! Components embed it by value wherever they need a cadence or a lifetime
//! (asteroid spawn interval, asteroid lifespan).

/// A saturating count-up timer: accumulates toward `max` and signals when it
/// gets there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Counter {
    value: f32,
    max: f32,
}

impl Counter {
    /// A counter from 0 toward `max`.
    pub fn new(max: f32) -> Self {
        Self::starting_at(0.0, max)
    }

    /// A counter with an explicit starting value.
    pub fn starting_at(value: f32, max: f32) -> Self {
        Self { value, max }
    }

    /// Add `delta` and report whether the threshold has been reached.
    ///
    /// Returns `true` on the call that makes the accumulated value reach
    /// `max`, and on every call after that until [`reset`](Self::reset). The
    /// value saturates at `max`.
    pub fn advance(&mut self, delta: f32) -> bool {
        self.value = (self.value + delta).min(self.max);
        self.is_done()
    }

    /// Whether the accumulated value has reached the threshold.
    pub fn is_done(&self) -> bool {
        self.value >= self.max
    }

    /// Set the accumulated value back to 0.
    pub fn reset(&mut self) {
        self.value = 0.0;
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn max(&self) -> f32 {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signals_on_the_delta_that_reaches_max_and_not_before() {
        let mut counter = Counter::new(1.0);
        // 0.25 is exactly representable, so four of them sum to exactly 1.0.
        assert!(!counter.advance(0.25));
        assert!(!counter.advance(0.25));
        assert!(!counter.advance(0.25));
        assert!(counter.advance(0.25));
    }

    #[test]
    fn stays_done_until_reset() {
        let mut counter = Counter::new(0.5);
        assert!(counter.advance(0.5));
        assert!(counter.advance(0.0));
        assert!(counter.is_done());

        counter.reset();
        assert!(!counter.is_done());
        assert_eq!(counter.value(), 0.0);
    }

    #[test]
    fn saturates_at_max() {
        let mut counter = Counter::new(2.0);
        counter.advance(100.0);
        assert_eq!(counter.value(), 2.0);
    }

    #[test]
    fn starting_value_counts_toward_the_threshold() {
        let mut counter = Counter::starting_at(0.75, 1.0);
        assert!(counter.advance(0.25));
    }
}

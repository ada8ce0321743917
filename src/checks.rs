//! Comparison counting for search analysis.
//!
//! Every search variant reports how many element comparisons it performed by
//! ticking a caller-owned [`Checks`] counter. The counter is pure
//! instrumentation: it never influences which comparisons a variant makes,
//! and a variant that returns without touching any element leaves it
//! untouched. Callers reset it between measured batches.

/// Caller-owned element-comparison counter.
///
/// Passed `&mut` into every search call so that independent query streams
/// (and independent threads) count independently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Checks {
    count: u64,
}

impl Checks {
    /// A fresh counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one element comparison.
    #[inline]
    pub(crate) fn tick(&mut self) {
        self.count += 1;
    }

    /// Comparisons recorded since construction or the last reset.
    pub fn total(&self) -> u64 {
        self.count
    }

    /// Resets the counter to zero.
    pub fn reset(&mut self) {
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_resets() {
        let mut checks = Checks::new();
        assert_eq!(checks.total(), 0);
        checks.tick();
        checks.tick();
        assert_eq!(checks.total(), 2);
        checks.reset();
        assert_eq!(checks.total(), 0);
    }
}

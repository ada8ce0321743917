//! Locality-seeded search for sequential access patterns.
//!
//! When successive lookups land near each other (cursor-style access, merge
//! joins, galloping scans), the previous result is a better starting
//! estimate than any midpoint. [`AdaptiveSearch`] remembers where the last
//! call narrowed to and starts the next call's exponential probe there,
//! falling back to a plain monobound search whenever the drift between
//! consecutive results says the locality assumption has broken down.
//!
//! The state only ever changes where the search *starts*; the result of
//! every call is identical to [`monobound_binary_search`] on the same
//! input, regardless of history.
//!
//! [`monobound_binary_search`]: crate::monobound_binary_search

use crate::Checks;

/// Initial exponential-probe stride away from the remembered position.
pub const ADAPTIVE_STRIDE: usize = 32;

/// Drift at or above which the remembered position is not trusted.
pub const BALANCE_LIMIT: usize = 32;

/// Array length at or below which seeding is not worth the setup.
pub const SMALL_ARRAY_CUTOFF: usize = 64;

/// Cross-call locality state for [`AdaptiveSearch::search`].
///
/// One instance per query stream. Sharing an instance across unrelated
/// streams (or threads) is safe for correctness but destroys the locality
/// signal the state exists to capture.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdaptiveSearch {
    last_pos: usize,
    balance: usize,
}

impl AdaptiveSearch {
    /// Fresh state: no position hint, zero drift.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower bound the previous call narrowed to.
    pub fn last_pos(&self) -> usize {
        self.last_pos
    }

    /// Absolute drift between the last two narrowed positions.
    pub fn balance(&self) -> usize {
        self.balance
    }

    /// Looks up `key`, seeding from the previous call's position when the
    /// drift history says consecutive queries are spatially close.
    ///
    /// Updates the state on every call, hit or miss.
    pub fn search(&mut self, values: &[i32], key: i32, checks: &mut Checks) -> Option<usize> {
        let mut bot;
        let mut top;

        // The out-of-range check covers reuse of one state across slices of
        // different lengths; a stale hint past the end is just broken
        // locality.
        if self.balance >= BALANCE_LIMIT
            || values.len() <= SMALL_ARRAY_CUTOFF
            || self.last_pos >= values.len()
        {
            bot = 0;
            top = values.len();
        } else {
            bot = self.last_pos;
            top = ADAPTIVE_STRIDE;

            checks.tick();
            if key >= values[bot] {
                loop {
                    if bot + top >= values.len() {
                        top = values.len() - bot;
                        break;
                    }
                    bot += top;

                    checks.tick();
                    if key < values[bot] {
                        bot -= top;
                        break;
                    }
                    top *= 2;
                }
            } else {
                loop {
                    if bot < top {
                        top = bot;
                        bot = 0;
                        break;
                    }
                    bot -= top;

                    checks.tick();
                    if key >= values[bot] {
                        break;
                    }
                    top *= 2;
                }
            }
        }

        while top > 3 {
            let mid = top / 2;

            checks.tick();
            if key >= values[bot + mid] {
                bot += mid;
            }
            top -= mid;
        }

        self.balance = self.last_pos.abs_diff(bot);
        self.last_pos = bot;

        while top > 0 {
            top -= 1;
            checks.tick();
            if key == values[bot + top] {
                return Some(bot + top);
            }
        }
        None
    }
}

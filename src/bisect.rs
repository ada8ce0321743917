//! Bisection variants over sorted arrays.
//!
//! All six variants narrow a half-open candidate window `[bot, bot + top)`
//! with the one-sided predicate `key >= values[probe]`: a "not less" outcome
//! moves the lower bound up, anything else only shrinks the window. Because
//! the probe element is never excluded on the "not less" side, no variant
//! needs the `mid ± 1` adjustments of the textbook formulation, and most can
//! drop the upper bound entirely and track only a window length.
//!
//! # Strategies
//!
//! | Function | Strategy | Best For |
//! |----------|----------|----------|
//! | [`standard_binary_search`] | Textbook two-bound loop | Baseline, clarity |
//! | [`boundless_binary_search`] | Lower bound + shrinking length | Fewer bound updates |
//! | [`doubletapped_binary_search`] | Boundless + 2-wide linear tail | Removing tail loop control |
//! | [`monobound_binary_search`] | Simplified length halving | Random queries |
//! | [`tripletapped_binary_search`] | Monobound + 3-wide linear tail | Small to medium arrays |
//! | [`monobound_quaternary_search`] | Quarter-stride narrowing | Large arrays |
//!
//! Every variant ticks the [`Checks`] counter exactly once per element
//! comparison, so equal-length runs expose the comparison-count trade-offs
//! directly.
//!
//! Duplicates are allowed; when the key occurs more than once the returned
//! index is some matching position, not necessarily the first or last.

use crate::Checks;

/// Window size below which [`monobound_quaternary_search`] stops taking
/// quarter strides and reverts to binary narrowing.
pub const QUATERNARY_CUTOFF: usize = 256;

/// The standard binary search from text books.
///
/// Keeps both bounds. The midpoint is biased toward the upper half
/// (`top - (top - bot) / 2`) so the loop terminates when `top - bot == 1`.
pub fn standard_binary_search(values: &[i32], key: i32, checks: &mut Checks) -> Option<usize> {
    if values.is_empty() {
        return None;
    }

    let mut bot = 0usize;
    let mut top = values.len() - 1;

    while bot < top {
        // Biased up, so mid >= bot + 1 and mid - 1 cannot underflow.
        let mid = top - (top - bot) / 2;

        checks.tick();
        if key < values[mid] {
            top = mid - 1;
        } else {
            bot = mid;
        }
    }

    checks.tick();
    if key == values[top] {
        return Some(top);
    }
    None
}

/// Boundless binary search: same check count as the standard search, faster
/// loop body.
///
/// Tracks a lower bound and a window length `mid`; the upper bound is
/// implicit. The `mid += 1` before halving rounds the surviving upper half
/// up, keeping the probe element inside the window after a "not less"
/// outcome.
pub fn boundless_binary_search(values: &[i32], key: i32, checks: &mut Checks) -> Option<usize> {
    if values.is_empty() {
        return None;
    }

    let mut bot = 0usize;
    let mut mid = values.len();

    while mid > 1 {
        checks.tick();
        let half = mid / 2;
        if key >= values[bot + half] {
            bot += half;
            mid += 1;
        }
        mid /= 2;
    }

    checks.tick();
    if key == values[bot] {
        return Some(bot);
    }
    None
}

/// Boundless narrowing stopped one step early, finished by a two-wide tail.
///
/// The unrolled tail trades up to one extra comparison for dropping a full
/// narrowing iteration's loop control. Handles the empty slice without a
/// guard: both loops run zero times.
pub fn doubletapped_binary_search(values: &[i32], key: i32, checks: &mut Checks) -> Option<usize> {
    let mut bot = 0usize;
    let mut mid = values.len();

    while mid > 2 {
        checks.tick();
        let half = mid / 2;
        if key >= values[bot + half] {
            bot += half;
            mid += 1;
        }
        mid /= 2;
    }

    while mid > 0 {
        mid -= 1;
        checks.tick();
        if key == values[bot + mid] {
            return Some(bot + mid);
        }
    }
    None
}

/// Monobound binary search: more checks than boundless, better throughput.
///
/// Halves a window length `top` without the boundless rounding fix-up; the
/// probe offset is recomputed from the length each iteration, which keeps
/// the loop body branch-light.
pub fn monobound_binary_search(values: &[i32], key: i32, checks: &mut Checks) -> Option<usize> {
    let mut bot = 0usize;
    let mut top = values.len();

    while top > 1 {
        let mid = top / 2;

        checks.tick();
        if key >= values[bot + mid] {
            bot += mid;
        }
        top -= mid;
    }

    if top > 0 {
        checks.tick();
        if key == values[bot] {
            return Some(bot);
        }
    }
    None
}

/// Monobound narrowing stopped at a three-wide window, finished by a short
/// reverse linear tail.
pub fn tripletapped_binary_search(values: &[i32], key: i32, checks: &mut Checks) -> Option<usize> {
    let mut bot = 0usize;
    let mut top = values.len();

    while top > 3 {
        let mid = top / 2;

        checks.tick();
        if key >= values[bot + mid] {
            bot += mid;
        }
        top -= mid;
    }

    while top > 0 {
        top -= 1;
        checks.tick();
        if key == values[bot + top] {
            return Some(bot + top);
        }
    }
    None
}

/// Quarter-stride narrowing for large arrays.
///
/// While the window is at least [`QUATERNARY_CUTOFF`] wide, each iteration
/// keeps one quarter of it using up to two comparisons: first against the
/// half-way element, then against the quarter boundary of the surviving
/// half. The comparison order matters — the half-way probe is resolved
/// before either quarter probe, which is what buys the reduced iteration
/// count. Below the cutoff this is [`tripletapped_binary_search`].
pub fn monobound_quaternary_search(values: &[i32], key: i32, checks: &mut Checks) -> Option<usize> {
    let mut bot = 0usize;
    let mut top = values.len();

    while top >= QUATERNARY_CUTOFF {
        let mid = top / 4;
        top -= mid * 3;

        checks.tick();
        if key < values[bot + mid * 2] {
            checks.tick();
            if key >= values[bot + mid] {
                bot += mid;
            }
        } else {
            bot += mid * 2;

            checks.tick();
            if key >= values[bot + mid] {
                bot += mid;
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

    while top > 0 {
        top -= 1;
        checks.tick();
        if key == values[bot + top] {
            return Some(bot + top);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    type SearchFn = fn(&[i32], i32, &mut Checks) -> Option<usize>;

    const VARIANTS: &[(&str, SearchFn)] = &[
        ("standard", standard_binary_search),
        ("boundless", boundless_binary_search),
        ("doubletapped", doubletapped_binary_search),
        ("monobound", monobound_binary_search),
        ("tripletapped", tripletapped_binary_search),
        ("quaternary", monobound_quaternary_search),
    ];

    #[test]
    fn empty_is_a_miss_without_checks() {
        for &(name, func) in VARIANTS {
            let mut checks = Checks::new();
            assert_eq!(func(&[], 42, &mut checks), None, "{name}");
            assert_eq!(checks.total(), 0, "{name}");
        }
    }

    #[test]
    fn known_cases() {
        let values = [1, 3, 3, 7, 9, 15];
        for &(name, func) in VARIANTS {
            let mut checks = Checks::new();
            assert_eq!(func(&values, 7, &mut checks), Some(3), "{name}");
            assert_eq!(func(&values, 15, &mut checks), Some(5), "{name}");
            assert_eq!(func(&values, 1, &mut checks), Some(0), "{name}");
            assert_eq!(func(&values, 0, &mut checks), None, "{name}");
            assert_eq!(func(&values, 8, &mut checks), None, "{name}");
            assert_eq!(func(&values, 16, &mut checks), None, "{name}");

            let hit = func(&values, 3, &mut checks);
            assert!(hit == Some(1) || hit == Some(2), "{name}: {hit:?}");
        }
    }

    #[test]
    fn single_element() {
        for &(name, func) in VARIANTS {
            let mut checks = Checks::new();
            assert_eq!(func(&[5], 5, &mut checks), Some(0), "{name}");
            assert_eq!(func(&[5], 4, &mut checks), None, "{name}");
            assert_eq!(func(&[5], 6, &mut checks), None, "{name}");
        }
    }

    #[test]
    fn quaternary_engages_wide_stride() {
        // Large enough to exercise the quarter-stride loop several times.
        let values: Vec<i32> = (0..4096).map(|i| i * 2).collect();
        let mut checks = Checks::new();
        for i in 0..values.len() {
            assert_eq!(
                monobound_quaternary_search(&values, values[i], &mut checks),
                Some(i)
            );
        }
        assert_eq!(monobound_quaternary_search(&values, 5, &mut checks), None);
    }

    #[test]
    fn every_check_is_an_element_comparison() {
        // A hit on a 1024-element array needs at most ~2*log2(n) checks for
        // any of these variants; the counter must not run away.
        let values: Vec<i32> = (0..1024).collect();
        for &(name, func) in VARIANTS {
            let mut checks = Checks::new();
            func(&values, 700, &mut checks);
            assert!(checks.total() >= 1, "{name}");
            assert!(checks.total() <= 24, "{name}: {}", checks.total());
        }
    }

    proptest! {
        #[test]
        fn variants_match_std(mut values in prop::collection::vec(-1000i32..1000, 0..300), key in -1100i32..1100) {
            values.sort_unstable();

            let expected_hit = values.binary_search(&key).is_ok();
            for &(name, func) in VARIANTS {
                let mut checks = Checks::new();
                match func(&values, key, &mut checks) {
                    Some(idx) => {
                        prop_assert!(expected_hit, "{}: unexpected hit at {}", name, idx);
                        prop_assert_eq!(values[idx], key, "{}", name);
                    }
                    None => prop_assert!(!expected_hit, "{}: unexpected miss", name),
                }
            }
        }

        #[test]
        fn variants_agree_on_large_arrays(len in 1usize..5000, seed in any::<u64>(), key in any::<i32>()) {
            // Stepped values so the quaternary wide stride gets exercised.
            let step = (seed % 3 + 1) as i32;
            let values: Vec<i32> = (0..len as i32).map(|i| i.saturating_mul(step)).collect();

            let expected_hit = values.binary_search(&key).is_ok();
            for &(name, func) in VARIANTS {
                let mut checks = Checks::new();
                let hit = func(&values, key, &mut checks).is_some();
                prop_assert_eq!(hit, expected_hit, "{}", name);
            }
        }
    }
}

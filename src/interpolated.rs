//! Interpolation-seeded monobound search.
//!
//! Instead of probing the midpoint, the first candidate position is a linear
//! interpolation of the key between the smallest and largest element. On
//! approximately uniform data the estimate lands within a few dozen slots of
//! the true position, so the residual search is an exponential probe away
//! from the estimate followed by a short monobound narrowing — logarithmic
//! in the estimate error rather than in the array length.
//!
//! On skewed distributions the estimate degrades gracefully: the probe still
//! brackets the key, it just walks further first.

use crate::Checks;

/// Initial exponential-probe stride away from the interpolated estimate.
pub const INTERPOLATION_STRIDE: usize = 64;

/// Interpolated search over an ascending slice.
///
/// Resolves keys outside `[first, last]` before estimating, so the
/// interpolation runs only on a non-degenerate value span.
pub fn monobound_interpolated_search(
    values: &[i32],
    key: i32,
    checks: &mut Checks,
) -> Option<usize> {
    if values.is_empty() {
        return None;
    }

    checks.tick();
    if key < values[0] {
        return None;
    }

    let mut bot = values.len() - 1;

    checks.tick();
    if key >= values[bot] {
        checks.tick();
        if values[bot] == key {
            return Some(bot);
        }
        return None;
    }

    let min = values[0];
    let max = values[bot];

    // key is in [min, max) here, so the span cannot be zero; keep the guard
    // anyway so the division's precondition is local.
    if max == min {
        return None;
    }

    bot = interpolate(bot, key, min, max);

    let mut top = INTERPOLATION_STRIDE;

    checks.tick();
    if key >= values[bot] {
        // Probe upward with doubling strides until the key is bracketed or
        // the slice ends.
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
        // Probe downward.
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

/// Linear position estimate for `key` within `[min, max]` over `last + 1`
/// slots. Widened to i64/f64 so `key - min` cannot overflow.
#[inline]
fn interpolate(last: usize, key: i32, min: i32, max: i32) -> usize {
    let span = (max as i64 - min as i64) as f64;
    let offset = (key as i64 - min as i64) as f64;
    (last as f64 * offset / span) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monobound_binary_search;
    use proptest::prelude::*;

    #[test]
    fn empty_is_a_miss_without_checks() {
        let mut checks = Checks::new();
        assert_eq!(monobound_interpolated_search(&[], 42, &mut checks), None);
        assert_eq!(checks.total(), 0);
    }

    #[test]
    fn known_cases() {
        let values = [1, 3, 3, 7, 9, 15];
        let mut checks = Checks::new();
        assert_eq!(monobound_interpolated_search(&values, 7, &mut checks), Some(3));
        assert_eq!(monobound_interpolated_search(&values, 15, &mut checks), Some(5));
        assert_eq!(monobound_interpolated_search(&values, 1, &mut checks), Some(0));
        assert_eq!(monobound_interpolated_search(&values, 0, &mut checks), None);
        assert_eq!(monobound_interpolated_search(&values, 16, &mut checks), None);
        assert_eq!(monobound_interpolated_search(&values, 8, &mut checks), None);
    }

    #[test]
    fn all_equal_elements() {
        let values = [9; 100];
        let mut checks = Checks::new();
        assert_eq!(monobound_interpolated_search(&values, 9, &mut checks), Some(99));
        assert_eq!(monobound_interpolated_search(&values, 8, &mut checks), None);
        assert_eq!(monobound_interpolated_search(&values, 10, &mut checks), None);
    }

    #[test]
    fn extreme_value_span_does_not_overflow() {
        let values = [i32::MIN, -5, 0, 5, i32::MAX];
        let mut checks = Checks::new();
        for (i, &v) in values.iter().enumerate() {
            assert_eq!(monobound_interpolated_search(&values, v, &mut checks), Some(i));
        }
        assert_eq!(monobound_interpolated_search(&values, 1, &mut checks), None);
    }

    #[test]
    fn skewed_distribution_still_hits() {
        // First half dense, second half sparse: the estimate is badly off
        // for most keys, the exponential probe has to cover the error.
        let mut values: Vec<i32> = (0..500).collect();
        values.extend((0..500).map(|i| 1000 + i * 997));
        for (i, &v) in values.iter().enumerate() {
            let mut checks = Checks::new();
            assert_eq!(monobound_interpolated_search(&values, v, &mut checks), Some(i), "i={i}");
        }
    }

    proptest! {
        #[test]
        fn matches_monobound(mut values in prop::collection::vec(any::<i32>(), 0..400), key in any::<i32>()) {
            values.sort_unstable();

            let mut checks = Checks::new();
            let expected = monobound_binary_search(&values, key, &mut checks).is_some();
            match monobound_interpolated_search(&values, key, &mut checks) {
                Some(idx) => {
                    prop_assert!(expected);
                    prop_assert_eq!(values[idx], key);
                }
                None => prop_assert!(!expected),
            }
        }
    }
}

//! Linear scan baselines for the search benchmarks.
//!
//! Neither scan exploits the sorted order for narrowing; they exist as the
//! floor every bisection variant is measured against on small arrays.

use crate::Checks;

/// Backward linear scan.
///
/// Scanning from the top makes the scan stable: with duplicates it returns
/// the highest matching index. One check per element visited.
pub fn linear_search(values: &[i32], key: i32, checks: &mut Checks) -> Option<usize> {
    let mut top = values.len();
    while top > 0 {
        top -= 1;
        checks.tick();
        if key == values[top] {
            return Some(top);
        }
    }
    None
}

/// Backward linear scan that breaks at the first element not above the key.
///
/// Once `key >= values[top]` the remaining prefix is all `<= key`, so a
/// single equality test settles the lookup. Faster than [`linear_search`]
/// on larger arrays when the key distribution is uniform.
pub fn breaking_linear_search(values: &[i32], key: i32, checks: &mut Checks) -> Option<usize> {
    if values.is_empty() {
        return None;
    }

    let mut top = values.len() - 1;
    while top > 0 {
        checks.tick();
        if key >= values[top] {
            break;
        }
        top -= 1;
    }

    checks.tick();
    if key == values[top] {
        return Some(top);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_is_a_miss_without_checks() {
        let mut checks = Checks::new();
        assert_eq!(linear_search(&[], 5, &mut checks), None);
        assert_eq!(breaking_linear_search(&[], 5, &mut checks), None);
        assert_eq!(checks.total(), 0);
    }

    #[test]
    fn linear_returns_highest_duplicate() {
        let values = [1, 3, 3, 3, 7];
        let mut checks = Checks::new();
        assert_eq!(linear_search(&values, 3, &mut checks), Some(3));
    }

    #[test]
    fn breaking_linear_known_cases() {
        let values = [1, 3, 3, 7, 9, 15];
        let mut checks = Checks::new();
        assert_eq!(breaking_linear_search(&values, 7, &mut checks), Some(3));
        assert_eq!(breaking_linear_search(&values, 0, &mut checks), None);
        assert_eq!(breaking_linear_search(&values, 15, &mut checks), Some(5));
        assert_eq!(breaking_linear_search(&values, 16, &mut checks), None);
    }

    #[test]
    fn linear_counts_one_check_per_element_on_miss() {
        let values = [2, 4, 6, 8];
        let mut checks = Checks::new();
        assert_eq!(linear_search(&values, 5, &mut checks), None);
        assert_eq!(checks.total(), 4);
    }

    proptest! {
        #[test]
        fn scans_agree_with_std(mut values in prop::collection::vec(-100i32..100, 0..64), key in -110i32..110) {
            values.sort_unstable();

            let expected_hit = values.binary_search(&key).is_ok();
            let mut checks = Checks::new();
            let scans: [fn(&[i32], i32, &mut Checks) -> Option<usize>; 2] =
                [linear_search, breaking_linear_search];
            for func in scans {
                match func(&values, key, &mut checks) {
                    Some(idx) => {
                        prop_assert!(expected_hit);
                        prop_assert_eq!(values[idx], key);
                    }
                    None => prop_assert!(!expected_hit),
                }
            }
        }
    }
}

//! Monobound search over an arbitrary ordering.
//!
//! This is the `bsearch`-shaped entry point: element type and ordering come
//! from the caller, the element is returned by reference. The comparator is
//! assumed expensive (not inlinable, possibly reading through indirection),
//! which changes the trade-off from the numeric variants: equality is
//! resolved inline on every probe instead of being deferred to a final
//! pass, spending one three-way call per narrowing decision to terminate
//! as early as possible.

use std::cmp::Ordering;

use crate::Checks;

/// Monobound lookup with a caller-supplied three-way comparison.
///
/// `cmp(key, element)` orders the key against a slice element; `items` must
/// be sorted ascending under that same ordering. Returns a reference to some
/// matching element, or `None`. Ticks `checks` once per comparator call.
pub fn monobound_search_by<'a, K, T, F>(
    key: &K,
    items: &'a [T],
    mut cmp: F,
    checks: &mut Checks,
) -> Option<&'a T>
where
    F: FnMut(&K, &T) -> Ordering,
{
    let mut base = 0usize;
    let mut top = items.len();
    let mut mid = top;

    while mid > 0 {
        mid = top / 2;
        let probe = base + mid;

        checks.tick();
        match cmp(key, &items[probe]) {
            Ordering::Equal => return Some(&items[probe]),
            Ordering::Greater => base = probe,
            Ordering::Less => {}
        }
        top -= mid;
    }
    None
}

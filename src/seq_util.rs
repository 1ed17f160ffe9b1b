//! Small sequence primitives the sorts are built from.
//!
//! Index arguments are preconditions, violating them is a bug in the caller. They are checked
//! with `debug_assert!` and otherwise fall through to the regular slice bounds checks.

use std::cmp::Ordering;

/// Exchanges `v[i]` and `v[j]`, every other position stays untouched.
#[inline]
pub fn swap<T>(v: &mut [T], i: usize, j: usize) {
    debug_assert!(i < v.len() && j < v.len());

    v.swap(i, j);
}

/// Returns the index of the smallest element in `v[a..b]`. On ties the leftmost one wins, a later
/// element only replaces the current minimum if it compares strictly `Less`.
///
/// Requires `a < b <= v.len()`.
pub fn min_index<T, F>(v: &[T], a: usize, b: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(a < b && b <= v.len());

    let mut min_idx = a;
    for i in (a + 1)..b {
        if compare(&v[i], &v[min_idx]) == Ordering::Less {
            min_idx = i;
        }
    }

    min_idx
}

/// Moves `v[i]` into its place inside `v[..=i]`, assuming `v[..i]` is already sorted.
///
/// Elements of the prefix move one slot to the right as long as they are strictly greater than
/// `v[i]`, so equal elements never pass each other.
pub fn insert<T, F>(v: &mut [T], i: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(i < v.len());

    // v[i] stays put until the final rotate, so it can be compared in place.
    let mut k = i;
    while k > 0 && compare(&v[i], &v[k - 1]) == Ordering::Less {
        k -= 1;
    }

    v[k..=i].rotate_right(1);
}

/// Splits `v` at `len / 2`. For odd lengths the extra element ends up in the second half, so
/// `right.len() - left.len() == v.len() % 2`.
#[inline]
pub fn split<T>(mut v: Vec<T>) -> (Vec<T>, Vec<T>) {
    let right = v.split_off(v.len() / 2);

    (v, right)
}

/// Stable partition of `v` around `pivot`.
///
/// Returns `(le, gt)` where `le` holds every element with `compare(elem, pivot) != Greater` and
/// `gt` the rest. Both keep the relative order the elements had in `v`.
pub fn partition<T, F>(pivot: &T, v: Vec<T>, compare: &mut F) -> (Vec<T>, Vec<T>)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut le = Vec::with_capacity(v.len());
    let mut gt = Vec::new();

    for elem in v {
        if compare(&elem, pivot) == Ordering::Greater {
            gt.push(elem);
        } else {
            le.push(elem);
        }
    }

    (le, gt)
}

/// Merges the sorted runs `left` and `right` into one sorted `Vec`.
///
/// When the fronts compare `Equal` the element from `left` is taken first, which keeps the merge
/// stable.
pub fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) == Ordering::Greater,
            _ => break,
        };

        if take_right {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }

    // At most one of them still has elements.
    merged.extend(left);
    merged.extend(right);

    merged
}

/// Returns `true` if no adjacent pair of `v` compares `Greater`.
pub fn is_sorted<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    v.windows(2)
        .all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}

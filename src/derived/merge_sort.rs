//! Top-down merge sort.
//!
//! Stable, O(n log n) comparisons in every case and O(n) extra memory. The recursion depth is
//! log2(n), only the merge is iterative.

use std::cmp::Ordering;

use crate::compare::compare;
use crate::seq_util::{merge, split};

derived_sort_impl!("merge_sort_stable");

#[inline]
pub fn sorted<T>(v: &[T]) -> Vec<T>
where
    T: PartialOrd + Clone,
{
    merge_sort(v.to_vec(), &mut compare::<T>)
}

#[inline]
pub fn sorted_by<T, F>(v: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v.to_vec(), &mut compare)
}

/// Same as [`sorted_by`] but consumes `v`, no element is cloned.
#[inline]
pub fn into_sorted_by<T, F>(v: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut compare)
}

fn merge_sort<T, F>(v: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() < 2 {
        // These inputs are always sorted.
        return v;
    }

    let (left, right) = split(v);

    let left = merge_sort(left, compare);
    let right = merge_sort(right, compare);

    merge(left, right, compare)
}

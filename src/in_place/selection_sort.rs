//! Selection sort, repeatedly swaps the minimum of the unsorted suffix to its front.
//!
//! O(n²) comparisons and at most n - 1 swaps. The swap can carry an element past its equals, so
//! this sort is not stable.

use std::cmp::Ordering;

use crate::compare::compare;
use crate::seq_util::{min_index, swap};

in_place_sort_impl!("selection_sort_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: PartialOrd,
{
    selection_sort(v, &mut compare::<T>);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut compare);
}

fn selection_sort<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();

    if len < 2 {
        return;
    }

    // v[..i] holds the i smallest elements in order.
    for i in 0..(len - 1) {
        let min_idx = min_index(v, i, len, compare);
        swap(v, i, min_idx);
    }
}

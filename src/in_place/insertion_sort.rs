use std::cmp::Ordering;

use crate::compare::compare;
use crate::seq_util::insert;

in_place_sort_impl!("insertion_sort_stable");

/// Sorts `v` in ascending natural order.
///
/// Stable, O(n²) in the worst case and O(n) if `v` is already sorted.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: PartialOrd,
{
    insertion_sort(v, &mut compare::<T>);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut compare);
}

fn insertion_sort<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // v[..1] is trivially sorted, after inserting v[i] so is v[..=i].
    for i in 1..v.len() {
        insert(v, i, compare);
    }
}

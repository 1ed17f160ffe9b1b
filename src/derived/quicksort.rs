//! Out-of-place quicksort with the trailing element as pivot.
//!
//! The partition is stable and everything that compares `Equal` to the pivot lands left of it.
//! The pivot itself was the last of those in the input, so the whole sort is stable. With a fixed
//! trailing pivot, already sorted input degrades to O(n²).

use std::cmp::Ordering;

use crate::compare::compare;
use crate::seq_util::partition;

derived_sort_impl!("quicksort_stable");

#[inline]
pub fn sorted<T>(v: &[T]) -> Vec<T>
where
    T: PartialOrd + Clone,
{
    quicksort(v.to_vec(), &mut compare::<T>)
}

#[inline]
pub fn sorted_by<T, F>(v: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v.to_vec(), &mut compare)
}

/// Same as [`sorted_by`] but consumes `v`, no element is cloned.
#[inline]
pub fn into_sorted_by<T, F>(v: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut compare)
}

/// Pending work, processed last in first out.
enum Task<T> {
    Sort(Vec<T>),
    Emit(T),
}

fn quicksort<T, F>(v: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = Vec::with_capacity(v.len());

    // Sorted input makes the `le` side n - 1 long each round. Recursing on it would need n stack
    // frames, so the recursion is unrolled into this explicit stack instead.
    let mut tasks = vec![Task::Sort(v)];

    while let Some(task) = tasks.pop() {
        match task {
            Task::Emit(elem) => out.push(elem),
            Task::Sort(mut v) => {
                let pivot = match v.pop() {
                    Some(pivot) if !v.is_empty() => pivot,
                    // Zero or one element, already sorted.
                    single => {
                        out.extend(single);
                        continue;
                    }
                };

                let (le, gt) = partition(&pivot, v, compare);

                // Pushed in reverse, so `le` is emitted first, then the pivot, then `gt`.
                tasks.push(Task::Sort(gt));
                tasks.push(Task::Emit(pivot));
                tasks.push(Task::Sort(le));
            }
        }
    }

    out
}

//! Three-way comparison functions shared by all sorts.
//!
//! A comparator is any `FnMut(&T, &T) -> Ordering`. `Less`, `Equal` and `Greater` stand for
//! -1, 0 and 1 respectively, `ordering as i8` yields that numeric form.

use std::cmp::Ordering;

/// Natural ordering, derived only from `<` and `>`.
///
/// Returns `Less` if `a < b`, `Greater` if `a > b` and `Equal` otherwise. This makes it usable
/// for `PartialOrd` types such as floats, as long as the values are mutually comparable. Values
/// that are not, e.g. `NaN`, compare `Equal` to everything, which is not a strict weak ordering
/// and leaves the result order unspecified.
#[inline]
pub fn compare<T>(a: &T, b: &T) -> Ordering
where
    T: PartialOrd + ?Sized,
{
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Flips the direction of `compare`, sorting with the result yields descending order.
#[inline]
pub fn reverse<T, F>(mut compare: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| compare(b, a)
}

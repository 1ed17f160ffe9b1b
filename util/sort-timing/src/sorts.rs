//! Brings both sort families under one calling convention for the harness.

use std::cmp::Ordering;
use std::marker::PhantomData;

use classic_sorts::{DerivedSort, InPlaceSort};

/// Takes ownership of the list and hands back the sorted one. In-place sorts return the same
/// allocation, derived sorts a fresh one, neither clones elements.
pub trait Sort {
    fn name() -> String;

    fn sort_vec<T, F>(v: Vec<T>, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering;
}

pub struct InPlace<S>(PhantomData<S>);

impl<S: InPlaceSort> Sort for InPlace<S> {
    fn name() -> String {
        S::name()
    }

    #[inline]
    fn sort_vec<T, F>(mut v: Vec<T>, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        S::sort_by(&mut v, compare);
        v
    }
}

pub struct Derived<S>(PhantomData<S>);

impl<S: DerivedSort> Sort for Derived<S> {
    fn name() -> String {
        S::name()
    }

    #[inline]
    fn sort_vec<T, F>(v: Vec<T>, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        S::into_sorted_by(v, compare)
    }
}

/// The standard library stable sort, as a point of reference.
pub struct RustStd;

impl Sort for RustStd {
    fn name() -> String {
        "rust_std_stable".into()
    }

    #[inline]
    fn sort_vec<T, F>(mut v: Vec<T>, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        v.sort_by(compare);
        v
    }
}

use std::cmp::Ordering;

/// Sorts that reorder the caller's storage and allocate nothing.
pub trait InPlaceSort {
    fn name() -> String;

    fn sort<T>(v: &mut [T])
    where
        T: PartialOrd;

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

/// Sorts that leave the input untouched and produce a freshly allocated sorted `Vec`.
pub trait DerivedSort {
    fn name() -> String;

    fn sorted<T>(v: &[T]) -> Vec<T>
    where
        T: PartialOrd + Clone;

    fn sorted_by<T, F>(v: &[T], compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;

    fn into_sorted_by<T, F>(v: Vec<T>, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering;
}

macro_rules! in_place_sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl $crate::InPlaceSort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: PartialOrd,
            {
                sort(v);
            }

            #[inline]
            fn sort_by<T, F>(v: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(v, compare);
            }
        }

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(v);
            }

            #[inline]
            fn sort_by<T, F>(v: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(v, compare);
            }
        }
    };
}

macro_rules! derived_sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl $crate::DerivedSort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sorted<T>(v: &[T]) -> Vec<T>
            where
                T: PartialOrd + Clone,
            {
                sorted(v)
            }

            #[inline]
            fn sorted_by<T, F>(v: &[T], compare: F) -> Vec<T>
            where
                T: Clone,
                F: FnMut(&T, &T) -> Ordering,
            {
                sorted_by(v, compare)
            }

            #[inline]
            fn into_sorted_by<T, F>(v: Vec<T>, compare: F) -> Vec<T>
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                into_sorted_by(v, compare)
            }
        }

        // The test and bench tooling speaks in terms of `&mut [T]`, so the derived result is
        // written back over the input.
        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: Ord + Clone,
            {
                let result = sorted(v);
                v.clone_from_slice(&result);
            }

            #[inline]
            fn sort_by<T, F>(v: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> Ordering,
            {
                let result = sorted_by(v, compare);
                v.clone_from_slice(&result);
            }
        }
    };
}

pub mod compare;
pub mod seq_util;

pub mod derived;
pub mod in_place;

use std::cmp::Ordering;

/// Uniform interface the generic tests and benchmarks drive a sort implementation through.
///
/// Sorts that produce a new sequence are expected to write their result back into `v`, which is
/// why `T: Clone` is part of the contract.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}

pub mod patterns;

use std::cell::Cell;
use std::hint::black_box;
use std::time::Duration;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use classic_sorts::compare::compare;
use classic_sorts::seq_util::is_sorted;

use crate::error::HarnessError;
use crate::measure::{measure_duration, median};
use crate::sorts::Sort;

#[derive(Debug, Clone, PartialEq)]
pub struct Timing {
    /// Sum over all runs, list generation excluded.
    pub total: Duration,
    pub median: Duration,
    pub runs: usize,
    pub mean_comparisons: Option<u64>,
}

/// `lst_len` values drawn uniformly from `[0, lst_len)`. Fails if `lst_len` does not fit the
/// `u32` element type.
pub fn random_list(rng: &mut impl Rng, lst_len: usize) -> Result<Vec<u32>, HarnessError> {
    let upper = u32::try_from(lst_len).map_err(|_| HarnessError::InvalidRange {
        min: lst_len,
        max: lst_len,
        step: 1,
    })?;

    if upper == 0 {
        return Ok(Vec::new());
    }

    let dist = Uniform::new(0, upper);
    Ok((0..lst_len).map(|_| dist.sample(rng)).collect())
}

/// Generates `nb_lst` random lists of length `lst_len` and sorts each with `S`, only the sort
/// calls are timed. Every result is checked for order before it counts.
pub fn sort_many_lists<S: Sort>(
    rng: &mut impl Rng,
    lst_len: usize,
    nb_lst: usize,
    measure_comparisons: bool,
) -> Result<Timing, HarnessError> {
    let mut durations = Vec::with_capacity(nb_lst);
    let comp_count = Cell::new(0u64);

    for _ in 0..nb_lst {
        let list = random_list(rng, lst_len)?;

        let (duration, sorted) = if measure_comparisons {
            measure_duration(|| {
                S::sort_vec(black_box(list), |a, b| {
                    comp_count.set(comp_count.get() + 1);
                    compare(a, b)
                })
            })
        } else {
            measure_duration(|| S::sort_vec(black_box(list), compare::<u32>))
        };

        if sorted.len() != lst_len || !is_sorted(&sorted, compare::<u32>) {
            return Err(HarnessError::NotSorted {
                sort_name: S::name(),
                lst_len,
            });
        }

        durations.push(duration);
    }

    let total: Duration = durations.iter().sum();
    let mean_comparisons = (measure_comparisons && nb_lst > 0)
        .then(|| comp_count.get() / nb_lst as u64);

    log::debug!("{}: {nb_lst} lists of {lst_len} in {total:?}", S::name());

    Ok(Timing {
        total,
        median: median(&mut durations),
        runs: nb_lst,
        mean_comparisons,
    })
}

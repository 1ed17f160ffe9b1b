//! Wall clock measurement of a single sort invocation.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Measures the time it takes to execute the function `test_fn`.
#[inline(never)]
pub fn measure_duration<R>(test_fn: impl FnOnce() -> R) -> (Duration, R) {
    let start = Instant::now();
    let result = black_box(test_fn());
    let elapsed = start.elapsed();

    (elapsed, result)
}

/// Middle value of `durations`, the upper one of the two for even counts.
pub fn median(durations: &mut [Duration]) -> Duration {
    if durations.is_empty() {
        return Duration::ZERO;
    }

    durations.sort_unstable();
    durations[durations.len() / 2]
}

pub fn pin_thread_to_core() {
    use std::cell::Cell;
    let pin_core_id: usize = 2;

    thread_local! {static AFFINITY_ALREADY_SET: Cell<bool> = const { Cell::new(false) } }

    // Set affinity only once per thread.
    AFFINITY_ALREADY_SET.with(|affinity_already_set| {
        if !affinity_already_set.get() {
            match core_affinity::get_core_ids()
                .as_ref()
                .and_then(|ids| ids.get(pin_core_id))
            {
                Some(core_id) => {
                    core_affinity::set_for_current(*core_id);
                    log::debug!("pinned timing thread to core {}", core_id.id);
                }
                None => log::warn!("core {pin_core_id} not available, timing thread is not pinned"),
            }

            affinity_already_set.set(true);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_samples() {
        let mut samples = [5, 1, 3, 9, 7].map(Duration::from_nanos);
        assert_eq!(median(&mut samples), Duration::from_nanos(5));

        let mut samples = [4, 1, 3, 2].map(Duration::from_nanos);
        assert_eq!(median(&mut samples), Duration::from_nanos(3));

        assert_eq!(median(&mut []), Duration::ZERO);
    }

    #[test]
    fn returns_result() {
        let (_, sum) = measure_duration(|| (1..=10).sum::<u32>());
        assert_eq!(sum, 55);
    }
}

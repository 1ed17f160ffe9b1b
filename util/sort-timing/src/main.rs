mod benchmark;
mod config;
mod error;
mod measure;
mod report;
mod sorts;

use std::env;
use std::error::Error;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use classic_sorts::derived::{merge_sort, quicksort};
use classic_sorts::in_place::{insertion_sort, selection_sort};
use sort_test_tools::patterns;

use crate::benchmark::sort_many_lists;
use crate::config::Config;
use crate::error::HarnessError;
use crate::report::Report;
use crate::sorts::{Derived, InPlace, RustStd, Sort};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = env::args().skip(1).collect::<Vec<_>>();
    let config = Config::from_args_and_env(&args, |name| env::var(name).ok())?;

    // Always log the seed before doing anything to ensure reproducibility.
    // OVERRIDE_SEED is already validated by the config, `patterns` only sees it if it parses.
    let seed = match config.override_seed {
        Some(seed) => {
            info!("Seed: {seed} (OVERRIDE_SEED)");
            seed
        }
        None => {
            let seed = patterns::random_init_seed();
            info!("Seed: {seed}");
            seed
        }
    };
    info!(
        "Sorting {} lists per length, lengths {}..={} step {}",
        config.nb_lst, config.min_len, config.max_len, config.step
    );

    if config.measure_comparisons {
        warn!("MEASURE_COMP is set, timings include the comparison counting overhead");
    }

    measure::pin_thread_to_core();

    let mut report = Report::new(seed, config.nb_lst);

    run::<RustStd>(&config, seed, &mut report)?;
    run::<InPlace<selection_sort::SortImpl>>(&config, seed, &mut report)?;
    run::<InPlace<insertion_sort::SortImpl>>(&config, seed, &mut report)?;
    run::<Derived<quicksort::SortImpl>>(&config, seed, &mut report)?;
    run::<Derived<merge_sort::SortImpl>>(&config, seed, &mut report)?;

    if report.rows.is_empty() {
        warn!("SORT_FILTER matched no sort, nothing was timed");
    }

    println!("{}", report.to_table());

    if let Some(report_path) = &config.report_path {
        report.write_json(report_path)?;
        info!("Wrote report to file: {}", report_path.display());
    }

    Ok(())
}

fn run<S: Sort>(config: &Config, seed: u64, report: &mut Report) -> Result<(), HarnessError> {
    let sort_name = S::name();

    if !config.selects(&sort_name) {
        log::debug!("skipping {sort_name}");
        return Ok(());
    }

    info!("{sort_name}");

    // Same seed for every sort, so they all get to sort the same lists.
    let mut rng = StdRng::seed_from_u64(seed);

    for lst_len in config.lengths() {
        let timing =
            sort_many_lists::<S>(&mut rng, lst_len, config.nb_lst, config.measure_comparisons)?;

        info!(
            "With {lst_len} items : took {} seconds. ({} runs, median {:?})",
            timing.total.as_secs_f64(),
            timing.runs,
            timing.median
        );

        report.push(&sort_name, lst_len, &timing);
    }

    Ok(())
}

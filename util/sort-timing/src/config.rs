//! Harness configuration, positional arguments for the length range and env vars for the rest.
//!
//! ```text
//! sort-timing [min_len] [max_len] [step]
//! ```
//!
//! - `NB_LST`: number of random lists sorted per length, default 200.
//! - `SORT_FILTER`: only run sorts whose name contains this string.
//! - `REPORT_PATH`: write the results as JSON to this file.
//! - `MEASURE_COMP`: `1`/`true`/`yes`/`on` also counts comparisons, timings then include the
//!   counting overhead. `0`/`false`/`no`/`off` or unset disables it.
//! - `OVERRIDE_SEED`: fixed `u64` seed for the random lists, the same variable
//!   `sort_test_tools::patterns` reads.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::HarnessError;

const DEFAULT_MIN_LEN: usize = 100;
const DEFAULT_MAX_LEN: usize = 900;
const DEFAULT_STEP: usize = 100;
const DEFAULT_NB_LST: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub min_len: usize,
    pub max_len: usize,
    pub step: usize,
    pub nb_lst: usize,
    pub sort_filter: Option<String>,
    pub report_path: Option<PathBuf>,
    pub measure_comparisons: bool,
    pub override_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            max_len: DEFAULT_MAX_LEN,
            step: DEFAULT_STEP,
            nb_lst: DEFAULT_NB_LST,
            sort_filter: None,
            report_path: None,
            measure_comparisons: false,
            override_seed: None,
        }
    }
}

impl Config {
    /// `args` excludes the program name, `env` looks up a variable by name.
    pub fn from_args_and_env(
        args: &[String],
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, HarnessError> {
        let mut config = Self::default();

        let positional: [(&'static str, &mut usize); 3] = [
            ("min_len", &mut config.min_len),
            ("max_len", &mut config.max_len),
            ("step", &mut config.step),
        ];

        if args.len() > positional.len() {
            return Err(HarnessError::InvalidArgument {
                name: "trailing",
                value: args[positional.len()..].join(" "),
            });
        }

        for ((name, slot), arg) in positional.into_iter().zip(args) {
            *slot = usize::from_str(arg).map_err(|_| HarnessError::InvalidArgument {
                name,
                value: arg.clone(),
            })?;
        }

        if config.step == 0 || config.min_len > config.max_len {
            return Err(HarnessError::InvalidRange {
                min: config.min_len,
                max: config.max_len,
                step: config.step,
            });
        }

        if let Some(nb_lst) = env("NB_LST") {
            config.nb_lst = usize::from_str(&nb_lst)
                .ok()
                .filter(|n| *n > 0)
                .ok_or(HarnessError::InvalidEnv {
                    name: "NB_LST",
                    value: nb_lst,
                })?;
        }

        config.sort_filter = env("SORT_FILTER").filter(|filter| !filter.is_empty());
        config.report_path = env("REPORT_PATH").map(PathBuf::from);

        if let Some(measure_comp) = env("MEASURE_COMP") {
            config.measure_comparisons = match measure_comp.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "" | "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(HarnessError::InvalidEnv {
                        name: "MEASURE_COMP",
                        value: measure_comp,
                    })
                }
            };
        }

        if let Some(seed) = env("OVERRIDE_SEED") {
            config.override_seed = Some(u64::from_str(&seed).map_err(|_| {
                HarnessError::InvalidEnv {
                    name: "OVERRIDE_SEED",
                    value: seed.clone(),
                }
            })?);
        }

        Ok(config)
    }

    /// Every list length to time, `min_len..=max_len` in `step` increments.
    pub fn lengths(&self) -> impl Iterator<Item = usize> {
        (self.min_len..=self.max_len).step_by(self.step)
    }

    pub fn selects(&self, sort_name: &str) -> bool {
        self.sort_filter
            .as_deref()
            .map_or(true, |filter| sort_name.contains(filter))
    }
}
